use crate::layout::RoutedTabBar;
use crate::pages::{CsPage, HomePage, NotFoundPage, SickDetailPage, SickPage};
use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <RoutedTabBar>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/sick") view=SickPage />
                <Route path=path!("/sick/sick/:id") view=SickDetailPage />
                <Route path=path!("/sick/cs") view=CsPage />
            </Routes>
        </RoutedTabBar>
    }
}

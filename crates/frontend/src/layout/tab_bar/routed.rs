use super::tab_bar::TabBar;
use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// `TabBar`, подключённый к текущему пути роутера.
///
/// Должен находиться внутри `<Router>`.
#[component]
pub fn RoutedTabBar(children: Children) -> impl IntoView {
    let pathname = use_location().pathname;

    Effect::new(move |_| {
        log::debug!("route: '{}'", pathname.get());
    });

    view! {
        <TabBar path=pathname>
            {children()}
        </TabBar>
    }
}

//! Страницы, на которые ведут табы

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
fn PageBody(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="page">
            <h1 class="page__title">{title}</h1>
            {children()}
        </section>
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageBody title="Home">
            <p>"Главная"</p>
        </PageBody>
    }
}

#[component]
pub fn SickPage() -> impl IntoView {
    view! {
        <PageBody title="Sick">
            <p>"Список обращений"</p>
        </PageBody>
    }
}

/// `/sick/sick/:id` - подсвечивает таб "Sick"
#[component]
pub fn SickDetailPage() -> impl IntoView {
    let params = use_params_map();
    let id = move || params.with(|p| p.get("id").unwrap_or_default());

    view! {
        <PageBody title="Sick">
            <p>"Обращение: " {id}</p>
        </PageBody>
    }
}

#[component]
pub fn CsPage() -> impl IntoView {
    view! {
        <PageBody title="CS">
            <p>"Поддержка"</p>
        </PageBody>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageBody title="Not found">
            <p>"Страница не найдена"</p>
        </PageBody>
    }
}

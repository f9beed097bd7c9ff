use super::classes::{aria_current, indicator_class, link_class};
use contracts::tab_bar::{load_config, TabBarConfig, TabDescriptor};
use leptos::prelude::*;

/// Нижняя панель навигации с контентом страницы над ней.
///
/// Текущий путь передаётся снаружи, поэтому компонент не зависит от роутера
/// и рендерится для любой строки. Ссылки - обычные `<a>`: клиентскую
/// навигацию выполняет `<Router>`, перехватывая клики.
#[component]
pub fn TabBar(
    /// Current route path
    #[prop(into)]
    path: Signal<String>,
    /// Tab set; the embedded default when omitted
    #[prop(optional)]
    config: Option<TabBarConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_else(default_config);

    let links = config
        .tabs
        .into_iter()
        .map(|tab| {
            let separator = tab.separator_after;
            view! {
                <TabLink tab=tab path=path />
                {separator.then(|| view! {
                    <span class="tab-bar__separator" aria-hidden="true"></span>
                })}
            }
        })
        .collect_view();

    view! {
        <div class="tab-bar-content">
            {children()}
        </div>
        <nav data-zone="tab-bar" class="tab-bar">
            {links}
        </nav>
    }
}

#[component]
fn TabLink(tab: TabDescriptor, path: Signal<String>) -> impl IntoView {
    let TabDescriptor {
        key, label, href, ..
    } = tab.clone();
    let active = Memo::new(move |_| path.with(|p| tab.is_active(p)));

    view! {
        <a
            href=href
            class=move || link_class(active.get())
            aria-current=move || aria_current(active.get())
            data-tab-key=key
        >
            <span class="tab-bar__label">{label}</span>
            <span class=move || indicator_class(active.get())></span>
        </a>
    }
}

fn default_config() -> TabBarConfig {
    match load_config() {
        Ok(config) => config,
        Err(err) => {
            log::error!("tab bar config rejected, rendering no tabs: {err:#}");
            TabBarConfig::default()
        }
    }
}

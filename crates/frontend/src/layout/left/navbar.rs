use leptos::prelude::*;

use crate::app::AppHandle;
use crate::routes::app_route::AppRoute;
use crate::routes::navigator::Navigator;
use crate::shared::icons::icon;

/// Top-level sections; the withdrawal flow is reached from the asset list
fn sections() -> Vec<(AppRoute, &'static str, &'static str)> {
    vec![
        (AppRoute::Assets, "assets", "Assets"),
        (AppRoute::Wallets, "wallets", "Wallets"),
        (AppRoute::Security, "security", "Security"),
    ]
}

#[component]
pub fn Navbar(app: AppHandle) -> impl IntoView {
    view! {
        <nav class="main-nav-bar">
            <ul>
                {sections().into_iter().map(|(route, icon_name, title)| {
                    let href = route.path();
                    let target = route.clone();
                    let is_active = move || app.navigator.current() == route;
                    view! {
                        <li class:active=is_active>
                            <a
                                href=href
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    app.navigator.push(target.clone());
                                }
                            >
                                {icon(icon_name)}
                                <span>{title}</span>
                            </a>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </nav>
    }
}

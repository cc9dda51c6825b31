//! Auth gate: `LoginPage` until a session exists, then the main layout.

use leptos::prelude::*;

use crate::app::AppHandle;
use crate::layout::Shell;
use crate::routes::routes::AppRoutes;
use crate::system::pages::login::LoginPage;

#[component]
pub fn AppShell(app: AppHandle) -> impl IntoView {
    view! {
        <Show
            when=move || app.is_authenticated()
            fallback=move || view! { <LoginPage app=app /> }
        >
            <Shell app=app>
                <AppRoutes app=app />
            </Shell>
        </Show>
    }
}

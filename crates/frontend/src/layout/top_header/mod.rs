//! TopHeader component: brand, signed-in email and logout.

use leptos::prelude::*;

use crate::app::AppHandle;
use crate::shared::icons::icon;

#[component]
pub fn TopHeader(app: AppHandle) -> impl IntoView {
    let profile = app.root().profile();
    {
        let profile = profile.clone();
        leptos::task::spawn_local(async move {
            if profile.personal_data().is_none() {
                let _ = profile.fetch_personal_data().await;
            }
        });
    }
    let profile = StoredValue::new_local(profile);

    let email = move || {
        profile
            .with_value(|p| p.personal_data())
            .map(|d| d.email)
            .unwrap_or_default()
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Wallet"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    <span>{email}</span>
                </div>
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| app.logout()
                    title="Log out"
                >
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}

use leptos::prelude::*;
use std::rc::Rc;
use thaw::*;

use crate::root_store::RootStore;
use crate::shared::components::ui::Badge;
use crate::shared::components::PageHeader;

/// Two-factor status and account details
#[component]
#[allow(non_snake_case)]
pub fn SecurityPage(root: Rc<RootStore>) -> impl IntoView {
    let profile = root.profile();

    {
        let profile = profile.clone();
        leptos::task::spawn_local(async move {
            let _ = profile.fetch_tfa_status().await;
            let _ = profile.fetch_personal_data().await;
        });
    }

    let profile = StoredValue::new_local(profile);
    let tfa_known = move || profile.with_value(|p| p.is_2fa_known());
    let tfa_enabled = move || profile.with_value(|p| p.is_2fa_enabled());
    let email = move || profile.with_value(|p| p.personal_data().map(|d| d.email));

    view! {
        <div class="page page--narrow">
            <PageHeader title="Security".to_string() />

            <section class="security__row">
                <span>"Two-Factor Authentication"</span>
                {move || match (tfa_known(), tfa_enabled()) {
                    (false, _) => view! { <Spinner size=SpinnerSize::Tiny /> }.into_any(),
                    (true, true) => view! { <Badge variant="success">"Enabled"</Badge> }.into_any(),
                    (true, false) => view! { <Badge variant="warning">"Disabled"</Badge> }.into_any(),
                }}
            </section>

            <Show when=move || tfa_known() && !tfa_enabled()>
                <MessageBar intent=MessageBarIntent::Info>
                    "Enable Two-Factor Authentication in your authenticator app settings to unlock withdrawals."
                </MessageBar>
            </Show>

            {move || email().map(|email| view! {
                <section class="security__row">
                    <span>"Email"</span>
                    <span>{email}</span>
                </section>
            })}
        </div>
    }
}

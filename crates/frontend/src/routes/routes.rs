use leptos::prelude::*;

use super::app_route::AppRoute;
use crate::app::AppHandle;
use crate::domain::a001_asset::ui::AssetList;
use crate::domain::a002_wallet::ui::WalletList;
use crate::domain::a003_profile::ui::SecurityPage;
use crate::usecases::u501_withdraw_crypto::{ConfirmOperationPage, WithdrawCryptoPage};

/// Page for the current route, rebuilt when the route or the session
/// stores change
#[component]
pub fn AppRoutes(app: AppHandle) -> impl IntoView {
    move || {
        let root = app.root();
        root.track_session();
        let navigator = app.navigator();

        match app.navigator.current() {
            AppRoute::Assets => view! { <AssetList root=root navigator=navigator /> }.into_any(),
            AppRoute::Wallets => view! { <WalletList root=root /> }.into_any(),
            AppRoute::WithdrawCrypto { asset_id } => view! {
                <WithdrawCryptoPage root=root navigator=navigator asset_id=asset_id />
            }
            .into_any(),
            AppRoute::ConfirmOperation { operation_id } => view! {
                <ConfirmOperationPage navigator=navigator operation_id=operation_id />
            }
            .into_any(),
            AppRoute::Security => view! { <SecurityPage root=root /> }.into_any(),
            AppRoute::NotFound(path) => view! {
                <div class="page">
                    <h1>"Page not found"</h1>
                    <p><code>{path}</code></p>
                </div>
            }
            .into_any(),
        }
    }
}

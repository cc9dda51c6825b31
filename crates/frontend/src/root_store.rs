//! Composition root: one `RestApi`, every API wrapper and every store.

use leptos::reactive::traits::{Notify, Track};
use leptos::reactive::signal::ArcTrigger;
use std::cell::RefCell;
use std::rc::Rc;

use crate::domain::a001_asset::{AssetApi, AssetStore};
use crate::domain::a002_wallet::{WalletApi, WalletStore};
use crate::domain::a003_profile::{ProfileApi, ProfileStore};
use crate::domain::a004_withdraw::{WithdrawApi, WithdrawStore};
use crate::routes::navigator::Navigator;
use crate::shared::config::AppConfig;
use crate::shared::rest::{GlooTransport, HttpTransport, RestApi};
use crate::system::auth::api::AuthApi;
use crate::system::auth::storage::{LocalStorageTokens, TokenStorage};
use crate::system::auth::store::AuthStore;
use crate::usecases::u501_withdraw_crypto::WithdrawFlow;

/// Stores holding data of the signed-in client
struct SessionStores {
    wallets: Rc<WalletStore>,
    profile: Rc<ProfileStore>,
    withdraw: Rc<WithdrawStore>,
}

impl SessionStores {
    fn new(rest: &RestApi) -> Self {
        Self {
            wallets: Rc::new(WalletStore::new(WalletApi::new(rest.clone()))),
            profile: Rc::new(ProfileStore::new(ProfileApi::new(rest.clone()))),
            withdraw: Rc::new(WithdrawStore::new(WithdrawApi::new(rest.clone()))),
        }
    }
}

pub struct RootStore {
    config: AppConfig,
    rest: RestApi,
    auth: Rc<AuthStore>,
    assets: Rc<AssetStore>,
    session: RefCell<SessionStores>,
    /// Fires after [`RootStore::reset`] swapped the session stores
    changed: ArcTrigger,
}

impl RootStore {
    pub fn new(
        config: AppConfig,
        transport: Rc<dyn HttpTransport>,
        tokens: Rc<dyn TokenStorage>,
    ) -> Self {
        let rest = RestApi::new(config.rest_base_url(), transport, tokens.clone());
        log::debug!("REST base URL: {}", rest.url(""));

        Self {
            auth: Rc::new(AuthStore::new(AuthApi::new(rest.clone()), tokens)),
            assets: Rc::new(AssetStore::new(AssetApi::new(rest.clone()))),
            session: RefCell::new(SessionStores::new(&rest)),
            changed: ArcTrigger::new(),
            config,
            rest,
        }
    }

    /// Root store of the running page
    pub fn browser(config: AppConfig) -> Self {
        Self::new(
            config,
            Rc::new(GlooTransport),
            Rc::new(LocalStorageTokens),
        )
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Subscribes the running reactive closure to [`RootStore::reset`]
    pub fn track_session(&self) {
        self.changed.track();
    }

    pub fn auth(&self) -> Rc<AuthStore> {
        self.auth.clone()
    }

    pub fn assets(&self) -> Rc<AssetStore> {
        self.assets.clone()
    }

    pub fn wallets(&self) -> Rc<WalletStore> {
        self.changed.track();
        self.session.borrow().wallets.clone()
    }

    pub fn profile(&self) -> Rc<ProfileStore> {
        self.changed.track();
        self.session.borrow().profile.clone()
    }

    pub fn withdraw(&self) -> Rc<WithdrawStore> {
        self.changed.track();
        self.session.borrow().withdraw.clone()
    }

    /// Withdrawal workflow for `asset_id` over the current session stores
    pub fn withdraw_flow(&self, asset_id: &str, navigator: Rc<dyn Navigator>) -> WithdrawFlow {
        self.changed.track();
        let session = self.session.borrow();
        WithdrawFlow::new(
            asset_id,
            session.withdraw.clone(),
            session.wallets.clone(),
            session.profile.clone(),
            self.assets.clone(),
            navigator,
        )
    }

    /// Drops everything tied to the signed-in client. The asset catalog is
    /// public and survives.
    pub fn reset(&self) {
        *self.session.borrow_mut() = SessionStores::new(&self.rest);
        self.auth.reset();
        log::info!("Session stores reset");
        self.changed.notify();
    }

    pub async fn logout(&self) {
        self.auth.revoke().await;
        self.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::change_counter::ChangeCounter;
    use crate::shared::rest::testing::{MockTransport, TEST_BASE};
    use crate::shared::rest::HttpMethod;
    use futures::executor::block_on;
    use serde_json::json;

    fn root(mock: &Rc<MockTransport>) -> RootStore {
        let config = AppConfig {
            api_base: Some(TEST_BASE.trim_end_matches("/api/v1").to_string()),
            ..AppConfig::default()
        };
        RootStore::new(config, mock.clone(), mock.tokens())
    }

    #[test]
    fn test_stores_share_the_configured_base_url() {
        let mock = MockTransport::new();
        mock.respond(HttpMethod::Get, "/wallets", 200, json!([]));
        let root = root(&mock);

        block_on(root.wallets().fetch_wallets()).unwrap();

        assert_eq!(mock.calls()[0].url, format!("{}/wallets", TEST_BASE));
    }

    #[test]
    fn test_reset_rebuilds_session_but_keeps_assets() {
        let mock = MockTransport::new();
        mock.tokens().save("access", "refresh");
        let root = root(&mock);
        assert!(root.auth().is_authenticated());

        let assets = root.assets();
        let wallets = root.wallets();
        let withdraw = root.withdraw();
        withdraw.begin_draft("BTC");
        let changes = ChangeCounter::new(&root.changed);

        root.reset();

        assert!(Rc::ptr_eq(&assets, &root.assets()));
        assert!(!Rc::ptr_eq(&wallets, &root.wallets()));
        assert_eq!(root.withdraw().asset_id(), None);
        assert!(!root.auth().is_authenticated());
        assert!(changes.changed());
    }

    #[test]
    fn test_logout_revokes_and_resets() {
        let mock = MockTransport::new();
        mock.tokens().save("access", "refresh");
        mock.respond_raw(HttpMethod::Post, "/auth/logout", 204, "");
        let root = root(&mock);

        block_on(root.logout());

        assert_eq!(mock.calls_to(HttpMethod::Post, "/auth/logout").len(), 1);
        assert!(!root.auth().is_authenticated());
        assert_eq!(mock.tokens().access_token(), None);
    }
}

use contracts::domain::a002_wallet::Wallet;
use leptos::reactive::traits::{Notify, Track};
use leptos::reactive::signal::ArcTrigger;
use std::cell::RefCell;

use super::api::WalletApi;
use crate::shared::loadable::Loadable;
use crate::shared::rest::ApiResponse;

pub struct WalletStore {
    api: WalletApi,
    wallets: RefCell<Loadable<Vec<Wallet>>>,
    changed: ArcTrigger,
}

impl WalletStore {
    pub fn new(api: WalletApi) -> Self {
        Self {
            api,
            wallets: RefCell::new(Loadable::NotLoaded),
            changed: ArcTrigger::new(),
        }
    }

    pub fn wallets(&self) -> Vec<Wallet> {
        self.changed.track();
        self.wallets.borrow().last_known().cloned().unwrap_or_default()
    }

    pub fn trading_wallets(&self) -> Vec<Wallet> {
        self.wallets()
            .into_iter()
            .filter(Wallet::is_trading)
            .collect()
    }

    pub fn is_loaded(&self) -> bool {
        self.changed.track();
        self.wallets.borrow().ready().is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.changed.track();
        self.wallets.borrow().is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.changed.track();
        self.wallets.borrow().error().map(str::to_string)
    }

    /// Balance of `asset_id` in the first trading wallet, 0 when the wallet
    /// has no entry for it. `None` unless the wallets are freshly loaded.
    pub fn balance_of(&self, asset_id: &str) -> Option<f64> {
        self.changed.track();
        self.wallets
            .borrow()
            .ready()
            .map(|wallets| trading_balance(wallets, asset_id))
    }

    /// Like [`WalletStore::balance_of`] but falls back to stale data, for
    /// display only
    pub fn last_known_balance_of(&self, asset_id: &str) -> Option<f64> {
        self.changed.track();
        self.wallets
            .borrow()
            .last_known()
            .map(|wallets| trading_balance(wallets, asset_id))
    }

    pub async fn fetch_wallets(&self) -> ApiResponse<()> {
        self.wallets.borrow_mut().start();
        self.changed.notify();

        let result = self.api.fetch_wallets().await;
        let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
        if let Err(e) = &outcome {
            log::error!("Failed to load wallets: {}", e);
        }
        self.wallets.borrow_mut().resolve(result);
        self.changed.notify();
        outcome
    }
}

fn trading_balance(wallets: &[Wallet], asset_id: &str) -> f64 {
    wallets
        .iter()
        .find(|w| w.is_trading())
        .and_then(|wallet| wallet.balance_of(asset_id))
        .map(|b| b.balance)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::rest::testing::{rest_api, MockTransport};
    use crate::shared::rest::HttpMethod;
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    fn store(mock: &Rc<MockTransport>) -> WalletStore {
        WalletStore::new(WalletApi::new(rest_api(mock)))
    }

    #[test]
    fn test_balance_comes_from_first_trading_wallet() {
        let mock = MockTransport::new();
        mock.respond(
            HttpMethod::Get,
            "/wallets",
            200,
            json!([
                {"id": "w-api", "name": "Bot", "type": "Api",
                 "balances": [{"assetId": "BTC", "balance": 999.0}]},
                {"id": "w-1", "name": "Trading", "type": "Trading",
                 "balances": [{"assetId": "BTC", "balance": 300.0, "reserved": 5.0}]}
            ]),
        );
        let wallets = store(&mock);
        assert_eq!(wallets.balance_of("BTC"), None);

        block_on(wallets.fetch_wallets()).unwrap();

        assert_eq!(wallets.wallets().len(), 2);
        assert_eq!(wallets.trading_wallets().len(), 1);
        assert_eq!(wallets.balance_of("BTC"), Some(300.0));
        assert_eq!(wallets.balance_of("ETH"), Some(0.0));
    }

    #[test]
    fn test_refresh_failure_keeps_last_balances_visible() {
        let mock = MockTransport::new();
        mock.respond(
            HttpMethod::Get,
            "/wallets",
            200,
            json!([{"id": "w-1", "name": "Trading", "type": "Trading",
                    "balances": [{"assetId": "BTC", "balance": 1.5}]}]),
        );
        mock.respond_raw(HttpMethod::Get, "/wallets", 502, "bad gateway");
        let wallets = store(&mock);

        block_on(wallets.fetch_wallets()).unwrap();
        assert!(block_on(wallets.fetch_wallets()).is_err());

        assert!(!wallets.is_loaded());
        assert_eq!(wallets.balance_of("BTC"), None);
        assert_eq!(wallets.last_known_balance_of("BTC"), Some(1.5));
        assert_eq!(wallets.error().as_deref(), Some("HTTP 502: bad gateway"));
    }
}

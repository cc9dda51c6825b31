use contracts::domain::a001_asset::{Asset, AssetCategory, AssetDescription, PaymentMethod};
use leptos::reactive::traits::{Notify, Track};
use leptos::reactive::signal::ArcTrigger;
use std::cell::RefCell;
use std::collections::HashMap;

use super::api::AssetApi;
use crate::shared::loadable::Loadable;
use crate::shared::rest::ApiResponse;

#[derive(Default)]
struct AssetState {
    assets: Loadable<Vec<Asset>>,
    categories: Vec<AssetCategory>,
    descriptions: HashMap<String, AssetDescription>,
    payment_methods: Vec<PaymentMethod>,
}

/// Asset catalog. Survives logout, unlike the session stores.
pub struct AssetStore {
    api: AssetApi,
    state: RefCell<AssetState>,
    changed: ArcTrigger,
}

impl AssetStore {
    pub fn new(api: AssetApi) -> Self {
        Self {
            api,
            state: RefCell::new(AssetState::default()),
            changed: ArcTrigger::new(),
        }
    }

    pub fn assets(&self) -> Vec<Asset> {
        self.changed.track();
        self.state
            .borrow()
            .assets
            .last_known()
            .cloned()
            .unwrap_or_default()
    }

    pub fn is_loading(&self) -> bool {
        self.changed.track();
        self.state.borrow().assets.is_loading()
    }

    pub fn error(&self) -> Option<String> {
        self.changed.track();
        self.state.borrow().assets.error().map(str::to_string)
    }

    pub fn get_by_id(&self, asset_id: &str) -> Option<Asset> {
        self.changed.track();
        self.state
            .borrow()
            .assets
            .last_known()
            .and_then(|assets| assets.iter().find(|a| a.id == asset_id).cloned())
    }

    /// Categories by their sort order
    pub fn categories(&self) -> Vec<AssetCategory> {
        self.changed.track();
        let mut categories = self.state.borrow().categories.clone();
        categories.sort_by_key(|c| c.sort_order);
        categories
    }

    /// Assets of one category; `None` selects uncategorized assets
    pub fn assets_in_category(&self, category_id: Option<&str>) -> Vec<Asset> {
        self.assets()
            .into_iter()
            .filter(|a| a.category_id.as_deref() == category_id)
            .collect()
    }

    pub fn payment_methods(&self) -> Vec<PaymentMethod> {
        self.changed.track();
        self.state.borrow().payment_methods.clone()
    }

    /// Names of available payment methods accepting `asset_id`
    pub fn payment_methods_for(&self, asset_id: &str) -> Vec<String> {
        self.payment_methods()
            .into_iter()
            .filter(|m| m.available && m.assets.iter().any(|a| a == asset_id))
            .map(|m| m.name)
            .collect()
    }

    pub async fn fetch_assets(&self) -> ApiResponse<()> {
        self.state.borrow_mut().assets.start();
        self.changed.notify();

        let result = self.api.fetch_assets().await;
        let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
        {
            let mut state = self.state.borrow_mut();
            let AssetState {
                assets,
                descriptions,
                ..
            } = &mut *state;
            assets.resolve(result.map(|mut list| {
                apply_descriptions(&mut list, descriptions);
                list
            }));
        }
        if let Err(e) = &outcome {
            log::error!("Failed to load assets: {}", e);
        }
        self.changed.notify();
        outcome
    }

    pub async fn fetch_categories(&self) -> ApiResponse<()> {
        let categories = self.api.fetch_categories().await?;
        self.state.borrow_mut().categories = categories;
        self.changed.notify();
        Ok(())
    }

    /// Loads long descriptions and merges them into already loaded assets
    pub async fn fetch_descriptions(&self) -> ApiResponse<()> {
        let descriptions = self.api.fetch_description().await?;
        {
            let mut state = self.state.borrow_mut();
            state.descriptions = descriptions
                .into_iter()
                .map(|d| (d.id.clone(), d))
                .collect();
            let AssetState {
                assets,
                descriptions,
                ..
            } = &mut *state;
            if let Loadable::Loaded(assets) = assets {
                apply_descriptions(assets, descriptions);
            }
        }
        self.changed.notify();
        Ok(())
    }

    pub async fn fetch_payment_methods(&self) -> ApiResponse<()> {
        let methods = self.api.fetch_payment_methods().await?;
        self.state.borrow_mut().payment_methods = methods;
        self.changed.notify();
        Ok(())
    }

    /// Catalog, categories, descriptions and payment methods, one after
    /// another. Failures are logged and left in the store state.
    pub async fn fetch_all(&self) {
        if self.fetch_assets().await.is_err() {
            return;
        }
        if let Err(e) = self.fetch_categories().await {
            log::warn!("Failed to load asset categories: {}", e);
        }
        if let Err(e) = self.fetch_descriptions().await {
            log::warn!("Failed to load asset descriptions: {}", e);
        }
        if let Err(e) = self.fetch_payment_methods().await {
            log::warn!("Failed to load payment methods: {}", e);
        }
    }
}

fn apply_descriptions(assets: &mut [Asset], descriptions: &HashMap<String, AssetDescription>) {
    for asset in assets.iter_mut() {
        if let Some(d) = descriptions.get(&asset.id) {
            asset.description = Some(d.description.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::change_counter::ChangeCounter;
    use crate::shared::rest::testing::{rest_api, MockTransport};
    use crate::shared::rest::HttpMethod;
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    fn store(mock: &Rc<MockTransport>) -> AssetStore {
        AssetStore::new(AssetApi::new(rest_api(mock)))
    }

    fn script_catalog(mock: &MockTransport) {
        mock.respond(
            HttpMethod::Get,
            "/assets",
            200,
            json!([
                {"id": "BTC", "name": "Bitcoin", "accuracy": 8, "categoryId": "crypto"},
                {"id": "USD", "name": "US Dollar", "accuracy": 2, "categoryId": "fiat"},
                {"id": "LKK", "name": "Lykke", "accuracy": 4}
            ]),
        );
        mock.respond(
            HttpMethod::Get,
            "/assets/categories",
            200,
            json!([
                {"id": "fiat", "name": "Fiat", "sortOrder": 2},
                {"id": "crypto", "name": "Crypto", "sortOrder": 1}
            ]),
        );
        mock.respond(
            HttpMethod::Get,
            "/assets/description",
            200,
            json!([{"id": "BTC", "description": "Digital gold"}]),
        );
        mock.respond(
            HttpMethod::Get,
            "/paymentmethods",
            200,
            json!([
                {"name": "Card", "available": true, "assets": ["USD"]},
                {"name": "Swift", "available": false, "assets": ["USD"]}
            ]),
        );
    }

    #[test]
    fn test_fetch_all_merges_descriptions() {
        let mock = MockTransport::new();
        script_catalog(&mock);
        let assets = store(&mock);

        block_on(assets.fetch_all());

        let btc = assets.get_by_id("BTC").unwrap();
        assert_eq!(btc.accuracy, 8);
        assert_eq!(btc.description.as_deref(), Some("Digital gold"));
        assert_eq!(assets.get_by_id("USD").unwrap().description, None);
        assert_eq!(assets.get_by_id("ETH"), None);
    }

    #[test]
    fn test_categories_sorted_and_grouping() {
        let mock = MockTransport::new();
        script_catalog(&mock);
        let assets = store(&mock);

        block_on(assets.fetch_all());

        let names: Vec<_> = assets.categories().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Crypto", "Fiat"]);
        assert_eq!(assets.assets_in_category(Some("crypto")).len(), 1);
        assert_eq!(assets.assets_in_category(None)[0].id, "LKK");
    }

    #[test]
    fn test_failed_catalog_is_reported() {
        let mock = MockTransport::new();
        mock.respond(HttpMethod::Get, "/assets", 503, json!({"message": "maintenance"}));
        let assets = store(&mock);

        assert!(block_on(assets.fetch_assets()).is_err());
        assert!(assets.assets().is_empty());
        assert_eq!(assets.error().as_deref(), Some("HTTP 503: maintenance"));
        assert!(mock.calls_to(HttpMethod::Get, "/assets/categories").is_empty());
    }

    #[test]
    fn test_payment_methods_only_available_ones() {
        let mock = MockTransport::new();
        script_catalog(&mock);
        let assets = store(&mock);

        block_on(assets.fetch_all());

        assert_eq!(assets.payment_methods().len(), 2);
        assert_eq!(assets.payment_methods_for("USD"), vec!["Card"]);
        assert!(assets.payment_methods_for("BTC").is_empty());
    }

    #[test]
    fn test_fetch_fires_change_trigger() {
        let mock = MockTransport::new();
        script_catalog(&mock);
        let assets = store(&mock);
        let changes = ChangeCounter::new(&assets.changed);
        assert!(!changes.changed());

        block_on(assets.fetch_assets()).unwrap();

        assert!(changes.changed());
        assert!(!changes.changed());
    }
}

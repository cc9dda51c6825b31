use contracts::shared::money::format_amount;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use super::amount_input::parse_amount;
use super::submission::{CancelGuard, CancelToken, WithdrawError, WithdrawFlow};
use super::validation::{FieldErrors, WithdrawField};
use crate::domain::a001_asset::AssetStore;
use crate::domain::a002_wallet::WalletStore;
use crate::domain::a003_profile::ProfileStore;
use crate::domain::a004_withdraw::WithdrawStore;
use crate::root_store::RootStore;
use crate::routes::app_route::AppRoute;
use crate::routes::navigator::Navigator;

/// ViewModel of the crypto withdrawal page
///
/// - Store handles live in local `StoredValue`s so the struct stays `Copy`
/// - Store reads track the stores' change triggers, so getters re-run in
///   reactive closures
/// - Commands: `init`, `submit`, field setters, `cancel`
#[derive(Clone, Copy)]
pub struct WithdrawCryptoViewModel {
    flow: StoredValue<Rc<WithdrawFlow>, LocalStorage>,
    withdraw: StoredValue<Rc<WithdrawStore>, LocalStorage>,
    wallets: StoredValue<Rc<WalletStore>, LocalStorage>,
    profile: StoredValue<Rc<ProfileStore>, LocalStorage>,
    assets: StoredValue<Rc<AssetStore>, LocalStorage>,
    navigator: StoredValue<Rc<dyn Navigator>, LocalStorage>,
    /// Cancels in-flight work once the page is disposed
    cancel: StoredValue<CancelGuard, LocalStorage>,
    pub amount_text: RwSignal<String>,
    /// Set by the first submit; live field errors are shown from then on
    pub attempted: RwSignal<bool>,
    pub submit_errors: RwSignal<FieldErrors>,
    pub form_error: RwSignal<Option<String>>,
}

impl WithdrawCryptoViewModel {
    pub fn new(root: &RootStore, asset_id: &str, navigator: Rc<dyn Navigator>) -> Self {
        let flow = Rc::new(root.withdraw_flow(asset_id, navigator.clone()));

        Self {
            flow: StoredValue::new_local(flow),
            withdraw: StoredValue::new_local(root.withdraw()),
            wallets: StoredValue::new_local(root.wallets()),
            profile: StoredValue::new_local(root.profile()),
            assets: StoredValue::new_local(root.assets()),
            navigator: StoredValue::new_local(navigator),
            cancel: StoredValue::new_local(CancelToken::new().guard()),
            amount_text: RwSignal::new(String::new()),
            attempted: RwSignal::new(false),
            submit_errors: RwSignal::new(FieldErrors::default()),
            form_error: RwSignal::new(None),
        }
    }

    fn flow(&self) -> Rc<WithdrawFlow> {
        self.flow.get_value()
    }

    fn withdraw(&self) -> Rc<WithdrawStore> {
        self.withdraw.get_value()
    }

    /// Fresh draft, then fee, rules, balance and 2FA status
    pub fn init(&self) {
        let flow = self.flow();
        spawn_local(async move {
            flow.init().await;
        });
    }

    // ------------------------------------------------------------------
    // Derived state
    // ------------------------------------------------------------------

    pub fn asset_name(&self) -> String {
        let flow = self.flow();
        self.assets
            .get_value()
            .get_by_id(flow.asset_id())
            .map(|a| a.name)
            .unwrap_or_else(|| flow.asset_id().to_string())
    }

    pub fn asset_description(&self) -> Option<String> {
        let flow = self.flow();
        self.assets
            .get_value()
            .get_by_id(flow.asset_id())
            .and_then(|a| a.description)
    }

    /// `None` until the asset catalog is loaded
    pub fn accuracy(&self) -> Option<u32> {
        self.flow().accuracy()
    }

    /// `None` while the balance or the asset accuracy is unknown
    pub fn balance_text(&self) -> Option<String> {
        let flow = self.flow();
        Some(format_amount(flow.balance()?, flow.accuracy()?))
    }

    pub fn is_balance_loading(&self) -> bool {
        self.wallets.with_value(|w| w.is_loading())
    }

    /// Warning banner is shown only once the status is known to be off
    pub fn needs_2fa(&self) -> bool {
        let profile = self.profile.get_value();
        profile.is_2fa_known() && !profile.is_2fa_enabled()
    }

    pub fn has_amount(&self) -> bool {
        self.withdraw().draft().amount > 0.0
    }

    /// `(fee, total)` formatted to the asset accuracy
    pub fn fee_lines(&self) -> Option<(String, String)> {
        let flow = self.flow();
        let breakdown = flow.fee_breakdown()?;
        let accuracy = flow.accuracy()?;
        Some((
            format_amount(breakdown.fee_size, accuracy),
            format_amount(breakdown.total_amount, accuracy),
        ))
    }

    pub fn fee_error(&self) -> Option<String> {
        self.withdraw().fee().error().map(str::to_string)
    }

    pub fn base_address(&self) -> String {
        self.withdraw().draft().base_address
    }

    pub fn address_extension(&self) -> String {
        self.withdraw().draft().address_extension
    }

    pub fn base_address_title(&self) -> String {
        self.withdraw().base_address_title()
    }

    pub fn address_extension_title(&self) -> String {
        self.withdraw().address_extension_title()
    }

    pub fn is_extension_mandatory(&self) -> bool {
        self.withdraw().is_address_extension_mandatory()
    }

    /// Server-side errors first, then live rules after the first attempt
    pub fn field_error(&self, field: WithdrawField) -> Option<String> {
        if let Some(message) = self.submit_errors.with(|e| e.get(field).map(str::to_string)) {
            return Some(message);
        }
        if !self.attempted.get() {
            return None;
        }
        self.flow().draft_errors().get(field).map(str::to_string)
    }

    /// Submit button state; field rules are checked on submit instead
    pub fn can_submit(&self) -> bool {
        self.flow().can_submit()
    }

    pub fn is_submitting(&self) -> bool {
        self.flow().state().in_flight()
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    fn edited(&self) {
        self.submit_errors.set(FieldErrors::default());
        self.form_error.set(None);
    }

    /// `masked` comes from the amount input mask
    pub fn set_amount(&self, masked: String) {
        self.withdraw().set_amount(parse_amount(&masked));
        self.amount_text.set(masked);
        self.edited();
    }

    pub fn set_base_address(&self, value: String) {
        self.withdraw().set_base_address(value);
        self.edited();
    }

    pub fn set_address_extension(&self, value: String) {
        self.withdraw().set_address_extension(value);
        self.edited();
    }

    fn show_error(&self, error: &WithdrawError) {
        // page may be gone by now
        let _ = self.submit_errors.try_set(error.field_errors());
        let _ = self.form_error.try_set(error.form_message());
    }

    /// Marks every field as attempted, then runs the local checks. Requests
    /// are only made once they pass.
    pub fn submit(&self) {
        let flow = self.flow();
        if flow.state().in_flight() {
            return;
        }
        self.attempted.set(true);
        self.edited();

        if let Err(e) = flow.precheck() {
            log::debug!("Withdrawal form rejected: {}", e);
            self.show_error(&e);
            return;
        }

        let token = self.cancel.with_value(CancelGuard::token);
        let vm = *self;
        spawn_local(async move {
            if let Err(e) = flow.submit(&token).await {
                vm.show_error(&e);
            }
        });
    }

    pub fn open_security(&self) {
        self.navigator.with_value(|n| n.push(AppRoute::Security));
    }

    /// "Cancel and go back"
    pub fn cancel(&self) {
        self.withdraw().discard_draft();
        self.navigator.with_value(|n| n.back());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::navigator::testing::RecordingNavigator;
    use crate::shared::config::AppConfig;
    use crate::shared::rest::testing::{MockTransport, TEST_BASE};
    use crate::shared::rest::HttpMethod;
    use futures::executor::block_on;
    use leptos::reactive::owner::Owner;
    use serde_json::json;

    fn root(mock: &Rc<MockTransport>) -> RootStore {
        mock.respond(
            HttpMethod::Get,
            "/assets",
            200,
            json!([{"id": "BTC", "name": "Bitcoin", "accuracy": 8}]),
        );
        mock.respond(
            HttpMethod::Get,
            "/withdrawals/crypto/BTC/fee",
            200,
            json!({"absoluteFee": 0.0001}),
        );
        mock.respond(
            HttpMethod::Get,
            "/withdrawals/crypto/BTC/info",
            200,
            json!({"baseAddressTitle": "Bitcoin address"}),
        );
        mock.respond(
            HttpMethod::Get,
            "/wallets",
            200,
            json!([{"id": "w-1", "name": "Trading", "type": "Trading",
                    "balances": [{"assetId": "BTC", "balance": 300.0}]}]),
        );
        mock.respond(HttpMethod::Get, "/profile/2fa", 200, json!({"enabled": true}));
        let config = AppConfig {
            api_base: Some(TEST_BASE.trim_end_matches("/api/v1").to_string()),
            ..AppConfig::default()
        };
        RootStore::new(config, mock.clone(), mock.tokens())
    }

    fn view_model(root: &RootStore) -> WithdrawCryptoViewModel {
        let vm = WithdrawCryptoViewModel::new(root, "BTC", Rc::new(RecordingNavigator::default()));
        block_on(vm.flow().init());
        vm
    }

    #[test]
    fn test_first_submit_shows_required_field_errors() {
        let owner = Owner::new();
        owner.set();
        let mock = MockTransport::new();
        let root = root(&mock);
        let vm = view_model(&root);
        assert!(vm.can_submit());
        assert_eq!(vm.field_error(WithdrawField::BaseAddress), None);

        vm.submit();

        assert!(vm.attempted.get_untracked());
        assert_eq!(
            vm.field_error(WithdrawField::BaseAddress).as_deref(),
            Some("Field Bitcoin address should not be empty")
        );
        assert_eq!(
            vm.field_error(WithdrawField::Amount).as_deref(),
            Some("Field Amount should not be empty")
        );
        assert_eq!(vm.form_error.get_untracked(), None);
        assert!(mock
            .calls_to(HttpMethod::Post, "/withdrawals/crypto/BTC/validate")
            .is_empty());
    }

    #[test]
    fn test_edit_clears_server_errors_but_keeps_live_rules() {
        let owner = Owner::new();
        owner.set();
        let mock = MockTransport::new();
        let root = root(&mock);
        let vm = view_model(&root);

        vm.set_amount("500".to_string());
        vm.set_base_address("1BoatSLRHtKNngkdXEeobR76b53LETtpyT".to_string());
        vm.submit();
        assert!(vm.field_error(WithdrawField::Amount).is_some());

        vm.set_amount("1".to_string());
        assert_eq!(vm.field_error(WithdrawField::Amount), None);
        vm.set_base_address(String::new());
        assert_eq!(
            vm.field_error(WithdrawField::BaseAddress).as_deref(),
            Some("Field Bitcoin address should not be empty")
        );
    }

    #[test]
    fn test_balance_and_fee_lines_use_asset_accuracy() {
        let owner = Owner::new();
        owner.set();
        let mock = MockTransport::new();
        let root = root(&mock);
        let vm = view_model(&root);

        vm.set_amount("100".to_string());

        assert_eq!(vm.accuracy(), Some(8));
        assert_eq!(vm.balance_text().as_deref(), Some("300"));
        assert_eq!(
            vm.fee_lines(),
            Some(("0.0001".to_string(), "100.0001".to_string()))
        );
    }
}

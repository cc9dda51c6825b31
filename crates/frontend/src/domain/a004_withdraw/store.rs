//! Withdrawal draft, fee quote and per-asset withdrawal metadata.
//!
//! The store is the only owner of the draft; views read snapshots through
//! [`WithdrawStore::draft`] and change it through the setters, which publish
//! a change notification.

use contracts::domain::a004_withdraw::{
    WithdrawCryptoInfo, WithdrawCryptoModel, WithdrawCryptoRequest, WithdrawFee,
};
use leptos::reactive::traits::{Notify, Track};
use leptos::reactive::signal::ArcTrigger;
use std::cell::RefCell;

use super::api::WithdrawApi;
use crate::shared::loadable::Loadable;
use crate::shared::rest::ApiResponse;

#[derive(Default)]
struct WithdrawState {
    /// Asset the current draft belongs to
    asset_id: Option<String>,
    draft: WithdrawCryptoModel,
    fee: Loadable<WithdrawFee>,
    info: Loadable<WithdrawCryptoInfo>,
}

pub struct WithdrawStore {
    api: WithdrawApi,
    state: RefCell<WithdrawState>,
    changed: ArcTrigger,
}

impl WithdrawStore {
    pub fn new(api: WithdrawApi) -> Self {
        Self {
            api,
            state: RefCell::new(WithdrawState::default()),
            changed: ArcTrigger::new(),
        }
    }

    fn mutate(&self, f: impl FnOnce(&mut WithdrawState)) {
        f(&mut self.state.borrow_mut());
        self.changed.notify();
    }

    fn read<T>(&self, f: impl FnOnce(&WithdrawState) -> T) -> T {
        self.changed.track();
        f(&self.state.borrow())
    }

    // ------------------------------------------------------------------
    // Draft
    // ------------------------------------------------------------------

    /// Replaces any previous draft with an empty one for `asset_id` and
    /// forgets quotes fetched for another asset.
    pub fn begin_draft(&self, asset_id: &str) {
        self.mutate(|state| {
            *state = WithdrawState {
                asset_id: Some(asset_id.to_string()),
                ..WithdrawState::default()
            };
        });
    }

    pub fn discard_draft(&self) {
        self.mutate(|state| *state = WithdrawState::default());
    }

    pub fn asset_id(&self) -> Option<String> {
        self.read(|state| state.asset_id.clone())
    }

    pub fn draft(&self) -> WithdrawCryptoModel {
        self.read(|state| state.draft.clone())
    }

    pub fn set_amount(&self, amount: f64) {
        self.mutate(|state| state.draft.amount = amount);
    }

    pub fn set_base_address(&self, address: String) {
        self.mutate(|state| state.draft.base_address = address);
    }

    pub fn set_address_extension(&self, extension: String) {
        self.mutate(|state| state.draft.address_extension = extension);
    }

    pub fn set_balance(&self, balance: f64) {
        self.mutate(|state| state.draft.balance = balance);
    }

    // ------------------------------------------------------------------
    // Fee quote and metadata
    // ------------------------------------------------------------------

    pub fn fee(&self) -> Loadable<WithdrawFee> {
        self.read(|state| state.fee.clone())
    }

    pub fn info(&self) -> Loadable<WithdrawCryptoInfo> {
        self.read(|state| state.info.clone())
    }

    pub fn is_address_extension_mandatory(&self) -> bool {
        self.read(|state| {
            state
                .info
                .last_known()
                .map(|info| info.address_extension_mandatory)
                .unwrap_or(false)
        })
    }

    pub fn base_address_title(&self) -> String {
        self.info_or_default(|info| info.base_address_title.clone())
    }

    pub fn address_extension_title(&self) -> String {
        self.info_or_default(|info| info.address_extension_title.clone())
    }

    fn info_or_default(&self, f: impl Fn(&WithdrawCryptoInfo) -> String) -> String {
        self.read(|state| match state.info.last_known() {
            Some(info) => f(info),
            None => f(&WithdrawCryptoInfo::default()),
        })
    }

    /// Overwrites the quote. A failure leaves the quote unavailable, never
    /// zero.
    pub async fn fetch_fee(&self, asset_id: &str) -> ApiResponse<()> {
        if !self.is_current(asset_id) {
            return Ok(());
        }
        self.mutate(|state| state.fee.start());
        let result = self.api.fetch_fee(asset_id).await;
        let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
        if let Err(e) = &outcome {
            log::warn!("Failed to load withdrawal fee for {}: {}", asset_id, e);
        }
        if self.is_current(asset_id) {
            self.mutate(|state| state.fee.resolve(result));
        }
        outcome
    }

    pub async fn fetch_withdraw_crypto_info(&self, asset_id: &str) -> ApiResponse<()> {
        if !self.is_current(asset_id) {
            return Ok(());
        }
        self.mutate(|state| state.info.start());
        let result = self.api.fetch_withdraw_crypto_info(asset_id).await;
        let outcome = result.as_ref().map(|_| ()).map_err(Clone::clone);
        if let Err(e) = &outcome {
            log::warn!("Failed to load withdrawal info for {}: {}", asset_id, e);
        }
        if self.is_current(asset_id) {
            self.mutate(|state| state.info.resolve(result));
        }
        outcome
    }

    /// Drafts are keyed by asset; responses for a previous asset are dropped
    fn is_current(&self, asset_id: &str) -> bool {
        self.read(|state| state.asset_id.as_deref() == Some(asset_id))
    }

    // ------------------------------------------------------------------
    // Server round trips
    // ------------------------------------------------------------------

    /// Server-side address check. Does not touch the draft.
    pub async fn validate_withdraw_crypto_request(
        &self,
        asset_id: &str,
        draft: &WithdrawCryptoModel,
    ) -> ApiResponse<bool> {
        let request = WithdrawCryptoRequest::from(draft);
        let result = self.api.validate_withdraw_crypto(asset_id, &request).await?;
        Ok(result.is_valid)
    }

    /// Submits the withdrawal once and returns the operation id. Never
    /// retried here.
    pub async fn send_withdraw_crypto_request(
        &self,
        asset_id: &str,
        draft: &WithdrawCryptoModel,
    ) -> ApiResponse<String> {
        let request = WithdrawCryptoRequest::from(draft);
        let operation = self.api.send_withdraw_crypto(asset_id, &request).await?;
        log::info!(
            "Withdrawal of {} {} submitted as operation {}",
            request.amount,
            asset_id,
            operation.operation_id
        );
        Ok(operation.operation_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::rest::testing::{rest_api, MockTransport};
    use crate::shared::rest::HttpMethod;
    use futures::executor::block_on;
    use serde_json::json;
    use std::rc::Rc;

    fn store(mock: &Rc<MockTransport>) -> WithdrawStore {
        WithdrawStore::new(WithdrawApi::new(rest_api(mock)))
    }

    #[test]
    fn test_fee_and_info_loaded_for_current_asset() {
        let mock = MockTransport::new();
        mock.respond(
            HttpMethod::Get,
            "/withdrawals/crypto/XRP/fee",
            200,
            json!({"absoluteFee": 0.25}),
        );
        mock.respond(
            HttpMethod::Get,
            "/withdrawals/crypto/XRP/info",
            200,
            json!({
                "baseAddressTitle": "XRP address",
                "addressExtensionMandatory": true,
                "addressExtensionTitle": "Destination tag"
            }),
        );
        let withdraw = store(&mock);
        withdraw.begin_draft("XRP");

        block_on(withdraw.fetch_fee("XRP")).unwrap();
        block_on(withdraw.fetch_withdraw_crypto_info("XRP")).unwrap();

        assert_eq!(withdraw.fee().ready().unwrap().absolute_fee, 0.25);
        assert!(withdraw.is_address_extension_mandatory());
        assert_eq!(withdraw.base_address_title(), "XRP address");
        assert_eq!(withdraw.address_extension_title(), "Destination tag");
    }

    #[test]
    fn test_failed_fee_is_unavailable_not_zero() {
        let mock = MockTransport::new();
        mock.respond_raw(HttpMethod::Get, "/withdrawals/crypto/BTC/fee", 500, "");
        let withdraw = store(&mock);
        withdraw.begin_draft("BTC");

        assert!(block_on(withdraw.fetch_fee("BTC")).is_err());

        let fee = withdraw.fee();
        assert_eq!(fee.ready(), None);
        assert!(fee.error().is_some());
    }

    #[test]
    fn test_fetch_for_other_asset_is_ignored() {
        let mock = MockTransport::new();
        let withdraw = store(&mock);
        withdraw.begin_draft("BTC");

        block_on(withdraw.fetch_fee("ETH")).unwrap();

        assert!(mock.calls().is_empty());
        assert_eq!(withdraw.fee(), Loadable::NotLoaded);
    }

    #[test]
    fn test_begin_draft_resets_previous_state() {
        let withdraw = store(&MockTransport::new());
        withdraw.begin_draft("BTC");
        withdraw.set_amount(1.0);
        withdraw.set_base_address("addr".into());

        withdraw.begin_draft("ETH");

        assert_eq!(withdraw.draft(), WithdrawCryptoModel::default());
        assert_eq!(withdraw.asset_id().as_deref(), Some("ETH"));
        assert_eq!(withdraw.base_address_title(), "Address");
    }

    #[test]
    fn test_validate_leaves_draft_untouched() {
        let mock = MockTransport::new();
        mock.respond(
            HttpMethod::Post,
            "/withdrawals/crypto/BTC/validate",
            200,
            json!({"isValid": false}),
        );
        let withdraw = store(&mock);
        withdraw.begin_draft("BTC");
        withdraw.set_amount(2.0);
        withdraw.set_base_address(" 1BoatSLRHtKNngkdXEeobR76b53LETtpyT ".into());
        let before = withdraw.draft();

        let valid = block_on(withdraw.validate_withdraw_crypto_request("BTC", &before)).unwrap();

        assert!(!valid);
        assert_eq!(withdraw.draft(), before);
        let call = &mock.calls_to(HttpMethod::Post, "/withdrawals/crypto/BTC/validate")[0];
        assert_eq!(
            call.body.as_deref(),
            Some(r#"{"amount":2.0,"baseAddress":"1BoatSLRHtKNngkdXEeobR76b53LETtpyT"}"#)
        );
    }

    #[test]
    fn test_send_returns_operation_id() {
        let mock = MockTransport::new();
        mock.respond(
            HttpMethod::Post,
            "/withdrawals/crypto/BTC",
            200,
            json!({"operationId": "op-123"}),
        );
        let withdraw = store(&mock);
        let draft = WithdrawCryptoModel {
            amount: 1.0,
            base_address: "addr".into(),
            ..Default::default()
        };

        let id = block_on(withdraw.send_withdraw_crypto_request("BTC", &draft)).unwrap();

        assert_eq!(id, "op-123");
        assert_eq!(mock.calls().len(), 1);
    }
}

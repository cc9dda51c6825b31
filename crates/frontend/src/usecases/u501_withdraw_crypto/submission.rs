//! Submission workflow of the withdrawal form.
//!
//! `Idle → Validating → Submitting → Succeeded | Failed`. Local checks (2FA,
//! required fields, data availability, balance) run before any request and
//! leave the state `Idle`. Address validation always completes before the
//! withdrawal is sent, and the withdrawal is sent at most once per submit.

use contracts::domain::a004_withdraw::{WithdrawCryptoInfo, WithdrawCryptoModel};
use leptos::reactive::traits::{Notify, Track};
use leptos::reactive::signal::ArcTrigger;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use thiserror::Error;

use super::fee::{compute_fee, FeeBreakdown};
use super::validation::{
    validate_draft, FieldErrors, WithdrawField, INSUFFICIENT_BALANCE, INVALID_ADDRESS,
};
use crate::domain::a001_asset::AssetStore;
use crate::domain::a002_wallet::WalletStore;
use crate::domain::a003_profile::ProfileStore;
use crate::domain::a004_withdraw::WithdrawStore;
use crate::routes::app_route::AppRoute;
use crate::routes::navigator::Navigator;
use crate::shared::rest::ApiError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum WithdrawError {
    #[error("Two-Factor Authentication must be enabled to withdraw")]
    TwoFactorRequired,
    #[error("A withdrawal is already being submitted")]
    InFlight,
    #[error("Please correct the highlighted fields")]
    Invalid(FieldErrors),
    #[error("{0} is unavailable, please try again later")]
    DataUnavailable(&'static str),
    #[error("{}", INSUFFICIENT_BALANCE)]
    InsufficientBalance,
    #[error("{}", INVALID_ADDRESS)]
    InvalidAddress,
    #[error("Address validation failed: {0}")]
    Validation(ApiError),
    #[error("Withdrawal failed: {0}")]
    Submission(ApiError),
    #[error("Withdrawal cancelled")]
    Cancelled,
}

impl WithdrawError {
    /// Errors shown next to a field
    pub fn field_errors(&self) -> FieldErrors {
        match self {
            WithdrawError::Invalid(errors) => errors.clone(),
            WithdrawError::InsufficientBalance => {
                FieldErrors::single(WithdrawField::Amount, INSUFFICIENT_BALANCE)
            }
            WithdrawError::InvalidAddress => {
                FieldErrors::single(WithdrawField::BaseAddress, INVALID_ADDRESS)
            }
            _ => FieldErrors::default(),
        }
    }

    /// Message for the form banner when the error is not field-scoped
    pub fn form_message(&self) -> Option<String> {
        match self {
            WithdrawError::Invalid(_)
            | WithdrawError::InsufficientBalance
            | WithdrawError::InvalidAddress
            | WithdrawError::Cancelled => None,
            other => Some(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded(String),
    /// Form is usable again, like `Idle`
    Failed(WithdrawError),
}

impl SubmissionState {
    pub fn in_flight(&self) -> bool {
        matches!(self, SubmissionState::Validating | SubmissionState::Submitting)
    }
}

// ============================================================================
// Cancellation
// ============================================================================

/// Flipped when the page that started a submission goes away
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }

    /// Cancels the token when dropped
    pub fn guard(&self) -> CancelGuard {
        CancelGuard(self.clone())
    }
}

pub struct CancelGuard(CancelToken);

impl CancelGuard {
    pub fn token(&self) -> CancelToken {
        self.0.clone()
    }
}

impl Drop for CancelGuard {
    fn drop(&mut self) {
        self.0.cancel();
    }
}

// ============================================================================
// Flow
// ============================================================================

pub struct WithdrawFlow {
    asset_id: String,
    withdraw: Rc<WithdrawStore>,
    wallets: Rc<WalletStore>,
    profile: Rc<ProfileStore>,
    assets: Rc<AssetStore>,
    navigator: Rc<dyn Navigator>,
    state: RefCell<SubmissionState>,
    changed: ArcTrigger,
}

impl WithdrawFlow {
    pub fn new(
        asset_id: impl Into<String>,
        withdraw: Rc<WithdrawStore>,
        wallets: Rc<WalletStore>,
        profile: Rc<ProfileStore>,
        assets: Rc<AssetStore>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            asset_id: asset_id.into(),
            withdraw,
            wallets,
            profile,
            assets,
            navigator,
            state: RefCell::new(SubmissionState::Idle),
            changed: ArcTrigger::new(),
        }
    }

    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    pub fn state(&self) -> SubmissionState {
        self.changed.track();
        self.state.borrow().clone()
    }

    fn set_state(&self, state: SubmissionState) {
        *self.state.borrow_mut() = state;
        self.changed.notify();
    }

    /// Starts a fresh draft and loads everything the form needs.
    ///
    /// Fetch failures stay in the stores; the form shows them and submit
    /// refuses to run on missing data.
    pub async fn init(&self) {
        self.withdraw.begin_draft(&self.asset_id);
        self.set_state(SubmissionState::Idle);

        if self.assets.get_by_id(&self.asset_id).is_none() {
            self.assets.fetch_all().await;
        }
        let _ = self.withdraw.fetch_fee(&self.asset_id).await;
        let _ = self.withdraw.fetch_withdraw_crypto_info(&self.asset_id).await;
        if !self.wallets.is_loaded() {
            let _ = self.wallets.fetch_wallets().await;
        }
        self.sync_balance();
        if !self.profile.is_2fa_known() {
            let _ = self.profile.fetch_tfa_status().await;
        }
    }

    /// Copies the trading balance of the asset into the draft, once known
    pub fn sync_balance(&self) {
        if let Some(balance) = self.balance() {
            self.withdraw.set_balance(balance);
        }
    }

    /// Trading balance of the asset; `None` while wallets are not loaded
    pub fn balance(&self) -> Option<f64> {
        self.wallets.balance_of(&self.asset_id)
    }

    /// Declared accuracy of the asset; `None` until the catalog knows it
    pub fn accuracy(&self) -> Option<u32> {
        self.assets.get_by_id(&self.asset_id).map(|a| a.accuracy)
    }

    /// Fee and total for the current draft; `None` while no fresh quote or
    /// the asset accuracy is unknown
    pub fn fee_breakdown(&self) -> Option<FeeBreakdown> {
        let quote = self.withdraw.fee().ready().copied()?;
        let accuracy = self.accuracy()?;
        Some(compute_fee(&quote, self.withdraw.draft().amount, accuracy))
    }

    fn rules(&self) -> WithdrawCryptoInfo {
        self.withdraw.info().last_known().cloned().unwrap_or_default()
    }

    /// Live client-side validation of the draft
    pub fn draft_errors(&self) -> FieldErrors {
        validate_draft(&self.withdraw.draft(), &self.rules())
    }

    /// Whether a submit may start; field rules are checked by the submit
    /// itself so that it can report them
    pub fn can_submit(&self) -> bool {
        !self.state().in_flight() && self.profile.is_2fa_enabled()
    }

    /// Checks that need no request: 2FA, required fields, data
    /// availability and the balance gate, in that order.
    pub fn precheck(&self) -> Result<(), WithdrawError> {
        self.check_locally(&self.withdraw.draft())
    }

    /// Runs the whole validate → submit sequence once.
    ///
    /// On success the current route is replaced by the confirmation page of
    /// the returned operation, unless `cancel` fired meanwhile.
    pub async fn submit(&self, cancel: &CancelToken) -> Result<String, WithdrawError> {
        if self.state.borrow().in_flight() {
            return Err(WithdrawError::InFlight);
        }

        let draft = self.withdraw.draft();
        if let Err(e) = self.check_locally(&draft) {
            log::debug!("Withdrawal blocked client-side: {}", e);
            self.set_state(SubmissionState::Idle);
            return Err(e);
        }

        self.set_state(SubmissionState::Validating);
        let outcome = self.submit_remote(&draft, cancel).await;
        match &outcome {
            Ok(operation_id) => self.set_state(SubmissionState::Succeeded(operation_id.clone())),
            Err(WithdrawError::Cancelled) => self.set_state(SubmissionState::Idle),
            Err(e) => {
                log::warn!("Withdrawal of {} failed: {}", self.asset_id, e);
                self.set_state(SubmissionState::Failed(e.clone()));
            }
        }
        outcome
    }

    fn check_locally(&self, draft: &WithdrawCryptoModel) -> Result<(), WithdrawError> {
        if !self.profile.is_2fa_enabled() {
            return Err(WithdrawError::TwoFactorRequired);
        }

        let info = self.withdraw.info();
        let info = info
            .ready()
            .ok_or(WithdrawError::DataUnavailable("Withdrawal details"))?;
        let errors = validate_draft(draft, info);
        if !errors.is_empty() {
            return Err(WithdrawError::Invalid(errors));
        }

        let accuracy = self
            .accuracy()
            .ok_or(WithdrawError::DataUnavailable("Asset"))?;
        let quote = self
            .withdraw
            .fee()
            .ready()
            .copied()
            .ok_or(WithdrawError::DataUnavailable("Withdrawal fee"))?;
        let balance = self
            .balance()
            .ok_or(WithdrawError::DataUnavailable("Balance"))?;
        let breakdown = compute_fee(&quote, draft.amount, accuracy);
        if breakdown.exceeds(balance) {
            return Err(WithdrawError::InsufficientBalance);
        }
        Ok(())
    }

    async fn submit_remote(
        &self,
        draft: &WithdrawCryptoModel,
        cancel: &CancelToken,
    ) -> Result<String, WithdrawError> {
        let is_valid = self
            .withdraw
            .validate_withdraw_crypto_request(&self.asset_id, draft)
            .await
            .map_err(WithdrawError::Validation)?;
        if !is_valid {
            return Err(WithdrawError::InvalidAddress);
        }
        if cancel.is_cancelled() {
            log::info!("Withdrawal page closed before submission, not sending");
            return Err(WithdrawError::Cancelled);
        }

        self.set_state(SubmissionState::Submitting);
        let operation_id = self
            .withdraw
            .send_withdraw_crypto_request(&self.asset_id, draft)
            .await
            .map_err(WithdrawError::Submission)?;

        self.withdraw.discard_draft();
        if cancel.is_cancelled() {
            log::info!("Withdrawal page closed, operation {} not opened", operation_id);
        } else {
            self.navigator.replace(AppRoute::ConfirmOperation {
                operation_id: operation_id.clone(),
            });
        }
        Ok(operation_id)
    }
}

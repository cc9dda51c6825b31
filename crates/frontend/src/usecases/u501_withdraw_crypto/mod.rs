//! Crypto withdrawal use case
//!
//! - fee.rs: fee and total arithmetic
//! - validation.rs: client-side field rules
//! - submission.rs: validate → submit workflow
//! - view_model.rs / view.rs: the withdrawal page
//! - confirm.rs: page shown after a successful submission

pub mod amount_input;
pub mod confirm;
pub mod fee;
pub mod submission;
pub mod validation;
mod view;
mod view_model;

pub use confirm::ConfirmOperationPage;
pub use submission::{CancelToken, SubmissionState, WithdrawError, WithdrawFlow};
pub use view::WithdrawCryptoPage;
pub use view_model::WithdrawCryptoViewModel;

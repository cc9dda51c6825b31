use contracts::domain::a004_withdraw::{WithdrawCryptoInfo, WithdrawCryptoModel};
use std::collections::BTreeMap;

pub const INSUFFICIENT_BALANCE: &str = "Requested amount is more than balance";
pub const INVALID_ADDRESS: &str = "Address is not valid";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WithdrawField {
    Amount,
    BaseAddress,
    AddressExtension,
}

/// Inline messages keyed by form field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors(BTreeMap<WithdrawField, String>);

impl FieldErrors {
    pub fn single(field: WithdrawField, message: impl Into<String>) -> Self {
        let mut errors = Self::default();
        errors.insert(field, message);
        errors
    }

    pub fn insert(&mut self, field: WithdrawField, message: impl Into<String>) {
        self.0.insert(field, message.into());
    }

    pub fn get(&self, field: WithdrawField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (WithdrawField, &str)> {
        self.0.iter().map(|(field, message)| (*field, message.as_str()))
    }
}

fn required_message(field_name: &str) -> String {
    format!("Field {} should not be empty", field_name)
}

/// Client-side rules: positive amount, base address present, extension
/// present when the asset marks it mandatory.
pub fn validate_draft(draft: &WithdrawCryptoModel, info: &WithdrawCryptoInfo) -> FieldErrors {
    let mut errors = FieldErrors::default();

    // also rejects NaN
    if !(draft.amount > 0.0) {
        errors.insert(WithdrawField::Amount, required_message("Amount"));
    }
    if draft.base_address.trim().is_empty() {
        errors.insert(
            WithdrawField::BaseAddress,
            required_message(&info.base_address_title),
        );
    }
    if info.address_extension_mandatory && draft.address_extension.trim().is_empty() {
        errors.insert(
            WithdrawField::AddressExtension,
            required_message(&info.address_extension_title),
        );
    }

    errors
}

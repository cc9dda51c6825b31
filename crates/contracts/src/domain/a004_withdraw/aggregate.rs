use serde::{Deserialize, Serialize};

// ============================================================================
// Fee quote
// ============================================================================

/// Fee quote for withdrawing one asset
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawFee {
    #[serde(default)]
    pub absolute_fee: f64,
    /// Rate applied to the requested amount when no absolute fee is set
    #[serde(default)]
    pub relative_fee: f64,
}

impl WithdrawFee {
    /// Unrounded fee for `amount`.
    ///
    /// A non-zero absolute fee wins; otherwise the relative fee is applied
    /// as a rate to the amount.
    pub fn fee_for(&self, amount: f64) -> f64 {
        if self.absolute_fee != 0.0 {
            self.absolute_fee
        } else {
            self.relative_fee * amount
        }
    }
}

// ============================================================================
// Per-asset withdrawal metadata
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawCryptoInfo {
    pub base_address_title: String,
    #[serde(default)]
    pub address_extension_mandatory: bool,
    #[serde(default)]
    pub address_extension_title: String,
}

impl Default for WithdrawCryptoInfo {
    fn default() -> Self {
        Self {
            base_address_title: "Address".to_string(),
            address_extension_mandatory: false,
            address_extension_title: "Address extension".to_string(),
        }
    }
}

// ============================================================================
// Draft and wire bodies
// ============================================================================

/// In-progress withdrawal request edited by the form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawCryptoModel {
    pub amount: f64,
    pub base_address: String,
    pub address_extension: String,
    pub balance: f64,
}

/// Body of the validate and submit calls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawCryptoRequest {
    pub amount: f64,
    pub base_address: String,
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub address_extension: String,
}

impl From<&WithdrawCryptoModel> for WithdrawCryptoRequest {
    fn from(draft: &WithdrawCryptoModel) -> Self {
        Self {
            amount: draft.amount,
            base_address: draft.base_address.trim().to_string(),
            address_extension: draft.address_extension.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
}

/// Identifier of a submitted withdrawal awaiting confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawOperation {
    pub operation_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_fee_wins() {
        let fee = WithdrawFee {
            absolute_fee: 0.0001,
            relative_fee: 0.5,
        };
        assert_eq!(fee.fee_for(100.0), 0.0001);
    }

    #[test]
    fn test_relative_fee_is_a_rate() {
        let fee = WithdrawFee {
            absolute_fee: 0.0,
            relative_fee: 0.01,
        };
        assert_eq!(fee.fee_for(200.0), 2.0);
        assert_eq!(WithdrawFee::default().fee_for(200.0), 0.0);
    }

    #[test]
    fn test_request_omits_empty_extension() {
        let draft = WithdrawCryptoModel {
            amount: 1.5,
            base_address: "  addr  ".to_string(),
            address_extension: String::new(),
            balance: 10.0,
        };
        let json = serde_json::to_value(WithdrawCryptoRequest::from(&draft)).unwrap();
        assert_eq!(json, serde_json::json!({"amount": 1.5, "baseAddress": "addr"}));
    }
}

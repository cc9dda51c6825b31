pub mod aggregate;

pub use aggregate::{
    ValidationResult, WithdrawCryptoInfo, WithdrawCryptoModel, WithdrawCryptoRequest, WithdrawFee,
    WithdrawOperation,
};

pub mod aggregate;

pub use aggregate::{Balance, Wallet, WalletType};

pub mod aggregate;

pub use aggregate::{Asset, AssetCategory, AssetDescription, PaymentMethod};

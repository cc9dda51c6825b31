pub mod a001_asset;
pub mod a002_wallet;
pub mod a003_profile;
pub mod a004_withdraw;

pub mod api;
pub mod store;
pub mod ui;

pub use api::WalletApi;
pub use store::WalletStore;

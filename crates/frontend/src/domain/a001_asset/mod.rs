pub mod api;
pub mod store;
pub mod ui;

pub use api::AssetApi;
pub use store::AssetStore;

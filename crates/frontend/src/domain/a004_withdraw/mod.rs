pub mod api;
pub mod store;

pub use api::WithdrawApi;
pub use store::WithdrawStore;

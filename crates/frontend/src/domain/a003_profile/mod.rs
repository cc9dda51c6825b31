pub mod api;
pub mod store;
pub mod ui;

pub use api::ProfileApi;
pub use store::ProfileStore;

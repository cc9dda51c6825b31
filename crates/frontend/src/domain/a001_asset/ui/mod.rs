pub mod list;

pub use list::AssetList;

pub mod list;

pub use list::WalletList;

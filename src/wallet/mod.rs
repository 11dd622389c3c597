pub mod store;

pub use store::{AssetBalance, WalletStore};

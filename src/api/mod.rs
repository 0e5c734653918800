pub mod coinmarketcap;
pub use coinmarketcap::*;

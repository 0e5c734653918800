pub mod coin;
pub use coin::*;

pub mod position;
pub use position::*;

pub mod transaction;
pub use transaction::*;

pub mod quote;
pub use quote::*;

pub mod valuation;
pub use valuation::*;

pub mod managers;
pub use managers::*;

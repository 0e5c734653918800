pub mod valuation;
pub use valuation::*;

pub mod allocation;
pub use allocation::*;

pub mod api;
pub use api::*;

pub mod ledger;
pub use ledger::*;

pub mod validation;
pub use validation::*;

pub mod valuation;
pub use valuation::*;

pub mod import;
pub use import::*;

pub mod io_error;
pub use io_error::*;

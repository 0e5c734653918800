use std::fmt;

/* Failures of mutations requested on the position ledger. Validation catches malformed
fields before the ledger is reached, so InvalidArgument only fires on the identity
checks the ledger re-asserts at open time. */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    InvalidArgument(String),
    UnknownSymbol(String),
    DuplicateSymbol(String),
}

impl fmt::Display for LedgerError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LedgerError::InvalidArgument(reason) => write!(f, "{}", *reason),
            LedgerError::UnknownSymbol(symbol) => {
                write!(f, "No open position for symbol {symbol}")
            }
            LedgerError::DuplicateSymbol(symbol) => {
                write!(f, "A position for symbol {symbol} is already open")
            }
        }
    }
}

use std::fmt;

/* First failure found when validating a raw transaction form. The field name is kept
so the presentation layer can point at the offending entry. */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NotPositiveInteger(&'static str),
    NotPositiveNumber(&'static str),
    InvalidSymbol,
    InvalidName,
    InvalidTransactionKind,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::NotPositiveInteger(field) => {
                write!(f, "{field} must be a positive integer")
            }
            ValidationError::NotPositiveNumber(field) => {
                write!(f, "{field} must be a positive number")
            }
            ValidationError::InvalidSymbol => {
                write!(f, "Ticker symbol must be alphabetic and at most 5 characters")
            }
            ValidationError::InvalidName => write!(f, "Coin name must be alphabetic"),
            ValidationError::InvalidTransactionKind => {
                write!(f, "Transaction kind must be Buy or Sell")
            }
        }
    }
}

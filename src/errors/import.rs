use std::fmt;

use super::ValidationError;

/* Failures while importing a CSV of transactions. The import stops at the first bad
row and reports its line number, so nothing is half-applied. */
#[derive(Debug, Clone)]
pub enum ImportError {
    Io(String),
    Malformed(String),
    InvalidRow {
        line: u64,
        error: ValidationError,
    },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ImportError::Io(e) => write!(f, "{}", *e),
            ImportError::Malformed(e) => write!(f, "Malformed CSV: {e}"),
            ImportError::InvalidRow { line, error } => {
                write!(f, "Invalid transaction at line {line}: {error}")
            }
        }
    }
}

use std::fmt;

/* Per-row valuation failure. A zero cost basis makes the percentage change undefined;
the engine reports it on the row instead of dividing by zero. */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValuationError {
    UndefinedPercentage,
}

impl fmt::Display for ValuationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValuationError::UndefinedPercentage => {
                write!(f, "Percentage change is undefined for a zero cost basis")
            }
        }
    }
}

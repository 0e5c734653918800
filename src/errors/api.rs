use std::fmt;

/* Failures of the market data provider. None of them is fatal: a failed fetch simply
yields no quotes for the pass and the caller values whatever it can. */
#[derive(Debug, Clone)]
pub enum ApiError {
    MissingApiKey,
    ApiCallError(String),
    UnexpectedStatus(u16),
    DeserializationError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ApiError::MissingApiKey => {
                write!(f, "CMC_KEY is not set, cannot fetch market data")
            }
            ApiError::ApiCallError(error) => write!(f, "{}", *error),
            ApiError::UnexpectedStatus(status) => {
                write!(f, "Market data request failed with status {status}")
            }
            ApiError::DeserializationError(e) => {
                write!(f, "Error during serde deserialisation: {e} ")
            }
        }
    }
}

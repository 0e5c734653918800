use serde::{Deserialize, Serialize};

/* Identity record of a tracked cryptocurrency. Created once, on the first buy of a
symbol that is not yet held, and deleted when the position is fully liquidated.

The ticker symbol is the business key used for every lookup: the uniqueness of tickers
is already enforced at open time, so joins with quote data go through the symbol.
crypto_id is kept as a separate identifier for display and audit only.
*/
#[derive(Hash, Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Coin {
    pub crypto_id: i64,
    pub symbol: String, // alphabetic ticker, upper case, unique
    pub name: String,   // alphabetic display name
}

impl Coin {
    /* Symbols and names are valid when non-empty and purely alphabetic */
    pub fn is_alphabetic(value: &str) -> bool {
        return !value.is_empty() && value.chars().all(|c| c.is_alphabetic());
    }
}

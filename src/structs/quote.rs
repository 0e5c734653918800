use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/* A current market price for one symbol, in the display currency. Quotes are refreshed
on every valuation pass and never persisted. */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    pub name: String, // display name as the provider reports it
    pub unit_price: Decimal,
    pub last_updated: DateTime<Utc>,
}

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/* A validated user-submitted transaction. It is ephemeral: the ledger consumes it to
mutate the stored position and nothing keeps it afterwards.

crypto_id and name are carried along with the traded fields so that a Buy of a symbol
that is not yet held can create the Coin in the same pass, without asking the user for
the identity a second time.
*/
#[derive(Hash, Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRequest {
    pub crypto_id: i64,
    pub transaction_id: i64,
    pub symbol: String, // upper case ticker
    pub name: String,
    pub quantity: Decimal,
    pub unit_price: Decimal,
    pub total_cost: Decimal,
    pub kind: TransactionKind,
}

#[derive(Hash, Eq, PartialEq, Debug, Clone, Copy, Serialize, Deserialize)]
pub enum TransactionKind {
    Buy,
    Sell,
}

/* Outcome of a sell applied to an existing position. InsufficientHoldings is a
rejected-but-expected outcome, not an error: the position is left untouched. */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SellOutcome {
    Updated,
    Liquidated,
    InsufficientHoldings,
}

/* Outcome of routing a whole TransactionRequest through the ledger */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerUpdate {
    Opened,
    Bought,
    Sold(SellOutcome),
}

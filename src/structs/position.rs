use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Coin;

/* Aggregated holding for one coin. There is exactly one Position per Coin, keyed by
the coin symbol. A position with quantity zero does not exist: the ledger deletes the
Coin + Position pair at the liquidation boundary.

cumulative_cost is the total amount paid (in the display currency) for the quantity
currently held. Buys add the entered cost; sells subtract the entered sale cost, not a
recomputed proportion of the basis. transaction_id and unit_price record the opening
transaction and are never touched by later buys.
*/
#[derive(Hash, Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Position {
    pub transaction_id: i64,
    pub quantity: Decimal,        // non-negative, zero means deleted
    pub unit_price: Decimal,      // unit price of the opening buy
    pub cumulative_cost: Decimal, // total paid for the held quantity
}

/* The 1:1 Coin + Position pair as the ledger stores and lists it */
#[derive(Hash, Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct Holding {
    pub coin: Coin,
    pub position: Position,
}

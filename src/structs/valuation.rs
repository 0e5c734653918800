use rust_decimal::Decimal;

use crate::errors::ValuationError;

/* One row of the valued portfolio: a held position joined with its current quote.
Derived on every valuation pass, never persisted.

percentage_change carries its own error case: a position whose cumulative cost is zero
has no defined percentage, and the engine reports that per row instead of producing a
NaN or faulting on the division.
*/
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationRow {
    pub crypto_id: i64,
    pub symbol: String,
    pub name: String, // display name from the quote
    pub quantity: Decimal,
    pub cumulative_cost: Decimal,
    pub unit_price: Decimal,
    pub current_value: Decimal,
    pub profit_and_loss: Decimal,
    pub percentage_change: Result<Decimal, ValuationError>,
}

/* Portfolio-wide sums over the rows of one valuation pass */
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioTotals {
    pub current_value: Decimal,
    pub profit_and_loss: Decimal,
}

/* Fraction of the total portfolio value held in one symbol, for the allocation chart */
#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub symbol: String,
    pub weight: Decimal, // in [0, 1], weights of one pass sum to 1
}

/* Display currency and rounding of the valuation pass. Rounding is applied to the
computed outputs only, half away from zero; stored quantities and costs are never
rounded. */
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationConfig {
    pub currency: String,
    pub decimal_places: u32,
}

impl Default for ValuationConfig {
    fn default() -> Self {
        Self {
            currency: "GBP".to_string(),
            decimal_places: 2,
        }
    }
}

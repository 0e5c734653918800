use rust_decimal::Decimal;

use crate::structs::{Allocation, ValuationRow};

/* Derive the allocation weights for the pie chart: each row weighs its share of the
total current value. The weights keep the row order and sum to 1.

An empty or worthless portfolio has no allocation: when the total is zero the result
is empty rather than a division by zero.
*/
pub fn summarize(rows: &[ValuationRow]) -> Vec<Allocation> {
    let total: Decimal = rows.iter().map(|row| row.current_value).sum();
    if total.is_zero() {
        return Vec::new();
    }

    return rows
        .iter()
        .map(|row| Allocation {
            symbol: row.symbol.clone(),
            weight: row.current_value / total,
        })
        .collect();
}

use hashbrown::HashMap;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::errors::ValuationError;
use crate::structs::{Holding, PortfolioTotals, Quote, ValuationConfig, ValuationRow};

/* Join the held positions with the quotes of one fetch and compute the value of the
portfolio:

    current_value     = unit_price * quantity
    profit_and_loss   = current_value - cumulative_cost
    percentage_change = profit_and_loss / cumulative_cost * 100

A holding whose symbol has no quote in this pass is skipped entirely, rows and totals
both: the portfolio is valued with whatever quotes are available. A zero cumulative
cost makes the percentage undefined and is reported on the row, never divided.

The function is pure: same holdings, quotes and config give the same rows and totals.
Rounding is applied to the computed outputs only, per the config.
*/
pub fn value_portfolio(
    holdings: &[&Holding],
    quotes: &[Quote],
    config: &ValuationConfig,
) -> (Vec<ValuationRow>, PortfolioTotals) {
    let by_symbol: HashMap<&str, &Quote> = quotes
        .iter()
        .map(|quote| (quote.symbol.as_str(), quote))
        .collect();

    let mut rows: Vec<ValuationRow> = Vec::new();
    let mut totals = PortfolioTotals {
        current_value: Decimal::ZERO,
        profit_and_loss: Decimal::ZERO,
    };

    for holding in holdings {
        let quote = match by_symbol.get(holding.coin.symbol.as_str()) {
            Some(quote) => quote,
            None => continue, // no quote this pass
        };

        let cost = holding.position.cumulative_cost;
        let current_value = round(quote.unit_price * holding.position.quantity, config);
        let profit_and_loss = round(current_value - cost, config);
        let percentage_change = if cost.is_zero() {
            Err(ValuationError::UndefinedPercentage)
        } else {
            Ok(round(profit_and_loss / cost * dec!(100), config))
        };

        totals.current_value += current_value;
        totals.profit_and_loss += profit_and_loss;

        rows.push(ValuationRow {
            crypto_id: holding.coin.crypto_id,
            symbol: holding.coin.symbol.clone(),
            name: quote.name.clone(),
            quantity: holding.position.quantity,
            cumulative_cost: cost,
            unit_price: quote.unit_price,
            current_value,
            profit_and_loss,
            percentage_change,
        });
    }

    return (rows, totals);
}

fn round(value: Decimal, config: &ValuationConfig) -> Decimal {
    value.round_dp_with_strategy(config.decimal_places, RoundingStrategy::MidpointAwayFromZero)
}

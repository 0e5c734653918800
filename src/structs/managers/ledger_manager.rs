use hashbrown::HashMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::LedgerError;
use crate::structs::{
    Coin, Holding, LedgerUpdate, Position, SellOutcome, TransactionKind, TransactionRequest,
};

use super::Persistable;

/* The ledger manager owns the Coin + Position pairs, keyed by ticker symbol, and is
the only place that mutates them. It loads previous holdings from disk if they exist
and implements the Drop trait to save them back.

The ledger is not thread safe: a multi-threaded caller has to serialize mutations and
valuation passes around it.
*/
#[derive(Serialize, Deserialize)]
pub struct LedgerManager {
    holdings: HashMap<String, Holding>,
    path: String,
    persist: bool,
}

impl Persistable for LedgerManager {
    const PATH: &'static str = ".data/ledger";

    fn default_new(path: String, persist: bool) -> Self {
        Self {
            holdings: HashMap::new(),
            path,
            persist,
        }
    }

    fn get_path(&self) -> &str {
        return &self.path;
    }

    fn is_persistent(&self) -> bool {
        return self.persist;
    }
}

impl Drop for LedgerManager {
    fn drop(&mut self) {
        if self.persist {
            let _save = self.save();
        }
    }
}

impl LedgerManager {
    pub fn has_position(&self, symbol: &str) -> bool {
        return self.holdings.contains_key(symbol);
    }

    /* Create the Coin and its Position on the first buy of a symbol. The identity
    checks are re-asserted here even though the validator already ran: the ledger is
    the last gate before the pair is stored. */
    pub fn open_position(
        &mut self,
        crypto_id: i64,
        symbol: &str,
        name: &str,
        transaction_id: i64,
        quantity: Decimal,
        unit_price: Decimal,
        total_cost: Decimal,
    ) -> Result<(), LedgerError> {
        if crypto_id <= 0 {
            return Err(LedgerError::InvalidArgument(
                "Crypto ID must be a positive integer".to_string(),
            ));
        }
        if !Coin::is_alphabetic(symbol) {
            return Err(LedgerError::InvalidArgument(
                "Ticker symbol must be alphabetic".to_string(),
            ));
        }
        if !Coin::is_alphabetic(name) {
            return Err(LedgerError::InvalidArgument(
                "Coin name must be alphabetic".to_string(),
            ));
        }
        if self.has_position(symbol) {
            return Err(LedgerError::DuplicateSymbol(symbol.to_string()));
        }

        self.holdings.insert(
            symbol.to_string(),
            Holding {
                coin: Coin {
                    crypto_id,
                    symbol: symbol.to_string(),
                    name: name.to_string(),
                },
                position: Position {
                    transaction_id,
                    quantity,
                    unit_price,
                    cumulative_cost: total_cost,
                },
            },
        );
        Ok(())
    }

    /* Fold a buy into an existing position: quantity and cost both grow by the entered
    amounts. Buys on a symbol that is not held must go through open_position. */
    pub fn apply_buy(
        &mut self,
        symbol: &str,
        quantity: Decimal,
        cost: Decimal,
    ) -> Result<(), LedgerError> {
        let holding = self
            .holdings
            .get_mut(symbol)
            .ok_or_else(|| LedgerError::UnknownSymbol(symbol.to_string()))?;
        holding.position.quantity += quantity;
        holding.position.cumulative_cost += cost;
        Ok(())
    }

    /* Apply a sell to an existing position. Selling more than held changes nothing and
    reports InsufficientHoldings. Selling exactly the held quantity is the liquidation
    boundary: the remaining quantity is compared to zero exactly, and the Coin +
    Position pair is deleted.

    The entered sale cost is subtracted from the cumulative cost as-is, not a
    proportional share of the recorded basis. */
    pub fn apply_sell(
        &mut self,
        symbol: &str,
        quantity: Decimal,
        cost: Decimal,
    ) -> Result<SellOutcome, LedgerError> {
        let holding = self
            .holdings
            .get_mut(symbol)
            .ok_or_else(|| LedgerError::UnknownSymbol(symbol.to_string()))?;

        if quantity > holding.position.quantity {
            return Ok(SellOutcome::InsufficientHoldings);
        }

        holding.position.quantity -= quantity;
        holding.position.cumulative_cost -= cost;

        if holding.position.quantity.is_zero() {
            self.holdings.remove(symbol);
            return Ok(SellOutcome::Liquidated);
        }
        return Ok(SellOutcome::Updated);
    }

    /* All holdings, ascending by crypto_id, the order the portfolio table renders */
    pub fn list_positions(&self) -> Vec<&Holding> {
        let mut all: Vec<&Holding> = self.holdings.values().collect();
        all.sort_by_key(|holding| holding.coin.crypto_id);
        return all;
    }

    /* Route a validated transaction: a Buy opens the position when the symbol is new
    and folds in otherwise, a Sell goes to apply_sell. This is the single entry point
    the CLI and the CSV import share. */
    pub fn record(&mut self, request: &TransactionRequest) -> Result<LedgerUpdate, LedgerError> {
        match request.kind {
            TransactionKind::Buy => {
                if self.has_position(&request.symbol) {
                    self.apply_buy(&request.symbol, request.quantity, request.total_cost)?;
                    Ok(LedgerUpdate::Bought)
                } else {
                    self.open_position(
                        request.crypto_id,
                        &request.symbol,
                        &request.name,
                        request.transaction_id,
                        request.quantity,
                        request.unit_price,
                        request.total_cost,
                    )?;
                    Ok(LedgerUpdate::Opened)
                }
            }
            TransactionKind::Sell => {
                let outcome =
                    self.apply_sell(&request.symbol, request.quantity, request.total_cost)?;
                Ok(LedgerUpdate::Sold(outcome))
            }
        }
    }
}

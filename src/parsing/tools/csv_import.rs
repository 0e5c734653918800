use csv::ReaderBuilder;
use serde::Deserialize;

use crate::errors::ImportError;
use crate::parsing::{validate_transaction, RawTransactionForm};
use crate::structs::TransactionRequest;
use crate::utils::read_file;

/* Import a batch of transactions from a CSV export. Expected header:

    crypto_id,transaction_id,symbol,name,quantity,price,cost,kind

Every row goes through the same validator as a hand-entered form. The import stops at
the first invalid row and reports its line number, so the caller applies either the
whole file or nothing.
*/
#[derive(Debug, Deserialize)]
struct CsvRow {
    crypto_id: String,
    transaction_id: String,
    symbol: String,
    name: String,
    quantity: String,
    price: String,
    cost: String,
    kind: String,
}

pub fn import_transactions(path: &str) -> Result<Vec<TransactionRequest>, ImportError> {
    let contents = read_file(path).map_err(|e| ImportError::Io(e.to_string()))?;
    let mut reader = ReaderBuilder::new().from_reader(contents.as_bytes());

    let mut requests: Vec<TransactionRequest> = Vec::new();
    for (index, result) in reader.deserialize::<CsvRow>().enumerate() {
        let line = index as u64 + 2; // line 1 is the header
        let record = result.map_err(|e| ImportError::Malformed(e.to_string()))?;
        let raw = RawTransactionForm {
            crypto_id: record.crypto_id,
            transaction_id: record.transaction_id,
            symbol: record.symbol,
            name: record.name,
            quantity: record.quantity,
            unit_price: record.price,
            total_cost: record.cost,
            kind: record.kind,
        };
        let request =
            validate_transaction(&raw).map_err(|error| ImportError::InvalidRow { line, error })?;
        requests.push(request);
    }
    return Ok(requests);
}

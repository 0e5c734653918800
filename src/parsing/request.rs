use std::str::FromStr;

use rust_decimal::Decimal;

use crate::errors::ValidationError;
use crate::structs::{Coin, TransactionKind, TransactionRequest};

/* Raw transaction fields exactly as submitted, every one a string. The presentation
layer hands them over untouched and the validator decides in one pass. */
#[derive(Debug, Clone, Default)]
pub struct RawTransactionForm {
    pub crypto_id: String,
    pub transaction_id: String,
    pub symbol: String,
    pub name: String,
    pub quantity: String,
    pub unit_price: String,
    pub total_cost: String,
    pub kind: String,
}

/* Validate a raw form into a TransactionRequest, or report the first failing field.
Pure and deterministic: no partial result ever escapes, so a rejected form cannot leave
a half-applied mutation behind it.

Normalization: every field is trimmed and the symbol is upper-cased, since quote
providers key their listings by upper-case ticker.
*/
pub fn validate_transaction(
    raw: &RawTransactionForm,
) -> Result<TransactionRequest, ValidationError> {
    let crypto_id = positive_integer(&raw.crypto_id, "Crypto ID")?;
    let transaction_id = positive_integer(&raw.transaction_id, "Transaction ID")?;

    let quantity = positive_number(&raw.quantity, "Quantity")?;
    let unit_price = positive_number(&raw.unit_price, "Price")?;
    let total_cost = positive_number(&raw.total_cost, "Total cost")?;

    let symbol = raw.symbol.trim();
    if !Coin::is_alphabetic(symbol) || symbol.chars().count() > 5 {
        return Err(ValidationError::InvalidSymbol);
    }

    let name = raw.name.trim();
    if !Coin::is_alphabetic(name) {
        return Err(ValidationError::InvalidName);
    }

    let kind = match raw.kind.trim().to_lowercase().as_str() {
        "buy" => TransactionKind::Buy,
        "sell" => TransactionKind::Sell,
        _ => return Err(ValidationError::InvalidTransactionKind),
    };

    return Ok(TransactionRequest {
        crypto_id,
        transaction_id,
        symbol: symbol.to_uppercase(),
        name: name.to_string(),
        quantity,
        unit_price,
        total_cost,
        kind,
    });
}

fn positive_integer(value: &str, field: &'static str) -> Result<i64, ValidationError> {
    match value.trim().parse::<i64>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(ValidationError::NotPositiveInteger(field)),
    }
}

fn positive_number(value: &str, field: &'static str) -> Result<Decimal, ValidationError> {
    match Decimal::from_str(value.trim()) {
        Ok(parsed) if parsed > Decimal::ZERO => Ok(parsed),
        _ => Err(ValidationError::NotPositiveNumber(field)),
    }
}

#[cfg(test)]
mod tests {

    use rust_decimal_macros::dec;

    use super::*;

    fn valid_form() -> RawTransactionForm {
        RawTransactionForm {
            crypto_id: "1".to_string(),
            transaction_id: "42".to_string(),
            symbol: "btc".to_string(),
            name: "Bitcoin".to_string(),
            quantity: "0.5".to_string(),
            unit_price: "20000".to_string(),
            total_cost: "10000".to_string(),
            kind: "Buy".to_string(),
        }
    }

    #[test]
    fn test_valid_form_is_normalized() {
        let request = validate_transaction(&valid_form()).unwrap();

        assert_eq!(request.crypto_id, 1);
        assert_eq!(request.transaction_id, 42);
        assert_eq!(request.symbol, "BTC"); // upper-cased
        assert_eq!(request.name, "Bitcoin");
        assert_eq!(request.quantity, dec!(0.5));
        assert_eq!(request.unit_price, dec!(20000));
        assert_eq!(request.total_cost, dec!(10000));
        assert_eq!(request.kind, TransactionKind::Buy);
    }

    #[test]
    fn test_identifiers_must_be_positive_integers() {
        for bad in ["0", "-3", "2.5", "abc", ""] {
            let mut form = valid_form();
            form.crypto_id = bad.to_string();
            assert_eq!(
                validate_transaction(&form),
                Err(ValidationError::NotPositiveInteger("Crypto ID"))
            );

            let mut form = valid_form();
            form.transaction_id = bad.to_string();
            assert_eq!(
                validate_transaction(&form),
                Err(ValidationError::NotPositiveInteger("Transaction ID"))
            );
        }
    }

    #[test]
    fn test_amounts_must_be_positive_numbers() {
        for bad in ["0", "-1", "ten", ""] {
            let mut form = valid_form();
            form.quantity = bad.to_string();
            assert_eq!(
                validate_transaction(&form),
                Err(ValidationError::NotPositiveNumber("Quantity"))
            );

            let mut form = valid_form();
            form.unit_price = bad.to_string();
            assert_eq!(
                validate_transaction(&form),
                Err(ValidationError::NotPositiveNumber("Price"))
            );

            let mut form = valid_form();
            form.total_cost = bad.to_string();
            assert_eq!(
                validate_transaction(&form),
                Err(ValidationError::NotPositiveNumber("Total cost"))
            );
        }
    }

    #[test]
    fn test_symbol_rules() {
        for bad in ["BT C1", "BTC42", "TOOLONG", ""] {
            let mut form = valid_form();
            form.symbol = bad.to_string();
            assert_eq!(
                validate_transaction(&form),
                Err(ValidationError::InvalidSymbol)
            );
        }
    }

    #[test]
    fn test_name_must_be_alphabetic() {
        for bad in ["Bitcoin 2", "B1tcoin", ""] {
            let mut form = valid_form();
            form.name = bad.to_string();
            assert_eq!(validate_transaction(&form), Err(ValidationError::InvalidName));
        }
    }

    #[test]
    fn test_kind_is_buy_or_sell() {
        for ok in ["buy", "BUY", "Sell", " sell "] {
            let mut form = valid_form();
            form.kind = ok.to_string();
            assert!(validate_transaction(&form).is_ok());
        }

        let mut form = valid_form();
        form.kind = "hodl".to_string();
        assert_eq!(
            validate_transaction(&form),
            Err(ValidationError::InvalidTransactionKind)
        );
    }

    #[test]
    fn test_first_failure_wins() {
        let mut form = valid_form();
        form.crypto_id = "zero".to_string();
        form.symbol = "BT C1".to_string();

        // Both fields are bad, the identifier is reported first
        assert_eq!(
            validate_transaction(&form),
            Err(ValidationError::NotPositiveInteger("Crypto ID"))
        );
    }
}

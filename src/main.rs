use std::env;

use dotenv::dotenv;
use rust_decimal_macros::dec;
use tracing_subscriber::EnvFilter;

pub mod api;
pub mod errors;
pub mod functions;
pub mod parsing;
pub mod structs;
pub mod utils;


use api::fetch_quotes;
use functions::{summarize, value_portfolio};
use parsing::import_transactions;
use structs::{LedgerManager, Persistable, ValuationConfig};

fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut ledger = LedgerManager::new(env::var("FOLIO_DATA").ok()).unwrap();

    if let Ok(import_path) = env::var("FOLIO_IMPORT") {
        match import_transactions(&import_path) {
            Ok(requests) => {
                let mut applied = 0;
                for request in &requests {
                    match ledger.record(request) {
                        Ok(_) => applied += 1,
                        Err(e) => {
                            tracing::warn!("Skipped transaction {}: {e}", request.transaction_id)
                        }
                    }
                }
                tracing::info!(
                    "Imported {applied}/{} transactions from {import_path}",
                    requests.len()
                );
            }
            Err(e) => tracing::error!("Import failed: {e}"),
        }
    }

    let config = ValuationConfig {
        currency: env::var("DISPLAY_CURRENCY").unwrap_or_else(|_| "GBP".to_string()),
        ..ValuationConfig::default()
    };

    let holdings = ledger.list_positions();
    tracing::info!("{} open positions loaded", holdings.len());

    let quotes = match fetch_quotes(&config.currency) {
        Ok(quotes) => {
            tracing::info!("{} quotes fetched in {}", quotes.len(), config.currency);
            quotes
        }
        Err(e) => {
            // A failed fetch is not fatal, the portfolio is just valued without quotes
            tracing::error!("Market data fetch failed: {e}");
            Vec::new()
        }
    };

    let (rows, totals) = value_portfolio(&holdings, &quotes, &config);

    println!("Folio - The Cryptocurrency Portfolio App\n");
    println!(
        "{:<8} {:<14} {:<14} {:<7} {:>12} {:>14} {:>12} {:>12}",
        "Coin ID", "Number owned", "Coin Name", "Ticker", "Cost", "Current Value", "Profit/Loss", "% Gain/Loss"
    );
    for row in &rows {
        let percentage = match &row.percentage_change {
            Ok(value) => value.to_string(),
            Err(_) => "n/a".to_string(),
        };
        println!(
            "{:<8} {:<14} {:<14} {:<7} {:>12} {:>14} {:>12} {:>12}",
            row.crypto_id,
            row.quantity.to_string(),
            row.name,
            row.symbol,
            row.cumulative_cost.to_string(),
            row.current_value.to_string(),
            row.profit_and_loss.to_string(),
            percentage
        );
    }
    println!("\nTotal value ({}): {}", config.currency, totals.current_value);
    println!(
        "Total profit/loss ({}): {}",
        config.currency, totals.profit_and_loss
    );

    let allocations = summarize(&rows);
    if !allocations.is_empty() {
        println!("\nAllocation:");
        for allocation in &allocations {
            println!(
                "  {:<7} {}%",
                allocation.symbol,
                (allocation.weight * dec!(100)).round_dp(2)
            );
        }
    }
}

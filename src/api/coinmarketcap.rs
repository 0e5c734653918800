use std::env;

use chrono::{DateTime, Utc};
use hashbrown::HashMap;
use reqwest::header::{HeaderMap, HeaderValue};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::errors::ApiError;
use crate::structs::Quote;

/* CoinMarketCap listings: one page of the top coins by market cap, every quote
converted to the requested currency. No pagination and no retry: one page per
valuation pass is the whole contract, and a failed fetch just means no quotes this
pass. */
const CMC_LISTINGS_ENDPOINT: &str =
    "https://pro-api.coinmarketcap.com/v1/cryptocurrency/listings/latest";
const LISTINGS_LIMIT: &str = "200";

#[derive(Debug, Deserialize)]
pub struct ListingsResponse {
    pub data: Vec<Listing>,
}

#[derive(Debug, Deserialize)]
pub struct Listing {
    pub id: i64,
    pub symbol: String,
    pub name: String,
    pub quote: HashMap<String, ListingQuote>, // keyed by currency code
}

#[derive(Debug, Deserialize)]
pub struct ListingQuote {
    pub price: Option<f64>, // null for dead listings
    pub last_updated: DateTime<Utc>,
}

pub async fn fetch_listings(api_key: &str, currency: &str) -> Result<Vec<Quote>, ApiError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        "X-CMC_PRO_API_KEY",
        HeaderValue::from_str(api_key).map_err(|e| ApiError::ApiCallError(e.to_string()))?,
    );

    let client = reqwest::Client::new();
    let response = client
        .get(CMC_LISTINGS_ENDPOINT)
        .headers(headers)
        .query(&[("start", "1"), ("limit", LISTINGS_LIMIT), ("convert", currency)])
        .send()
        .await
        .map_err(|e| ApiError::ApiCallError(e.to_string()))?;

    if !response.status().is_success() {
        return Err(ApiError::UnexpectedStatus(response.status().as_u16()));
    }

    let text = response
        .text()
        .await
        .map_err(|e| ApiError::ApiCallError(e.to_string()))?;
    let listings: ListingsResponse =
        serde_json::from_str(&text).map_err(|e| ApiError::DeserializationError(e.to_string()))?;

    return Ok(map_listings(listings, currency));
}

/* Map the raw listings to quotes. Listings without a quote in the requested currency,
or whose price does not convert to a Decimal, are dropped with a warning instead of
failing the whole page. */
fn map_listings(response: ListingsResponse, currency: &str) -> Vec<Quote> {
    let mut quotes: Vec<Quote> = Vec::new();
    for listing in response.data {
        let listing_quote = match listing.quote.get(currency) {
            Some(listing_quote) => listing_quote,
            None => {
                tracing::warn!("No {currency} quote for listing {}", listing.symbol);
                continue;
            }
        };

        match listing_quote.price.and_then(Decimal::from_f64) {
            Some(unit_price) => {
                let last_updated = listing_quote.last_updated;
                quotes.push(Quote {
                    symbol: listing.symbol,
                    name: listing.name,
                    unit_price,
                    last_updated,
                });
            }
            None => {
                tracing::warn!("Unusable price for listing {}", listing.symbol);
            }
        }
    }
    return quotes;
}

/* Blocking bridge for the synchronous caller: the API key comes from the CMC_KEY
environment variable (a .env file is loaded at startup). */
#[tokio::main]
pub async fn fetch_quotes(currency: &str) -> Result<Vec<Quote>, ApiError> {
    let api_key = env::var("CMC_KEY").map_err(|_| ApiError::MissingApiKey)?;
    return fetch_listings(&api_key, currency).await;
}

#[cfg(test)]
mod tests {

    use rust_decimal_macros::dec;

    use super::*;

    const SAMPLE: &str = r#"{
        "data": [
            {
                "id": 1,
                "symbol": "BTC",
                "name": "Bitcoin",
                "quote": {
                    "GBP": { "price": 48250.75, "last_updated": "2024-05-01T12:00:00.000Z" }
                }
            },
            {
                "id": 1027,
                "symbol": "ETH",
                "name": "Ethereum",
                "quote": {
                    "USD": { "price": 3000.0, "last_updated": "2024-05-01T12:00:00.000Z" }
                }
            },
            {
                "id": 9999,
                "symbol": "DEAD",
                "name": "Deadcoin",
                "quote": {
                    "GBP": { "price": null, "last_updated": "2024-05-01T12:00:00.000Z" }
                }
            }
        ]
    }"#;

    #[test]
    fn test_map_listings_keeps_priced_entries() {
        let response: ListingsResponse = serde_json::from_str(SAMPLE).unwrap();
        let quotes = map_listings(response, "GBP");

        // ETH only carries a USD quote here and DEAD has no usable price
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0].symbol, "BTC");
        assert_eq!(quotes[0].name, "Bitcoin");
        assert_eq!(quotes[0].unit_price, dec!(48250.75));
    }

    #[test]
    fn test_listings_deserialization() {
        let response: ListingsResponse = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(response.data.len(), 3);
        assert_eq!(response.data[0].id, 1);
        assert!(response.data[2].quote.get("GBP").unwrap().price.is_none());
    }
}

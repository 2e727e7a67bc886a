use anyhow::{Context, Result};
use chrono::Local;
use rust_decimal::Decimal;

use crate::api::ApiClient;
use crate::cache::QuoteCache;
use crate::models::{Quote, Stock};

/// Current quote for one symbol. Public on the backend, so no session.
pub async fn quote(api: &ApiClient, symbol: &str) -> Result<Quote> {
    api.get(&format!("stocks/price/{}", symbol), None)
        .await
        .with_context(|| format!("No quote for symbol {}", symbol))
}

pub async fn list(api: &ApiClient) -> Result<Vec<Stock>> {
    api.get("stocks/list", None).await
}

/// Quote lookup through the freshness-windowed cache: only fetches when the
/// cached price has expired.
pub async fn cached_price(
    api: &ApiClient,
    cache: &mut QuoteCache,
    symbol: &str,
) -> Result<Decimal> {
    let now = Local::now().naive_local();

    if let Some(price) = cache.get(symbol, now) {
        return Ok(price);
    }

    let quote = quote(api, symbol).await?;
    cache.insert(symbol.to_string(), *quote.price(), now);
    Ok(*quote.price())
}

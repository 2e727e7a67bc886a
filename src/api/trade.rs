use anyhow::{Context, Result};
use serde_json::json;
use tracing::info;

use crate::api::dto::TradeOutcomeDto;
use crate::api::{ApiClient, Session};
use crate::models::TradeType;

/// Submits a market order. The backend prices it at the current quote and
/// returns the updated wallet balance.
pub async fn execute(
    api: &ApiClient,
    session: &Session,
    symbol: &str,
    trade_type: TradeType,
    quantity: i64,
) -> Result<TradeOutcomeDto> {
    let outcome: TradeOutcomeDto = api
        .post(
            "trade",
            &json!({
                "symbol": symbol,
                "type": trade_type.to_string(),
                "quantity": quantity,
            }),
            Some(session),
        )
        .await
        .with_context(|| format!("{} order for {} {} failed", trade_type, quantity, symbol))?;

    info!(symbol, %trade_type, quantity, "Trade executed");
    Ok(outcome)
}

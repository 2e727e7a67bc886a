use anyhow::Result;

use crate::api::{ApiClient, Session};
use crate::models::{Page, Trade};

const FULL_HISTORY_PAGE_LIMIT: u32 = 100;

pub async fn fetch_trades(
    api: &ApiClient,
    session: &Session,
    page: u32,
    limit: u32,
) -> Result<Page<Trade>> {
    api.get(
        &format!("portfolio/trades?page={}&limit={}", page, limit),
        Some(session),
    )
    .await
}

/// Walks every page of the trade history. The ledger folds the complete
/// log, so pagination must not truncate it.
pub async fn fetch_all_trades(api: &ApiClient, session: &Session) -> Result<Vec<Trade>> {
    let mut trades = Vec::new();
    let mut page = 1;

    loop {
        let batch = fetch_trades(api, session, page, FULL_HISTORY_PAGE_LIMIT).await?;
        let last = batch.is_last();
        trades.extend(batch.into_transactions());

        if last {
            break;
        }
        page += 1;
    }

    Ok(trades)
}

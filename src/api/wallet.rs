use anyhow::{Context, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde_json::json;

use crate::api::dto::{BalanceDto, WalletUpdateDto};
use crate::api::{ApiClient, Session};
use crate::models::{Page, WalletTransaction};

const FULL_STATEMENT_PAGE_LIMIT: u32 = 100;

pub async fn balance(api: &ApiClient, session: &Session) -> Result<Decimal> {
    let response: BalanceDto = api.get("wallet/balance", Some(session)).await?;
    Ok(*response.balance())
}

/// Adds funds; returns the new balance.
pub async fn deposit(api: &ApiClient, session: &Session, amount: Decimal) -> Result<Decimal> {
    let response = post_amount(api, session, "wallet/deposit", amount).await?;
    Ok(*response.wallet().balance())
}

/// Withdraws funds; returns the new balance.
pub async fn withdraw(api: &ApiClient, session: &Session, amount: Decimal) -> Result<Decimal> {
    let response = post_amount(api, session, "wallet/withdraw", amount).await?;
    Ok(*response.wallet().balance())
}

async fn post_amount(
    api: &ApiClient,
    session: &Session,
    endpoint: &str,
    amount: Decimal,
) -> Result<WalletUpdateDto> {
    // The backend expects a JSON number for the amount.
    let amount = amount
        .round_dp(2)
        .to_f64()
        .with_context(|| format!("Amount {} out of range", amount))?;

    api.post(endpoint, &json!({ "amount": amount }), Some(session))
        .await
}

pub async fn transactions(
    api: &ApiClient,
    session: &Session,
    page: u32,
    limit: u32,
) -> Result<Page<WalletTransaction>> {
    api.get(
        &format!("wallet/transactions?page={}&limit={}", page, limit),
        Some(session),
    )
    .await
}

/// Walks every page of the wallet statement.
pub async fn fetch_all_transactions(
    api: &ApiClient,
    session: &Session,
) -> Result<Vec<WalletTransaction>> {
    let mut all = Vec::new();
    let mut page = 1;

    loop {
        let batch = transactions(api, session, page, FULL_STATEMENT_PAGE_LIMIT).await?;
        let last = batch.is_last();
        all.extend(batch.into_transactions());

        if last {
            break;
        }
        page += 1;
    }

    Ok(all)
}

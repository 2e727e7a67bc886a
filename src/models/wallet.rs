use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// One row of the wallet statement. `balance_after` is the wallet balance
/// once this transaction settled, as reported by the backend.
#[derive(Clone, Debug, Deserialize, Getters, PartialEq, Serialize, new)]
#[serde(rename_all = "camelCase")]
pub struct WalletTransaction {
    #[serde(rename = "type")]
    transaction_type: WalletTransactionType,
    amount: Decimal,
    description: Option<String>,
    created_at: NaiveDateTime,
    balance_after: Decimal,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Deserialize,
    Display,
    EnumString,
    Eq,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum WalletTransactionType {
    Deposit,
    Withdrawal,
    TradeBuy,
    TradeSell,
}

impl WalletTransactionType {
    /// Whether this kind of transaction increases the wallet balance.
    pub fn is_credit(&self) -> bool {
        matches!(self, Self::Deposit | Self::TradeSell)
    }
}

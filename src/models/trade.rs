use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// A single buy or sell order as recorded by the backend. Immutable once
/// recorded; ordering by `date` is significant when folding into positions.
#[derive(Clone, Debug, Deserialize, Getters, PartialEq, Serialize, new)]
pub struct Trade {
    #[serde(rename = "stockSymbol")]
    symbol: String,
    #[serde(rename = "type")]
    trade_type: TradeType,
    quantity: i64,
    price: Decimal,
    date: NaiveDateTime,
}

impl Trade {
    /// Gross order value, before any wallet adjustment.
    pub fn amount(&self) -> Decimal {
        Decimal::from(self.quantity) * self.price
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Display, EnumString, Eq, PartialEq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum TradeType {
    Buy,
    Sell,
}

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Current price for a symbol from the backend's quote endpoint.
#[derive(Clone, Debug, Deserialize, Getters, PartialEq, new)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    symbol: String,
    name: String,
    price: Decimal,
    previous_close: Decimal,
    change: Decimal,
    change_percent: Decimal,
    last_updated: Option<NaiveDateTime>,
}

/// A listed instrument as returned by the stock listing endpoint.
#[derive(Clone, Debug, Deserialize, Getters, PartialEq, new)]
#[serde(rename_all = "camelCase")]
pub struct Stock {
    symbol: String,
    name: String,
    current_price: Decimal,
    previous_close: Decimal,
    last_updated: Option<NaiveDateTime>,
}

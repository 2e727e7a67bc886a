use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponseDto {
    access_token: String,
    id: i64,
    email: String,
    first_name: String,
    last_name: String,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct MessageResponseDto {
    message: String,
}

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct TradeOutcomeDto {
    message: String,
    wallet_balance: Decimal,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct BalanceDto {
    balance: Decimal,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct WalletDto {
    balance: Decimal,
}

#[derive(Debug, Deserialize, Getters, new)]
pub struct WalletUpdateDto {
    wallet: WalletDto,
    message: Option<String>,
}

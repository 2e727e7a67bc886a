use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use crate::models::WalletTransactionType;

#[derive(Debug, Parser)]
#[command(name = "tradesim", about = "Trading simulator portfolio and wallet client", version)]
pub struct Cli {
    /// Backend base URL; overrides TRADESIM_API_URL
    #[arg(long)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create a new account
    Register {
        first_name: String,
        last_name: String,
        email: String,
        password: String,
        #[arg(long)]
        phone: Option<String>,
    },
    /// Holdings and profit summary
    Portfolio,
    /// Portfolio value at each trade date
    Chart,
    /// Trade history
    Trades {
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Execute a buy order at the current market price
    Buy { symbol: String, quantity: i64 },
    /// Execute a sell order at the current market price
    Sell { symbol: String, quantity: i64 },
    /// Wallet balance
    Wallet,
    /// Add funds to the wallet
    Deposit { amount: Decimal },
    /// Withdraw funds from the wallet
    Withdraw { amount: Decimal },
    /// Wallet statement, optionally filtered
    Transactions {
        /// DEPOSIT, WITHDRAWAL, TRADE_BUY or TRADE_SELL
        #[arg(long = "type")]
        transaction_type: Option<WalletTransactionType>,
        /// Earliest date to include (YYYY-MM-DD)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Latest date to include, whole day (YYYY-MM-DD)
        #[arg(long)]
        to: Option<NaiveDate>,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = 50)]
        limit: u32,
    },
    /// Listed stocks with current prices
    Stocks,
    /// Export the wallet statement to a CSV file
    Export { path: String },
}

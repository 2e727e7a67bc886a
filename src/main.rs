use std::collections::HashMap;
use std::env;

use anyhow::{Context, Result};
use clap::Parser;
use comfy_table::Table;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use tradesim::api::{self, ApiClient, Session};
use tradesim::cache::QuoteCache;
use tradesim::cli::{Cli, Command};
use tradesim::export;
use tradesim::ledger::{compute_holdings, compute_summary, compute_time_series, estimated_price};
use tradesim::models::{Trade, TradeType};
use tradesim::wallet::{TransactionFilter, filter_transactions};

// Growth factor applied over average buy cost when no live quote is
// available. An approximation for display, not market data.
const ESTIMATED_GROWTH: Decimal = dec!(1.05);

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let client = match cli.api_url {
        Some(url) => ApiClient::new(url),
        None => ApiClient::from_env(),
    };

    match cli.command {
        Command::Register {
            first_name,
            last_name,
            email,
            password,
            phone,
        } => {
            let message = api::auth::register(
                &client,
                &first_name,
                &last_name,
                &email,
                &password,
                phone.as_deref(),
            )
            .await?;
            println!("{}", message);
            Ok(())
        }
        Command::Stocks => show_stocks(&client).await,
        command => {
            let email = env::var("TRADESIM_EMAIL").context("Missing TRADESIM_EMAIL")?;
            let password = env::var("TRADESIM_PASSWORD").context("Missing TRADESIM_PASSWORD")?;

            let session = api::auth::login(&client, &email, &password).await?;
            let result = run(&client, &session, command).await;
            api::auth::logout(session);
            result
        }
    }
}

async fn run(client: &ApiClient, session: &Session, command: Command) -> Result<()> {
    match command {
        Command::Portfolio => show_portfolio(client, session).await,
        Command::Chart => show_chart(client, session).await,
        Command::Trades { page, limit } => show_trades(client, session, page, limit).await,
        Command::Buy { symbol, quantity } => {
            execute_trade(client, session, &symbol, TradeType::Buy, quantity).await
        }
        Command::Sell { symbol, quantity } => {
            execute_trade(client, session, &symbol, TradeType::Sell, quantity).await
        }
        Command::Wallet => {
            let balance = api::wallet::balance(client, session).await?;
            println!("Wallet balance: {}", money(balance));
            Ok(())
        }
        Command::Deposit { amount } => {
            let balance = api::wallet::deposit(client, session, amount).await?;
            println!("Deposited {}. New balance: {}", money(amount), money(balance));
            Ok(())
        }
        Command::Withdraw { amount } => {
            let balance = api::wallet::withdraw(client, session, amount).await?;
            println!("Withdrew {}. New balance: {}", money(amount), money(balance));
            Ok(())
        }
        Command::Transactions {
            transaction_type,
            from,
            to,
            page,
            limit,
        } => {
            let filter = TransactionFilter::new(transaction_type, from, to);
            show_transactions(client, session, &filter, page, limit).await
        }
        Command::Export { path } => export_statement(client, session, &path).await,
        // Handled before login.
        Command::Register { .. } | Command::Stocks => unreachable!(),
    }
}

async fn show_portfolio(client: &ApiClient, session: &Session) -> Result<()> {
    let trades = api::portfolio::fetch_all_trades(client, session).await?;
    if trades.is_empty() {
        println!("No trades yet. Start trading to build your portfolio.");
        return Ok(());
    }

    let holdings = compute_holdings(&trades)?;
    let prices = resolve_prices(client, &trades).await?;
    let price = |symbol: &str| prices.get(symbol).copied().unwrap_or(Decimal::ZERO);
    let summary = compute_summary(&holdings, &price);

    println!("Total investment: {}", money(*summary.total_investment()));
    println!("Current value:    {}", money(*summary.current_value()));
    println!(
        "Profit/loss:      {} ({}%)",
        money_signed(*summary.profit()),
        summary.profit_percentage().round_dp(2)
    );
    println!();

    let mut table = Table::new();
    table.set_header(vec![
        "Symbol",
        "Quantity",
        "Avg. Cost",
        "Investment",
        "Value",
        "P&L",
    ]);
    for holding in &holdings {
        let current = holding.market_value(price(holding.symbol()));
        table.add_row(vec![
            holding.symbol().clone(),
            holding.quantity().to_string(),
            money(holding.average_cost()),
            money(*holding.cost_basis()),
            money(current),
            money_signed(current - holding.cost_basis()),
        ]);
    }
    println!("{table}");

    Ok(())
}

async fn show_chart(client: &ApiClient, session: &Session) -> Result<()> {
    let trades = api::portfolio::fetch_all_trades(client, session).await?;
    if trades.is_empty() {
        println!("Not enough trading history to chart.");
        return Ok(());
    }

    let prices = resolve_prices(client, &trades).await?;
    let price = |symbol: &str| prices.get(symbol).copied().unwrap_or(Decimal::ZERO);

    println!("Portfolio value over time:");
    for point in compute_time_series(&trades, &price)? {
        let point = point?;
        println!("{}  {}", point.date().format("%Y-%m-%d"), money(*point.value()));
    }

    Ok(())
}

async fn show_trades(
    client: &ApiClient,
    session: &Session,
    page: u32,
    limit: u32,
) -> Result<()> {
    let batch = api::portfolio::fetch_trades(client, session, page, limit).await?;

    let mut table = Table::new();
    table.set_header(vec!["Date", "Stock", "Type", "Quantity", "Price", "Total"]);
    for trade in batch.transactions() {
        table.add_row(vec![
            trade.date().format("%Y-%m-%d %H:%M").to_string(),
            trade.symbol().clone(),
            trade.trade_type().to_string(),
            trade.quantity().to_string(),
            money(*trade.price()),
            money(trade.amount()),
        ]);
    }
    println!("{table}");
    println!(
        "Page {} of {} ({} trades)",
        batch.page(),
        batch.pages(),
        batch.total()
    );

    Ok(())
}

async fn execute_trade(
    client: &ApiClient,
    session: &Session,
    symbol: &str,
    trade_type: TradeType,
    quantity: i64,
) -> Result<()> {
    let outcome = api::trade::execute(client, session, symbol, trade_type, quantity).await?;
    println!("{}", outcome.message());
    println!("Wallet balance: {}", money(*outcome.wallet_balance()));
    Ok(())
}

async fn show_transactions(
    client: &ApiClient,
    session: &Session,
    filter: &TransactionFilter,
    page: u32,
    limit: u32,
) -> Result<()> {
    let batch = api::wallet::transactions(client, session, page, limit).await?;
    let total_pages = *batch.pages();
    let transactions = batch.into_transactions();
    let matching = filter_transactions(&transactions, filter);

    let mut table = Table::new();
    table.set_header(vec!["Date", "Type", "Amount", "Description", "Balance"]);
    for transaction in matching {
        table.add_row(vec![
            transaction.created_at().format("%Y-%m-%d %H:%M").to_string(),
            transaction.transaction_type().to_string(),
            money(*transaction.amount()),
            transaction.description().clone().unwrap_or_default(),
            money(*transaction.balance_after()),
        ]);
    }
    println!("{table}");
    println!("Page {} of {}", page, total_pages);

    Ok(())
}

async fn show_stocks(client: &ApiClient) -> Result<()> {
    let stocks = api::stocks::list(client).await?;

    let mut table = Table::new();
    table.set_header(vec!["Symbol", "Name", "Price", "Prev. Close"]);
    for stock in &stocks {
        table.add_row(vec![
            stock.symbol().clone(),
            stock.name().clone(),
            money(*stock.current_price()),
            money(*stock.previous_close()),
        ]);
    }
    println!("{table}");

    Ok(())
}

async fn export_statement(client: &ApiClient, session: &Session, path: &str) -> Result<()> {
    let transactions = api::wallet::fetch_all_transactions(client, session).await?;
    export::export_transactions(path, &transactions)?;
    println!("Exported {} transactions to {}", transactions.len(), path);
    Ok(())
}

/// Live quote per traded symbol, falling back to the estimated price for
/// symbols the quote endpoint cannot serve.
async fn resolve_prices(
    client: &ApiClient,
    trades: &[Trade],
) -> Result<HashMap<String, Decimal>> {
    let buys: Vec<Trade> = trades
        .iter()
        .filter(|trade| *trade.trade_type() == TradeType::Buy)
        .cloned()
        .collect();
    let bought = compute_holdings(&buys)?;
    let estimate = estimated_price(&bought, ESTIMATED_GROWTH);

    let mut symbols: Vec<&String> = trades.iter().map(|trade| trade.symbol()).collect();
    symbols.sort();
    symbols.dedup();

    let mut cache = QuoteCache::default();
    let mut prices = HashMap::new();
    for symbol in symbols {
        match api::stocks::cached_price(client, &mut cache, symbol).await {
            Ok(price) => {
                prices.insert(symbol.clone(), price);
            }
            Err(err) => {
                warn!(%symbol, %err, "No live quote; estimating from average buy cost");
                prices.insert(symbol.clone(), estimate(symbol));
            }
        }
    }

    Ok(prices)
}

fn money(value: Decimal) -> String {
    format!("{:.2}", value)
}

fn money_signed(value: Decimal) -> String {
    if value.is_sign_negative() {
        format!("{:.2}", value)
    } else {
        format!("+{:.2}", value)
    }
}

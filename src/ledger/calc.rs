use std::collections::HashMap;

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{Holding, PortfolioSummary, Trade, TradeType};

#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum LedgerError {
    /// A sell would drive a position below zero. Signals either a backend
    /// data bug or a race between concurrent trades; callers decide whether
    /// to drop the offending trade or abort.
    #[error("cannot sell {requested} {symbol}: only {held} held")]
    InvalidLedgerState {
        symbol: String,
        held: i64,
        requested: i64,
    },
    #[error("invalid trade: {0}")]
    InvalidTrade(String),
}

/// Running per-symbol position book used by the fold.
#[derive(Clone, Debug, Default)]
struct Book {
    positions: HashMap<String, (i64, Decimal)>,
}

impl Book {
    fn apply(&mut self, trade: &Trade) -> Result<(), LedgerError> {
        let entry = self
            .positions
            .entry(trade.symbol().clone())
            .or_insert((0, Decimal::ZERO));

        match trade.trade_type() {
            TradeType::Buy => {
                entry.0 += *trade.quantity();
                entry.1 += trade.amount();
            }
            // Sell reduces the share count only. Cost basis stays with the
            // remaining shares, so the average cost is unchanged.
            TradeType::Sell => {
                if entry.0 < *trade.quantity() {
                    return Err(LedgerError::InvalidLedgerState {
                        symbol: trade.symbol().clone(),
                        held: entry.0,
                        requested: *trade.quantity(),
                    });
                }
                entry.0 -= *trade.quantity();
            }
        }

        Ok(())
    }

    fn holdings(&self) -> Vec<Holding> {
        let mut holdings: Vec<Holding> = self
            .positions
            .iter()
            .filter(|(_, (quantity, _))| *quantity > 0)
            .map(|(symbol, (quantity, cost_basis))| {
                Holding::new(symbol.clone(), *quantity, *cost_basis)
            })
            .collect();

        holdings.sort_by(|a, b| a.symbol().cmp(b.symbol()));
        holdings
    }

    fn value<F>(&self, price: &F) -> Decimal
    where
        F: Fn(&str) -> Decimal,
    {
        self.positions
            .iter()
            .filter(|(_, (quantity, _))| *quantity > 0)
            .map(|(symbol, (quantity, _))| Decimal::from(*quantity) * price(symbol))
            .sum()
    }
}

fn validate(trades: &[Trade]) -> Result<(), LedgerError> {
    for trade in trades {
        if trade.symbol().is_empty() {
            return Err(LedgerError::InvalidTrade("empty symbol".to_string()));
        }
        if *trade.quantity() < 1 {
            return Err(LedgerError::InvalidTrade(format!(
                "non-positive quantity {} for {}",
                trade.quantity(),
                trade.symbol()
            )));
        }
        if trade.price() < &Decimal::ZERO {
            return Err(LedgerError::InvalidTrade(format!(
                "negative price {} for {}",
                trade.price(),
                trade.symbol()
            )));
        }
    }

    Ok(())
}

fn chronological(trades: &[Trade]) -> Vec<&Trade> {
    let mut sorted: Vec<&Trade> = trades.iter().collect();
    // Stable sort: trades sharing a timestamp keep their input order.
    sorted.sort_by_key(|trade| *trade.date());
    sorted
}

/// Folds a trade log into one [`Holding`] per symbol with shares still held.
///
/// Trades may arrive in any order; they are sorted by date before folding.
/// All trades are validated up front, so a malformed entry fails the whole
/// call and a partial fold is never exposed. Fully liquidated symbols are
/// omitted from the result but remain in history. Pure and deterministic:
/// the input is not mutated and identical input yields identical output.
pub fn compute_holdings(trades: &[Trade]) -> Result<Vec<Holding>, LedgerError> {
    validate(trades)?;

    let mut book = Book::default();
    for trade in chronological(trades) {
        book.apply(trade)?;
    }

    Ok(book.holdings())
}

/// Values holdings against a price lookup. The lookup is an injected
/// collaborator; the ledger makes no assumption about where prices come
/// from. A total investment of zero yields a profit percentage of zero.
pub fn compute_summary<F>(holdings: &[Holding], price: F) -> PortfolioSummary
where
    F: Fn(&str) -> Decimal,
{
    let mut total_investment = Decimal::ZERO;
    let mut current_value = Decimal::ZERO;

    for holding in holdings {
        total_investment += *holding.cost_basis();
        current_value += holding.market_value(price(holding.symbol()));
    }

    let profit = current_value - total_investment;
    let profit_percentage = if total_investment.is_zero() {
        Decimal::ZERO
    } else {
        profit / total_investment * Decimal::ONE_HUNDRED
    };

    PortfolioSummary::new(total_investment, current_value, profit, profit_percentage)
}

/// Builds a placeholder price lookup that assumes every position trades at
/// its average buy cost times a flat growth factor. An approximation for
/// when no live quote source is available, not market data; symbols without
/// a holding price at zero.
pub fn estimated_price(
    holdings: &[Holding],
    growth_factor: Decimal,
) -> impl Fn(&str) -> Decimal {
    let estimates: HashMap<String, Decimal> = holdings
        .iter()
        .map(|holding| (holding.symbol().clone(), holding.average_cost() * growth_factor))
        .collect();

    move |symbol: &str| estimates.get(symbol).copied().unwrap_or(Decimal::ZERO)
}

/// Portfolio value at one trade timestamp, after all trades at that
/// timestamp have been applied.
#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct ValuationPoint {
    date: NaiveDateTime,
    value: Decimal,
}

/// Lazy sequence of portfolio valuations, one per distinct trade timestamp.
///
/// Carries the position book forward between points instead of re-folding
/// the whole prefix for each one, so a full pass is O(n) fold work plus one
/// valuation per point. Produced by [`compute_time_series`]; restartable via
/// [`ValuationSeries::restart`] or by cloning a fresh copy.
#[derive(Clone)]
pub struct ValuationSeries<F> {
    trades: Vec<Trade>,
    price: F,
    book: Book,
    pos: usize,
    failed: bool,
}

impl<F> ValuationSeries<F> {
    /// Rewinds to the first timestamp; iteration starts over from scratch.
    pub fn restart(&mut self) {
        self.book = Book::default();
        self.pos = 0;
        self.failed = false;
    }
}

impl<F> Iterator for ValuationSeries<F>
where
    F: Fn(&str) -> Decimal,
{
    type Item = Result<ValuationPoint, LedgerError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.trades.len() {
            return None;
        }

        let date = *self.trades[self.pos].date();
        while self.pos < self.trades.len() && *self.trades[self.pos].date() == date {
            if let Err(err) = self.book.apply(&self.trades[self.pos]) {
                self.failed = true;
                return Some(Err(err));
            }
            self.pos += 1;
        }

        Some(Ok(ValuationPoint::new(date, self.book.value(&self.price))))
    }
}

/// Portfolio value at each trade timestamp, for driving historical charts.
///
/// Validation errors surface here; an overdrawing sell surfaces as an `Err`
/// item at the timestamp it occurs and ends the sequence.
pub fn compute_time_series<F>(
    trades: &[Trade],
    price: F,
) -> Result<ValuationSeries<F>, LedgerError>
where
    F: Fn(&str) -> Decimal,
{
    validate(trades)?;

    let mut sorted = trades.to_vec();
    sorted.sort_by_key(|trade| *trade.date());

    Ok(ValuationSeries {
        trades: sorted,
        price,
        book: Book::default(),
        pos: 0,
        failed: false,
    })
}

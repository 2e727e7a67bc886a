use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use derive_new::new;
use rust_decimal::Decimal;

use crate::models::{WalletTransaction, WalletTransactionType};

/// Statement filter: by transaction kind and/or an inclusive date window.
/// The end date covers the whole day, matching how the statement view
/// filters.
#[derive(Clone, Debug, Default, new)]
pub struct TransactionFilter {
    transaction_type: Option<WalletTransactionType>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
}

impl TransactionFilter {
    pub fn matches(&self, transaction: &WalletTransaction) -> bool {
        if let Some(kind) = self.transaction_type {
            if *transaction.transaction_type() != kind {
                return false;
            }
        }
        if let Some(start) = self.start_date {
            if transaction.created_at().date() < start {
                return false;
            }
        }
        if let Some(end) = self.end_date {
            if transaction.created_at().date() > end {
                return false;
            }
        }
        true
    }
}

pub fn filter_transactions<'a>(
    transactions: &'a [WalletTransaction],
    filter: &TransactionFilter,
) -> Vec<&'a WalletTransaction> {
    transactions
        .iter()
        .filter(|transaction| filter.matches(transaction))
        .collect()
}

/// Wallet balance after each transaction, sorted by settlement time.
pub fn balance_history(transactions: &[WalletTransaction]) -> Vec<(NaiveDateTime, Decimal)> {
    let mut points: Vec<(NaiveDateTime, Decimal)> = transactions
        .iter()
        .map(|transaction| (*transaction.created_at(), *transaction.balance_after()))
        .collect();

    points.sort_by_key(|(date, _)| *date);
    points
}

/// Transaction tallies per kind, for the type-breakdown chart.
pub fn count_by_type(
    transactions: &[WalletTransaction],
) -> BTreeMap<WalletTransactionType, usize> {
    let mut counts = BTreeMap::new();
    for transaction in transactions {
        *counts.entry(*transaction.transaction_type()).or_insert(0) += 1;
    }
    counts
}

/// Transaction tallies per calendar day, for the volume chart.
pub fn count_by_day(transactions: &[WalletTransaction]) -> BTreeMap<NaiveDate, usize> {
    let mut counts = BTreeMap::new();
    for transaction in transactions {
        *counts.entry(transaction.created_at().date()).or_insert(0) += 1;
    }
    counts
}

use derive_getters::Getters;
use derive_new::new;
use serde::Deserialize;

/// Pagination envelope shared by the trade-history and wallet-statement
/// endpoints.
#[derive(Clone, Debug, Deserialize, Getters, PartialEq, new)]
pub struct Page<T> {
    transactions: Vec<T>,
    page: u32,
    limit: u32,
    total: u64,
    pages: u32,
}

impl<T> Page<T> {
    pub fn is_last(&self) -> bool {
        self.page >= self.pages
    }

    pub fn into_transactions(self) -> Vec<T> {
        self.transactions
    }
}

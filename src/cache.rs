use std::collections::HashMap;

use chrono::{Duration, NaiveDateTime};
use rust_decimal::Decimal;

/// How long a cached quote stays usable before a refetch.
pub const DEFAULT_QUOTE_TTL_MINUTES: i64 = 15;

/// A fetched value with an explicit freshness window, instead of ad hoc
/// timestamp comparisons at every call site.
#[derive(Clone, Debug)]
pub struct CacheEntry<T> {
    value: T,
    fetched_at: NaiveDateTime,
    ttl: Duration,
}

impl<T> CacheEntry<T> {
    pub fn new(value: T, fetched_at: NaiveDateTime, ttl: Duration) -> Self {
        Self {
            value,
            fetched_at,
            ttl,
        }
    }

    /// True while `now` falls within the freshness window. An entry fetched
    /// "in the future" relative to `now` is treated as fresh.
    pub fn is_fresh(&self, now: NaiveDateTime) -> bool {
        now.signed_duration_since(self.fetched_at) < self.ttl
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn fetched_at(&self) -> NaiveDateTime {
        self.fetched_at
    }
}

/// Per-symbol price cache so repeated valuations within the freshness
/// window don't refetch quotes.
#[derive(Clone, Debug)]
pub struct QuoteCache {
    entries: HashMap<String, CacheEntry<Decimal>>,
    ttl: Duration,
}

impl QuoteCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    pub fn get(&self, symbol: &str, now: NaiveDateTime) -> Option<Decimal> {
        self.entries
            .get(symbol)
            .filter(|entry| entry.is_fresh(now))
            .map(|entry| *entry.value())
    }

    pub fn insert(&mut self, symbol: String, price: Decimal, now: NaiveDateTime) {
        self.entries
            .insert(symbol, CacheEntry::new(price, now, self.ttl));
    }
}

impl Default for QuoteCache {
    fn default() -> Self {
        Self::new(Duration::minutes(DEFAULT_QUOTE_TTL_MINUTES))
    }
}

pub mod holding;
pub mod page;
pub mod quote;
pub mod summary;
pub mod trade;
pub mod wallet;

pub use holding::Holding;
pub use page::Page;
pub use quote::{Quote, Stock};
pub use summary::PortfolioSummary;
pub use trade::{Trade, TradeType};
pub use wallet::{WalletTransaction, WalletTransactionType};

pub mod calc;

pub use calc::{
    LedgerError, ValuationPoint, ValuationSeries, compute_holdings, compute_summary,
    compute_time_series, estimated_price,
};

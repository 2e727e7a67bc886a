use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// Aggregate view over all holdings with quantity > 0. `profit` is the
/// unrealized gain on currently held shares; gains locked in by completed
/// sells are not tracked here.
#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct PortfolioSummary {
    total_investment: Decimal,
    current_value: Decimal,
    profit: Decimal,
    profit_percentage: Decimal,
}

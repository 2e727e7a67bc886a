use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// Current net position in a symbol. `cost_basis` is the purchase cost of the
/// shares still held; sells reduce quantity but never the cost basis, so the
/// weighted-average cost of the remaining shares is preserved.
/// Derived from the trade log, never persisted.
#[derive(Clone, Debug, Eq, Getters, PartialEq, new)]
pub struct Holding {
    symbol: String,
    quantity: i64,
    cost_basis: Decimal,
}

impl Holding {
    pub fn average_cost(&self) -> Decimal {
        if self.quantity == 0 {
            return Decimal::ZERO;
        }
        self.cost_basis / Decimal::from(self.quantity)
    }

    pub fn market_value(&self, price: Decimal) -> Decimal {
        Decimal::from(self.quantity) * price
    }
}

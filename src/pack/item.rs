use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Valued;

/// A single candidate item from a pack's pool.
///
/// Immutable once constructed. Two items are the same domain object only if
/// index, weight, and cost all match; amount equality ignores trailing zero
/// scale, so a weight parsed from `"10"` equals one parsed from `"10.00"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub index: u32,
    pub weight: Decimal,
    pub cost: Decimal,
}

impl Item {
    pub fn new(index: u32, weight: Decimal, cost: Decimal) -> Self {
        Self {
            index,
            weight,
            cost,
        }
    }
}

impl Valued for Item {
    fn cost(&self) -> Decimal {
        self.cost
    }

    fn weight(&self) -> Decimal {
        self.weight
    }
}

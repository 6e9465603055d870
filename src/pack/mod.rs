pub mod item;
pub mod pack;

pub use item::Item;
pub use pack::Pack;

use std::cmp::Ordering;

use rust_decimal::Decimal;

/// Anything carrying a weight and a cost. Items and Packs share the
/// selection ordering through this trait.
pub trait Valued {
    fn cost(&self) -> Decimal;
    fn weight(&self) -> Decimal;

    /// Selection preference: highest cost first, lowest weight on cost ties.
    /// `Ordering::Less` means `self` ranks ahead of `other`.
    fn preference(&self, other: &impl Valued) -> Ordering {
        other
            .cost()
            .cmp(&self.cost())
            .then(self.weight().cmp(&other.weight()))
    }

    /// Strict betterness: higher cost, or equal cost and lower weight.
    /// Equal cost and equal weight is a tie, not an improvement.
    fn is_better_than(&self, other: &impl Valued) -> bool {
        self.preference(other) == Ordering::Less
    }
}

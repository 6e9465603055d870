use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Item, Valued};

/// A set of items with running totals.
///
/// Serves both as the parsed pool of one input line and as a candidate
/// solution under construction. The totals are maintained on every
/// [`add_item`](Pack::add_item) call and always equal the sum over the
/// contained items; there is no recompute pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pack {
    items: Vec<Item>,
    total_weight: Decimal,
    total_cost: Decimal,
}

impl Pack {
    /// An empty pack: no items, zero weight, zero cost.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item, updating both running totals in the same call.
    pub fn add_item(&mut self, item: Item) {
        self.total_weight += item.weight;
        self.total_cost += item.cost;
        self.items.push(item);
    }

    /// Items in insertion order (selection order until
    /// [`sort_by_index`](Pack::sort_by_index) is called).
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn total_weight(&self) -> Decimal {
        self.total_weight
    }

    pub fn total_cost(&self) -> Decimal {
        self.total_cost
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether adding `item` keeps the total weight within `capacity`.
    pub fn fits(&self, item: &Item, capacity: Decimal) -> bool {
        self.total_weight + item.weight <= capacity
    }

    /// Reorder the items by ascending original index (display order).
    pub fn sort_by_index(&mut self) {
        self.items.sort_by_key(|item| item.index);
    }
}

impl Valued for Pack {
    fn cost(&self) -> Decimal {
        self.total_cost
    }

    fn weight(&self) -> Decimal {
        self.total_weight
    }
}

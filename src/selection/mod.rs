pub mod format;
pub mod validate;

pub use format::render;
pub use validate::{validate_pool, ValidationError};

use rust_decimal::Decimal;

use crate::pack::{Item, Pack, Valued};

/// Anchor-sweep subset search over one pack's pool.
///
/// The traversal is pinned behavior: downstream consumers depend on the
/// exact combinations this search visits, so it must not be replaced by a
/// provably optimal knapsack solver even where one would differ.
///
/// For a pool sorted by preference (highest cost first, lowest weight on
/// ties), every `(offset, anchor)` pair of positions is tried: the anchor
/// item is placed first if it fits the capacity on its own, then the
/// sub-sequence starting at `offset` is walked once, greedily adding every
/// other item that still fits. The single-offset variant of this search
/// misses combinations where a lower-ranked item has to stand in for a
/// heavier one; forcing each sorted item through the anchor role recovers
/// those. The search stays a heuristic, with O(n²) candidate packs and an
/// O(n) fill each.
#[derive(Debug, Default)]
pub struct Selector;

impl Selector {
    pub fn new() -> Self {
        Selector
    }

    /// Pick the best subset of `pool` that fits `capacity`.
    ///
    /// Never fails: an item heavier than the capacity is simply never added,
    /// and an empty (or all-too-heavy) pool yields the empty pack. The
    /// result's items are reordered by ascending index before returning.
    pub fn select(&self, pool: &[Item], capacity: Decimal) -> Pack {
        let mut sorted: Vec<Item> = pool.to_vec();
        sorted.sort_by(|a, b| a.preference(b));

        let mut best = Pack::new();
        let n = sorted.len();
        for offset in 0..n {
            for anchor_at in 0..n {
                let anchor = &sorted[anchor_at];

                let mut current = Pack::new();
                if current.fits(anchor, capacity) {
                    current.add_item(anchor.clone());
                }

                // Greedy fill from the offset: one forward walk, no
                // backtracking, no retry of a rejected item. Runs even when
                // the anchor itself was too heavy to join.
                for item in &sorted[offset..] {
                    if item != anchor && current.fits(item, capacity) {
                        current.add_item(item.clone());
                    }
                }

                if current.is_better_than(&best) {
                    best = current;
                }
            }
        }

        best.sort_by_index();
        best
    }
}

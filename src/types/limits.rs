//! Fixed limits on pack pools.
//!
//! These values are part of the external contract and must not change: pools
//! and items are validated against exactly these caps before selection runs.

use rust_decimal::Decimal;

/// Maximum number of candidate items in one pool.
pub const MAX_POOL_ITEMS: usize = 15;

/// Maximum combined weight of all items in one pool, in weight units.
pub const MAX_POOL_WEIGHT: Decimal = Decimal::ONE_HUNDRED;

/// Maximum weight of a single item, in weight units.
pub const MAX_ITEM_WEIGHT: Decimal = Decimal::ONE_HUNDRED;

/// Maximum cost of a single item, in currency units.
pub const MAX_ITEM_COST: Decimal = Decimal::ONE_HUNDRED;

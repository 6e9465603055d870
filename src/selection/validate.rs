use rust_decimal::Decimal;
use thiserror::Error;

use crate::pack::Pack;
use crate::types::limits::{MAX_ITEM_COST, MAX_ITEM_WEIGHT, MAX_POOL_ITEMS, MAX_POOL_WEIGHT};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("the pool weight ({weight}) is larger than the maximum allowed ({limit})")]
    PoolTooHeavy { weight: Decimal, limit: Decimal },
    #[error("the amount of items in the pool ({count}) shouldn't exceed {limit}")]
    TooManyItems { count: usize, limit: usize },
    #[error("the weight of item {index} ({weight}) is larger than the maximum allowed ({limit})")]
    ItemTooHeavy {
        index: u32,
        weight: Decimal,
        limit: Decimal,
    },
    #[error("the cost of item {index} ({cost}) is larger than the maximum allowed ({limit})")]
    ItemTooCostly {
        index: u32,
        cost: Decimal,
        limit: Decimal,
    },
}

/// Check a parsed pool against the fixed limits before selection runs.
///
/// The pool weight check sums ALL candidate items, not the capacity: an
/// oversized pool is rejected even though selection would never choose every
/// item. Checks run in a fixed order and report the first violation.
pub fn validate_pool(pool: &Pack) -> Result<(), ValidationError> {
    if pool.total_weight() > MAX_POOL_WEIGHT {
        return Err(ValidationError::PoolTooHeavy {
            weight: pool.total_weight(),
            limit: MAX_POOL_WEIGHT,
        });
    }
    if pool.len() > MAX_POOL_ITEMS {
        return Err(ValidationError::TooManyItems {
            count: pool.len(),
            limit: MAX_POOL_ITEMS,
        });
    }
    for item in pool.items() {
        if item.weight > MAX_ITEM_WEIGHT {
            return Err(ValidationError::ItemTooHeavy {
                index: item.index,
                weight: item.weight,
                limit: MAX_ITEM_WEIGHT,
            });
        }
        if item.cost > MAX_ITEM_COST {
            return Err(ValidationError::ItemTooCostly {
                index: item.index,
                cost: item.cost,
                limit: MAX_ITEM_COST,
            });
        }
    }
    Ok(())
}

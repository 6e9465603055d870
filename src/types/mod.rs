pub mod decimal;
pub mod limits;

pub use decimal::{parse_amount, AmountError};

use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AmountError {
    #[error("amount {0:?} is not a plain non-negative decimal")]
    Malformed(String),
    #[error("amount {0:?} has more than two fractional digits")]
    TooManyFractionDigits(String),
    #[error("amount {0:?} is out of range")]
    OutOfRange(String),
}

/// Parse a weight, cost, or capacity from its textual form.
///
/// Accepted shape: one or more digits, optionally followed by `.` and one or
/// two digits. No sign, no exponent, no grouping. The scale of the text is
/// not significant for the resulting value: `"10"` and `"10.00"` parse to
/// equal amounts that order and sum identically.
pub fn parse_amount(text: &str) -> Result<Decimal, AmountError> {
    let (integral, fraction) = match text.split_once('.') {
        Some((integral, fraction)) => (integral, Some(fraction)),
        None => (text, None),
    };

    if integral.is_empty() || !integral.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::Malformed(text.to_string()));
    }
    if let Some(fraction) = fraction {
        if fraction.is_empty() || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::Malformed(text.to_string()));
        }
        if fraction.len() > 2 {
            return Err(AmountError::TooManyFractionDigits(text.to_string()));
        }
    }

    text.parse::<Decimal>()
        .map_err(|_| AmountError::OutOfRange(text.to_string()))
}

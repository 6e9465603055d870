use rust_decimal::Decimal;
use thiserror::Error;

use crate::pack::{Item, Pack};
use crate::types::decimal::parse_amount;

/// One input line, decoded: the weight capacity plus the candidate pool.
#[derive(Debug, Clone)]
pub struct ParsedPack {
    pub capacity: Decimal,
    pub pool: Pack,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("could not determine a weight capacity for line: {line}")]
    MissingCapacity { line: String },
}

/// Decode one line of pack notation:
///
/// ```text
/// <capacity> : (<index>,<weight>,<cost>) (<index>,<weight>,<cost>) ...
/// ```
///
/// Whitespace anywhere in the line is insignificant. Amounts are
/// non-negative decimals with at most two fractional digits; a currency or
/// unit symbol may precede the cost digits and is ignored. Parenthesized
/// groups that do not match the item shape are skipped, so a line may
/// legally decode to an empty pool. Only a missing or unparseable
/// `<capacity>:` prefix fails the line.
pub fn parse_line(line: &str) -> Result<ParsedPack, ParseError> {
    let stripped: String = line.chars().filter(|c| !c.is_whitespace()).collect();

    let (capacity_text, mut rest) = stripped
        .split_once(':')
        .ok_or_else(|| ParseError::MissingCapacity {
            line: line.to_string(),
        })?;
    let capacity = parse_amount(capacity_text).map_err(|_| ParseError::MissingCapacity {
        line: line.to_string(),
    })?;

    let mut pool = Pack::new();
    while let Some(open) = rest.find('(') {
        let Some(len) = rest[open..].find(')') else {
            break;
        };
        if let Some(item) = parse_item(&rest[open + 1..open + len]) {
            pool.add_item(item);
        }
        rest = &rest[open + len + 1..];
    }

    Ok(ParsedPack { capacity, pool })
}

/// Decode the body of one `(<index>,<weight>,<cost>)` group, or `None` if it
/// does not match the item shape.
fn parse_item(body: &str) -> Option<Item> {
    let mut fields = body.splitn(3, ',');

    let index_text = fields.next()?;
    if index_text.is_empty() || !index_text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let index = index_text.parse::<u32>().ok()?;

    let weight = parse_amount(fields.next()?).ok()?;

    // The cost may carry a leading currency or unit symbol.
    let cost_text = fields.next()?;
    let digits_at = cost_text.find(|c: char| c.is_ascii_digit())?;
    let cost = parse_amount(&cost_text[digits_at..]).ok()?;

    Some(Item::new(index, weight, cost))
}

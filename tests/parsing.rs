use packer_core::input::{parse_line, ParseError};
use packer_core::types::{parse_amount, AmountError};
use rust_decimal::Decimal;

fn amount(text: &str) -> Decimal {
    text.parse().unwrap()
}

#[test]
fn parses_a_plain_line() {
    let parsed = parse_line("81:(1,53.38,45)(2,88.62,98)").unwrap();
    assert_eq!(parsed.capacity, amount("81"));
    assert_eq!(parsed.pool.len(), 2);
    assert_eq!(parsed.pool.items()[0].index, 1);
    assert_eq!(parsed.pool.items()[0].weight, amount("53.38"));
    assert_eq!(parsed.pool.items()[0].cost, amount("45"));
    assert_eq!(parsed.pool.items()[1].index, 2);
}

#[test]
fn whitespace_is_insignificant_anywhere() {
    let spaced = parse_line("  81 : ( 1 , 53.38 , 45 )  ( 2 ,88.62, 98 ) ").unwrap();
    let compact = parse_line("81:(1,53.38,45)(2,88.62,98)").unwrap();
    assert_eq!(spaced.capacity, compact.capacity);
    assert_eq!(spaced.pool.items(), compact.pool.items());
}

#[test]
fn currency_symbol_before_cost_is_ignored() {
    let parsed = parse_line("75:(1,85.31,€29)(2,14.55,$74.76)").unwrap();
    assert_eq!(parsed.pool.items()[0].cost, amount("29"));
    assert_eq!(parsed.pool.items()[1].cost, amount("74.76"));
}

#[test]
fn line_without_capacity_prefix_fails() {
    assert!(matches!(
        parse_line("(1,2,3)"),
        Err(ParseError::MissingCapacity { .. })
    ));
    assert!(matches!(
        parse_line("eighty:(1,2,3)"),
        Err(ParseError::MissingCapacity { .. })
    ));
    assert!(matches!(
        parse_line("8.125:(1,2,3)"),
        Err(ParseError::MissingCapacity { .. })
    ));
}

#[test]
fn malformed_item_groups_are_skipped() {
    let parsed = parse_line("75:(1,1,1)(x,y,z)(2,2,2)(3,4.123,5)(4,,9)").unwrap();
    let indices: Vec<u32> = parsed.pool.items().iter().map(|i| i.index).collect();
    assert_eq!(indices, vec![1, 2]);
}

#[test]
fn line_may_decode_to_an_empty_pool() {
    let parsed = parse_line("56:").unwrap();
    assert!(parsed.pool.is_empty());
}

#[test]
fn indices_need_not_be_contiguous_or_sorted() {
    let parsed = parse_line("30:(9,1,2)(4,1,2)(12,1,2)").unwrap();
    let indices: Vec<u32> = parsed.pool.items().iter().map(|i| i.index).collect();
    assert_eq!(indices, vec![9, 4, 12]);
}

#[test]
fn amount_accepts_up_to_two_fraction_digits() {
    assert_eq!(parse_amount("10").unwrap(), amount("10"));
    assert_eq!(parse_amount("10.5").unwrap(), amount("10.5"));
    assert_eq!(parse_amount("10.53").unwrap(), amount("10.53"));
    assert_eq!(
        parse_amount("10.531"),
        Err(AmountError::TooManyFractionDigits("10.531".to_string()))
    );
}

#[test]
fn amount_rejects_signs_and_junk() {
    assert!(parse_amount("-3").is_err());
    assert!(parse_amount("+3").is_err());
    assert!(parse_amount("3.").is_err());
    assert!(parse_amount(".5").is_err());
    assert!(parse_amount("1e2").is_err());
    assert!(parse_amount("").is_err());
}

#[test]
fn trailing_zero_scale_does_not_matter() {
    let plain = parse_amount("10").unwrap();
    let scaled = parse_amount("10.00").unwrap();
    assert_eq!(plain, scaled);
    assert!(plain >= scaled && plain <= scaled);
    assert_eq!(plain + plain, scaled + scaled);
    assert_eq!(plain + scaled, amount("20"));

    let a = parse_line("50:(1,10,40)").unwrap();
    let b = parse_line("50:(1,10.00,40.00)").unwrap();
    assert_eq!(a.pool.items(), b.pool.items());
    assert_eq!(a.pool.total_weight(), b.pool.total_weight());
}

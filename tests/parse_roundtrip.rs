// ============================================================================
// Parse Round Trip
// Rendered amounts always parse back to the same number of cents
// ============================================================================

use money_value::prelude::*;
use quickcheck::{quickcheck, TestResult};

fn usd() -> Currency {
    Currency::new("USD").unwrap()
}

fn rendered_units_parse_back(units: i64) -> bool {
    let money = Money::from_units(units, usd());
    let text = money.amount().to_string();

    match Money::string_to_units(&text) {
        Ok(parsed) => Money::from_units(parsed, usd()) == money,
        Err(_) => false,
    }
}

fn comma_matches_dot(whole: u32, cents: u8) -> TestResult {
    if cents > 99 {
        return TestResult::discard();
    }
    let dot = Money::string_to_units(&format!("{}.{:02}", whole, cents));
    let comma = Money::string_to_units(&format!("{},{:02}", whole, cents));
    TestResult::from_bool(dot.is_ok() && dot == comma)
}

fn third_decimal_is_rejected(whole: u32, digits: u16) -> TestResult {
    if digits > 999 {
        return TestResult::discard();
    }
    let text = format!("{}.{:03}", whole, digits);
    TestResult::from_bool(matches!(
        Money::string_to_units(&text),
        Err(MoneyError::ParseError { .. })
    ))
}

fn plain_text_matches_money_text(units: i64) -> bool {
    let plain = PlainMoney::from_units(units);
    plain.to_string() == plain.with_currency(usd()).amount().to_string()
        && PlainMoney::parse(&plain.to_string()) == Ok(plain)
}

#[test]
fn test_rendered_units_parse_back() {
    quickcheck(rendered_units_parse_back as fn(i64) -> bool);
}

#[test]
fn test_comma_matches_dot() {
    quickcheck(comma_matches_dot as fn(u32, u8) -> TestResult);
}

#[test]
fn test_third_decimal_is_rejected() {
    quickcheck(third_decimal_is_rejected as fn(u32, u16) -> TestResult);
}

#[test]
fn test_plain_text_matches_money_text() {
    quickcheck(plain_text_matches_money_text as fn(i64) -> bool);
}

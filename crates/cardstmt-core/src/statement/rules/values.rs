//! Typed readings of extracted field text.
//!
//! Field values stay textual; these helpers are for callers that want
//! numbers and dates. They do not judge plausibility.

use std::str::FromStr;

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;

use super::normalize;

lazy_static! {
    static ref RANGE_SEPARATOR: Regex = Regex::new(r"(?i)\s*(?:–|-|\bto\b)\s*").unwrap();
}

const FULL_YEAR_FORMATS: &[&str] = &[
    "%d %b %Y",
    "%d %b, %Y",
    "%d-%b-%Y",
    "%b %d, %Y",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d.%m.%Y",
];

const SHORT_YEAR_FORMATS: &[&str] = &["%d/%m/%y", "%d-%m-%y", "%d.%m.%y", "%d %b %y", "%d-%b-%y"];

/// Parse an amount such as `14,820.00`, `1,23,456.50` or `Rs. 500`.
pub fn parse_amount(s: &str) -> Option<Decimal> {
    let cleaned = normalize::amount(s)?.replace(',', "");
    Decimal::from_str(&cleaned).ok()
}

/// Parse a statement date such as `15 Oct 2025`, `15 October 2025` or
/// `15/10/2025` (day first).
pub fn parse_statement_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();
    let year_digits = s.chars().rev().take_while(char::is_ascii_digit).count();
    let formats = if year_digits == 2 {
        SHORT_YEAR_FORMATS
    } else {
        FULL_YEAR_FORMATS
    };

    formats
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
}

/// Parse a billing cycle such as `01 Sep 2025 - 30 Sep 2025` into its
/// start and end dates.
pub fn parse_billing_cycle(s: &str) -> Option<(NaiveDate, NaiveDate)> {
    RANGE_SEPARATOR.find_iter(s).find_map(|separator| {
        let start = parse_statement_date(&s[..separator.start()])?;
        let end = parse_statement_date(&s[separator.end()..])?;
        Some((start, end))
    })
}

//! Normalization of raw pattern captures.
//!
//! Every normalizer is idempotent: feeding its output back in returns the
//! same value. Returning `None` rejects the capture.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

use crate::models::statement::Field;

lazy_static! {
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();

    static ref CURRENCY_MARKER: Regex = Regex::new(r"(?i)rs\.?|inr|₹|\$|usd").unwrap();
}

/// Salutation targets that are not a person's name.
const GENERIC_NAMES: &[&str] = &[
    "customer",
    "valued customer",
    "cardmember",
    "card member",
    "cardholder",
    "card holder",
    "member",
    "sir",
    "madam",
    "sir madam",
];

/// Post-processing applied to a capture before it becomes a field value.
#[derive(Clone, Copy)]
pub enum Normalizer {
    /// Collapse internal whitespace; reject empty or generic names.
    Name,
    /// Keep the trailing four digits; reject fewer than four.
    LastFour,
    /// Keep the textual date, trimmed.
    Date,
    /// Strip currency markers and enclosing punctuation, keep separators.
    Amount,
    /// Caller-supplied normalization.
    Custom(fn(&str) -> Option<String>),
}

impl Normalizer {
    /// The normalizer built-in rules use for a field.
    pub fn for_field(field: Field) -> Self {
        match field {
            Field::CardHolder => Normalizer::Name,
            Field::LastFourDigits => Normalizer::LastFour,
            Field::BillingCycle | Field::PaymentDueDate => Normalizer::Date,
            Field::TotalAmountDue => Normalizer::Amount,
        }
    }

    /// Normalize a raw capture.
    pub fn apply(&self, raw: &str) -> Option<String> {
        match self {
            Normalizer::Name => name(raw),
            Normalizer::LastFour => last_four(raw),
            Normalizer::Date => date(raw),
            Normalizer::Amount => amount(raw),
            Normalizer::Custom(f) => f(raw)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty()),
        }
    }
}

impl fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Normalizer::Name => f.write_str("Name"),
            Normalizer::LastFour => f.write_str("LastFour"),
            Normalizer::Date => f.write_str("Date"),
            Normalizer::Amount => f.write_str("Amount"),
            Normalizer::Custom(_) => f.write_str("Custom"),
        }
    }
}

/// Trim and replace every whitespace run with a single space.
pub fn collapse_whitespace(s: &str) -> String {
    WHITESPACE.replace_all(s.trim(), " ").into_owned()
}

/// Card holder names.
pub fn name(raw: &str) -> Option<String> {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || matches!(c, ',' | ':' | ';'));
    let value = collapse_whitespace(trimmed);

    if !value.chars().any(char::is_alphabetic) {
        return None;
    }

    let lowered = value.to_lowercase().replace('/', " ");
    if GENERIC_NAMES.contains(&lowered.as_str()) {
        return None;
    }

    Some(value)
}

/// Last four card digits.
pub fn last_four(raw: &str) -> Option<String> {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < 4 {
        return None;
    }
    Some(digits[digits.len() - 4..].iter().collect())
}

/// Dates and date ranges, whitespace collapsed but otherwise as written.
pub fn date(raw: &str) -> Option<String> {
    let value = collapse_whitespace(raw);
    (!value.is_empty()).then_some(value)
}

/// Amounts.
pub fn amount(raw: &str) -> Option<String> {
    let without_marker = CURRENCY_MARKER.replace_all(raw, "");
    let value = without_marker.trim_matches(|c: char| !c.is_ascii_digit());

    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit() || c == ',' || c == '.') {
        return None;
    }

    Some(value.to_string())
}

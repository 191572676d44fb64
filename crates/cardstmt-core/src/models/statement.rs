//! Statement extraction results.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::statement::rules::values::{parse_amount, parse_billing_cycle, parse_statement_date};

/// Issuer name reported when no registered detector matches.
pub const UNKNOWN_ISSUER: &str = "unknown";

/// One of the five extracted statement fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Field {
    /// Name of the card holder.
    #[serde(rename = "card_holder")]
    CardHolder,
    /// Last four digits of the card number.
    #[serde(rename = "last_4_digits")]
    LastFourDigits,
    /// Statement period, e.g. `01 Sep 2025 - 30 Sep 2025`.
    #[serde(rename = "billing_cycle")]
    BillingCycle,
    /// Payment due date.
    #[serde(rename = "payment_due_date")]
    PaymentDueDate,
    /// Total amount due, without currency marker.
    #[serde(rename = "total_amount_due")]
    TotalAmountDue,
}

impl Field {
    /// All fields in output order.
    pub const ALL: [Field; 5] = [
        Field::CardHolder,
        Field::LastFourDigits,
        Field::BillingCycle,
        Field::PaymentDueDate,
        Field::TotalAmountDue,
    ];

    /// Key used in the flat output mapping.
    pub fn key(self) -> &'static str {
        match self {
            Field::CardHolder => "card_holder",
            Field::LastFourDigits => "last_4_digits",
            Field::BillingCycle => "billing_cycle",
            Field::PaymentDueDate => "payment_due_date",
            Field::TotalAmountDue => "total_amount_due",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// The five field slots for one statement.
///
/// A slot is either `None` or holds non-empty normalized text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSet {
    pub card_holder: Option<String>,
    pub last_4_digits: Option<String>,
    pub billing_cycle: Option<String>,
    pub payment_due_date: Option<String>,
    pub total_amount_due: Option<String>,
}

impl FieldSet {
    /// Value of a field, if present.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Replace a field's value.
    pub fn set(&mut self, field: Field, value: Option<String>) {
        *self.slot_mut(field) = value;
    }

    /// Iterate all fields in output order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, Option<&str>)> + '_ {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }

    /// Number of present fields.
    pub fn extracted_count(&self) -> usize {
        self.iter().filter(|(_, value)| value.is_some()).count()
    }

    /// Fields with no value.
    pub fn missing_fields(&self) -> Vec<Field> {
        self.iter()
            .filter(|(_, value)| value.is_none())
            .map(|(field, _)| field)
            .collect()
    }

    /// All five fields present.
    pub fn is_complete(&self) -> bool {
        self.extracted_count() == Field::ALL.len()
    }

    /// No field present.
    pub fn is_empty(&self) -> bool {
        self.extracted_count() == 0
    }

    /// Total amount due as a decimal.
    pub fn amount_due_value(&self) -> Option<Decimal> {
        self.total_amount_due.as_deref().and_then(parse_amount)
    }

    /// Payment due date as a calendar date.
    pub fn due_date_value(&self) -> Option<NaiveDate> {
        self.payment_due_date.as_deref().and_then(parse_statement_date)
    }

    /// Billing cycle as a start/end pair.
    pub fn billing_period(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.billing_cycle.as_deref().and_then(parse_billing_cycle)
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::CardHolder => &self.card_holder,
            Field::LastFourDigits => &self.last_4_digits,
            Field::BillingCycle => &self.billing_cycle,
            Field::PaymentDueDate => &self.payment_due_date,
            Field::TotalAmountDue => &self.total_amount_due,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::CardHolder => &mut self.card_holder,
            Field::LastFourDigits => &mut self.last_4_digits,
            Field::BillingCycle => &mut self.billing_cycle,
            Field::PaymentDueDate => &mut self.payment_due_date,
            Field::TotalAmountDue => &mut self.total_amount_due,
        }
    }
}

/// Outcome of extracting one statement.
///
/// Serializes to a flat mapping of `issuer` plus the five field keys; absent
/// fields are written as `null`, never omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Detected issuer name, or [`UNKNOWN_ISSUER`].
    pub issuer: String,

    /// Extracted fields.
    #[serde(flatten)]
    pub fields: FieldSet,
}

impl ExtractionResult {
    /// Result for a recognised issuer.
    pub fn new(issuer: impl Into<String>, fields: FieldSet) -> Self {
        Self {
            issuer: issuer.into(),
            fields,
        }
    }

    /// Result for text no detector recognised.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_ISSUER, FieldSet::default())
    }

    /// No issuer was detected.
    pub fn is_unknown(&self) -> bool {
        self.issuer == UNKNOWN_ISSUER
    }

    /// Issuer detected and all five fields present.
    pub fn is_complete(&self) -> bool {
        !self.is_unknown() && self.fields.is_complete()
    }

    /// Issuer detected but not a single field matched, which usually means
    /// the issuer changed its statement layout.
    pub fn is_format_drift(&self) -> bool {
        !self.is_unknown() && self.fields.is_empty()
    }

    /// Fields with no value.
    pub fn missing_fields(&self) -> Vec<Field> {
        self.fields.missing_fields()
    }

    /// Number of present fields.
    pub fn extracted_count(&self) -> usize {
        self.fields.extracted_count()
    }
}

impl Default for ExtractionResult {
    fn default() -> Self {
        Self::unknown()
    }
}

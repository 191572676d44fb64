//! Aggregation over many extraction results.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use super::statement::{ExtractionResult, Field};

/// Counts and totals for one issuer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IssuerSummary {
    /// Statements attributed to this issuer.
    pub statements: usize,
    /// Statements with all five fields present.
    pub complete: usize,
    /// Sum of every parseable total amount due.
    pub total_amount_due: Decimal,
    /// Present amounts that could not be read as a number.
    pub unparsed_amounts: usize,
    /// How often each field was absent.
    pub missing: BTreeMap<Field, usize>,
}

/// Summary of a batch of statements.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchSummary {
    /// Documents seen.
    pub documents: usize,
    /// Issuer detected and all fields present.
    pub complete: usize,
    /// Issuer detected but at least one field absent.
    pub partial: usize,
    /// No issuer detected.
    pub unknown: usize,
    /// Issuer detected and no field present.
    pub format_drift: usize,
    /// Per-issuer breakdown, keyed by issuer name.
    pub issuers: BTreeMap<String, IssuerSummary>,
}

impl BatchSummary {
    /// Summarise a set of results.
    pub fn from_results<'a>(results: impl IntoIterator<Item = &'a ExtractionResult>) -> Self {
        let mut summary = Self::default();
        for result in results {
            summary.add(result);
        }
        summary
    }

    /// Fold one more result into the summary.
    pub fn add(&mut self, result: &ExtractionResult) {
        self.documents += 1;

        if result.is_unknown() {
            self.unknown += 1;
            return;
        }

        if result.is_complete() {
            self.complete += 1;
        } else {
            self.partial += 1;
        }
        if result.is_format_drift() {
            self.format_drift += 1;
        }

        let issuer = self.issuers.entry(result.issuer.clone()).or_default();
        issuer.statements += 1;
        if result.is_complete() {
            issuer.complete += 1;
        }

        for field in result.missing_fields() {
            *issuer.missing.entry(field).or_insert(0) += 1;
        }

        if let Some(raw) = result.fields.get(Field::TotalAmountDue) {
            match result.fields.amount_due_value() {
                Some(amount) => issuer.total_amount_due += amount,
                None => {
                    debug!("Could not read amount {:?} for {}", raw, result.issuer);
                    issuer.unparsed_amounts += 1;
                }
            }
        }
    }

    /// Share of detected statements that were complete, in `0.0..=1.0`.
    pub fn completion_rate(&self) -> f32 {
        let detected = self.complete + self.partial;
        if detected == 0 {
            return 0.0;
        }
        self.complete as f32 / detected as f32
    }
}

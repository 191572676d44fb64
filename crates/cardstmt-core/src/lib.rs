//! Core library for credit card statement extraction.
//!
//! This crate provides:
//! - Issuer detection by keyword over raw statement text
//! - Rule-based extraction of five statement fields (card holder, last four
//!   digits, billing cycle, payment due date, total amount due)
//! - Built-in pattern tables for HDFC Bank, ICICI Bank, SBI Card, Axis Bank
//!   and American Express
//! - Per-rule diagnostics and batch summaries
//!
//! Turning a document into text is left to a [`TextSource`] implementation.

pub mod error;
pub mod models;
pub mod statement;

pub use error::{Result, StatementError};
pub use models::config::StatementConfig;
pub use models::statement::{ExtractionResult, Field, FieldSet, UNKNOWN_ISSUER};
pub use models::summary::{BatchSummary, IssuerSummary};
pub use statement::{
    Capture, Detect, ExtractionReport, FieldExtractor, FieldTrace, IssuerProfile, IssuerRegistry,
    KeywordDetector, Normalizer, PatternRule, RuleAttempt, RuleOutcome, RuleSet, RuleSpec,
    SourcedExtraction, StatementParser,
};

/// Re-export text source types.
pub use cardstmt_source::{AcquiredText, FallbackChain, SourceError, StaticText, TextOrigin, TextSource};

//! Statement detection and field extraction.

pub mod issuers;
mod parser;
mod registry;
pub mod rules;

pub use parser::{ExtractionReport, SourcedExtraction, StatementParser};
pub use registry::{Detect, IssuerProfile, IssuerProfileBuilder, IssuerRegistry, KeywordDetector, RegistryBuilder};
pub use rules::{
    Capture, FieldExtractor, FieldTrace, Normalizer, PatternRule, RuleAttempt, RuleOutcome, RuleSet, RuleSpec,
};

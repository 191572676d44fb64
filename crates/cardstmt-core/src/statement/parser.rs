//! Statement parser: detection, dispatch and result assembly.

use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, warn};

use cardstmt_source::{FallbackChain, TextOrigin, TextSource, meaningful_len};

use crate::error::Result;
use crate::models::config::{StatementConfig, TextConfig};
use crate::models::statement::ExtractionResult;

use super::registry::{IssuerProfile, IssuerRegistry};
use super::rules::{FieldExtractor, FieldTrace};

/// Extraction result with the rule-by-rule account behind it.
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionReport {
    /// The result `parse` returns for the same text.
    pub result: ExtractionResult,
    /// Every issuer whose detector accepted the text, in priority order.
    pub candidates: Vec<String>,
    /// Per-field traces for the detected issuer; empty when unknown.
    pub fields: Vec<FieldTrace>,
}

impl ExtractionReport {
    /// More than one issuer matched; the first registered one was used.
    pub fn is_ambiguous(&self) -> bool {
        self.candidates.len() > 1
    }
}

/// Extraction result together with where its text came from.
#[derive(Debug, Clone, Serialize)]
pub struct SourcedExtraction {
    pub result: ExtractionResult,
    pub origin: TextOrigin,
    /// Trimmed length of the text that was parsed.
    pub text_length: usize,
}

/// Extracts statement fields from text using an issuer registry.
#[derive(Debug, Clone)]
pub struct StatementParser {
    registry: Arc<IssuerRegistry>,
    text: TextConfig,
}

impl StatementParser {
    /// Create a parser over the given registry with default text settings.
    pub fn new(registry: Arc<IssuerRegistry>) -> Self {
        Self {
            registry,
            text: TextConfig::default(),
        }
    }

    /// Create a parser from configuration.
    pub fn from_config(config: &StatementConfig) -> Result<Self> {
        config.validate()?;

        let registry = if config.registry.issuers.is_empty() {
            IssuerRegistry::builtin()
        } else {
            Arc::new(IssuerRegistry::from_config(&config.registry)?)
        };

        Ok(Self::new(registry).with_text_config(config.text.clone()))
    }

    /// Set text acquisition settings.
    pub fn with_text_config(mut self, text: TextConfig) -> Self {
        self.text = text;
        self
    }

    pub fn registry(&self) -> &IssuerRegistry {
        &self.registry
    }

    pub fn text_config(&self) -> &TextConfig {
        &self.text
    }

    /// Issuer the text would be attributed to.
    pub fn detect(&self, text: &str) -> Option<&IssuerProfile> {
        self.registry.detect(text)
    }

    /// Detect the issuer and extract its fields.
    ///
    /// Never fails: unrecognised text yields an `unknown` result with every
    /// field absent.
    pub fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();
        debug!("Parsing statement from {} characters of text", text.len());

        let Some(profile) = self.registry.detect(text) else {
            info!("No registered issuer recognised the statement");
            return ExtractionResult::unknown();
        };

        let result = ExtractionResult::new(profile.name(), profile.extract(text));

        if result.is_format_drift() {
            warn!(
                "Detected {} but no field matched; the statement layout may have changed",
                result.issuer
            );
        } else if !result.is_complete() {
            debug!("Missing fields for {}: {:?}", result.issuer, result.missing_fields());
        }

        info!(
            "Extracted {}/5 fields for {} in {:?}",
            result.extracted_count(),
            result.issuer,
            start.elapsed()
        );

        result
    }

    /// Like [`parse`](Self::parse), also reporting candidate issuers and
    /// every rule attempted.
    pub fn explain(&self, text: &str) -> ExtractionReport {
        let candidates: Vec<String> = self
            .registry
            .candidates(text)
            .into_iter()
            .map(|p| p.name().to_string())
            .collect();

        if candidates.len() > 1 {
            debug!("Ambiguous statement, candidates: {:?}", candidates);
        }

        let Some(profile) = self.registry.detect(text) else {
            return ExtractionReport {
                result: ExtractionResult::unknown(),
                candidates,
                fields: Vec::new(),
            };
        };

        let fields = profile.rules().trace(text);
        let mut result = ExtractionResult::new(profile.name(), Default::default());
        for trace in &fields {
            result.fields.set(trace.field, trace.value.clone());
        }

        ExtractionReport {
            result,
            candidates,
            fields,
        }
    }

    /// Acquire text from a primary source, falling back to a secondary
    /// (OCR) source when configured and the primary text is too short, then
    /// parse it.
    pub fn parse_source(&self, primary: &dyn TextSource, fallback: Option<&dyn TextSource>) -> SourcedExtraction {
        let mut chain = FallbackChain::new(primary).with_min_text_length(self.text.min_text_length);
        if self.text.ocr_fallback {
            if let Some(fallback) = fallback {
                chain = chain.with_fallback(fallback);
            }
        }

        let acquired = chain.acquire();
        let text_length = meaningful_len(&acquired.text);
        let result = self.parse(&acquired.text);

        SourcedExtraction {
            result,
            origin: acquired.origin,
            text_length,
        }
    }
}

impl Default for StatementParser {
    fn default() -> Self {
        Self::new(IssuerRegistry::builtin())
    }
}

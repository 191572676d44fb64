//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};

use cardstmt_source::DEFAULT_MIN_TEXT_LENGTH;

use crate::error::{Result, StatementError};

/// Main configuration for cardstmt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementConfig {
    /// Issuer registry configuration.
    pub registry: RegistryConfig,

    /// Text acquisition configuration.
    pub text: TextConfig,
}

/// Which built-in issuers to register.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Built-in issuer names in priority order. Empty enables all of them in
    /// their default order.
    pub issuers: Vec<String>,
}

/// Text acquisition configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Consult the fallback (OCR) source when primary text is insufficient.
    pub ocr_fallback: bool,

    /// Minimum trimmed length for primary text to count as sufficient.
    pub min_text_length: usize,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            ocr_fallback: false,
            min_text_length: DEFAULT_MIN_TEXT_LENGTH,
        }
    }
}

impl StatementConfig {
    /// Parse configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to pretty JSON.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check settings that deserialize fine but cannot work.
    pub fn validate(&self) -> Result<()> {
        if self.text.ocr_fallback && self.text.min_text_length == 0 {
            return Err(StatementError::Config(
                "ocr_fallback is enabled but min_text_length is 0, so the fallback never runs"
                    .to_string(),
            ));
        }
        if self.registry.issuers.iter().any(|name| name.trim().is_empty()) {
            return Err(StatementError::Config("blank issuer name in registry.issuers".to_string()));
        }
        Ok(())
    }
}

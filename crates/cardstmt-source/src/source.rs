//! The text source trait and an in-memory implementation.

use crate::Result;

/// Something that can produce the raw text of one statement document.
///
/// Implementations own their document and any timeout policy; the engine
/// only sees the resulting string.
pub trait TextSource: Send + Sync {
    /// Short name used in logs (e.g. `"pdf-text"`, `"ocr"`).
    fn name(&self) -> &str;

    /// Produce the document text. Empty text is a valid answer.
    fn extract_text(&self) -> Result<String>;
}

/// A source that hands back text it already holds.
#[derive(Debug, Clone)]
pub struct StaticText {
    name: String,
    text: String,
}

impl StaticText {
    /// Create a named in-memory source.
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }

    /// The held text.
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl TextSource for StaticText {
    fn name(&self) -> &str {
        &self.name
    }

    fn extract_text(&self) -> Result<String> {
        Ok(self.text.clone())
    }
}

//! Primary text extraction with an optional fallback source.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::TextSource;

/// Primary text shorter than this (after trimming) is treated as a likely
/// image-only document.
pub const DEFAULT_MIN_TEXT_LENGTH: usize = 100;

/// Which source the acquired text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TextOrigin {
    /// The primary source.
    Primary,
    /// The fallback source (typically OCR).
    Fallback,
    /// Every consulted source failed; the text is empty.
    Unavailable,
}

/// Text obtained for one document.
#[derive(Debug, Clone)]
pub struct AcquiredText {
    /// The text, possibly empty.
    pub text: String,
    /// Where it came from.
    pub origin: TextOrigin,
}

impl AcquiredText {
    fn unavailable() -> Self {
        Self {
            text: String::new(),
            origin: TextOrigin::Unavailable,
        }
    }
}

/// Number of characters left after trimming surrounding whitespace.
pub fn meaningful_len(text: &str) -> usize {
    text.trim().chars().count()
}

/// Acquisition policy: ask the primary source, and only when its text is
/// insufficient ask the fallback.
///
/// Acquisition never fails. A source error is logged and counts as no text,
/// so the engine downstream always runs.
pub struct FallbackChain<'a> {
    primary: &'a dyn TextSource,
    fallback: Option<&'a dyn TextSource>,
    min_text_length: usize,
}

impl<'a> FallbackChain<'a> {
    /// Chain with only a primary source.
    pub fn new(primary: &'a dyn TextSource) -> Self {
        Self {
            primary,
            fallback: None,
            min_text_length: DEFAULT_MIN_TEXT_LENGTH,
        }
    }

    /// Set the fallback source.
    pub fn with_fallback(mut self, fallback: &'a dyn TextSource) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Set the sufficiency threshold for primary text.
    pub fn with_min_text_length(mut self, min_text_length: usize) -> Self {
        self.min_text_length = min_text_length;
        self
    }

    /// Run the chain.
    pub fn acquire(&self) -> AcquiredText {
        let primary = read(self.primary);
        let primary_len = primary.as_deref().map_or(0, meaningful_len);

        if primary.is_some() && primary_len >= self.min_text_length {
            return AcquiredText {
                text: primary.unwrap_or_default(),
                origin: TextOrigin::Primary,
            };
        }

        let Some(fallback) = self.fallback else {
            return match primary {
                Some(text) => AcquiredText {
                    text,
                    origin: TextOrigin::Primary,
                },
                None => AcquiredText::unavailable(),
            };
        };

        info!(
            "{} yielded {} chars (< {}), trying {}",
            self.primary.name(),
            primary_len,
            self.min_text_length,
            fallback.name()
        );

        match (primary, read(fallback)) {
            (Some(p), Some(f)) if meaningful_len(&f) <= primary_len => {
                debug!("{} did not improve on {}", fallback.name(), self.primary.name());
                AcquiredText {
                    text: p,
                    origin: TextOrigin::Primary,
                }
            }
            (_, Some(f)) => AcquiredText {
                text: f,
                origin: TextOrigin::Fallback,
            },
            (Some(p), None) => AcquiredText {
                text: p,
                origin: TextOrigin::Primary,
            },
            (None, None) => AcquiredText::unavailable(),
        }
    }
}

fn read(source: &dyn TextSource) -> Option<String> {
    match source.extract_text() {
        Ok(text) => {
            debug!("{} produced {} bytes", source.name(), text.len());
            Some(text)
        }
        Err(e) => {
            warn!("{} failed: {}", source.name(), e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SourceError, StaticText};
    use pretty_assertions::assert_eq;

    struct Broken;

    impl TextSource for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn extract_text(&self) -> crate::Result<String> {
            Err(SourceError::Unavailable("no engine".to_string()))
        }
    }

    fn long_text() -> String {
        "HDFC Bank Credit Card Statement ".repeat(5)
    }

    #[test]
    fn test_sufficient_primary_skips_fallback() {
        let primary = StaticText::new("pdf", long_text());
        let ocr = StaticText::new("ocr", long_text() + "extra");

        let acquired = FallbackChain::new(&primary).with_fallback(&ocr).acquire();

        assert_eq!(acquired.origin, TextOrigin::Primary);
        assert_eq!(acquired.text, long_text());
    }

    #[test]
    fn test_short_primary_uses_longer_fallback() {
        let primary = StaticText::new("pdf", "  \n ");
        let ocr = StaticText::new("ocr", long_text());

        let acquired = FallbackChain::new(&primary).with_fallback(&ocr).acquire();

        assert_eq!(acquired.origin, TextOrigin::Fallback);
        assert_eq!(acquired.text, long_text());
    }

    #[test]
    fn test_fallback_not_longer_keeps_primary() {
        let primary = StaticText::new("pdf", "HDFC Bank");
        let ocr = StaticText::new("ocr", "HDFC");

        let acquired = FallbackChain::new(&primary).with_fallback(&ocr).acquire();

        assert_eq!(acquired.origin, TextOrigin::Primary);
        assert_eq!(acquired.text, "HDFC Bank");
    }

    #[test]
    fn test_failing_primary_falls_back() {
        let ocr = StaticText::new("ocr", "Axis Bank");

        let acquired = FallbackChain::new(&Broken).with_fallback(&ocr).acquire();

        assert_eq!(acquired.origin, TextOrigin::Fallback);
        assert_eq!(acquired.text, "Axis Bank");
    }

    #[test]
    fn test_all_sources_failing_is_unavailable() {
        let acquired = FallbackChain::new(&Broken).with_fallback(&Broken).acquire();

        assert_eq!(acquired.origin, TextOrigin::Unavailable);
        assert!(acquired.text.is_empty());
    }

    #[test]
    fn test_short_primary_without_fallback_is_kept() {
        let primary = StaticText::new("pdf", "short");

        let acquired = FallbackChain::new(&primary).acquire();

        assert_eq!(acquired.origin, TextOrigin::Primary);
        assert_eq!(acquired.text, "short");
    }

    #[test]
    fn test_threshold_is_configurable() {
        let primary = StaticText::new("pdf", "HDFC Bank");
        let ocr = StaticText::new("ocr", long_text());

        let acquired = FallbackChain::new(&primary)
            .with_fallback(&ocr)
            .with_min_text_length(5)
            .acquire();

        assert_eq!(acquired.origin, TextOrigin::Primary);
    }

    #[test]
    fn test_meaningful_len_ignores_surrounding_whitespace() {
        assert_eq!(meaningful_len("  ab c \n"), 4);
        assert_eq!(meaningful_len(""), 0);
        assert_eq!(meaningful_len("₹10"), 3);
    }
}

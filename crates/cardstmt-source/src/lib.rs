//! Text source abstraction layer for cardstmt.
//!
//! The statement engine never reads documents itself. Whatever turns a
//! statement into text (an embedded-text extractor, an OCR pipeline, a test
//! fixture) implements [`TextSource`], and [`FallbackChain`] decides when a
//! secondary source such as OCR is worth consulting.

mod chain;
mod error;
mod source;

pub use chain::{AcquiredText, DEFAULT_MIN_TEXT_LENGTH, FallbackChain, TextOrigin, meaningful_len};
pub use error::SourceError;
pub use source::{StaticText, TextSource};

/// Result type for text source operations.
pub type Result<T> = std::result::Result<T, SourceError>;

//! Error types for the text source layer.

use std::time::Duration;

use thiserror::Error;

/// Errors a text source can report.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The source cannot run at all (missing models, missing tooling).
    #[error("text source unavailable: {0}")]
    Unavailable(String),

    /// The source ran but failed to produce text.
    #[error("text extraction failed: {0}")]
    Extraction(String),

    /// The source gave up after its own time bound.
    #[error("text extraction timed out after {0:?}")]
    Timeout(Duration),
}

//! Error types for the cardstmt-core library.
//!
//! Extraction itself never fails; these errors come from building registries
//! and loading configuration.

use thiserror::Error;

use crate::models::statement::Field;

/// Main error type for the cardstmt library.
#[derive(Error, Debug)]
pub enum StatementError {
    /// A pattern rule did not compile.
    #[error("invalid pattern for {issuer} {field}: {source}")]
    InvalidPattern {
        issuer: String,
        field: Field,
        #[source]
        source: regex::Error,
    },

    /// A rule reads a capture group its pattern does not have.
    #[error("rule for {issuer} {field} reads group {group}, pattern has {available}")]
    InvalidCapture {
        issuer: String,
        field: Field,
        group: usize,
        available: usize,
    },

    /// An issuer profile has no rule for a field.
    #[error("issuer {issuer} has no rules for {field}")]
    IncompleteRules { issuer: String, field: Field },

    /// Two issuer profiles share a name.
    #[error("issuer already registered: {0}")]
    DuplicateIssuer(String),

    /// Configuration named an issuer that is not built in.
    #[error("unknown built-in issuer: {0}")]
    UnknownIssuer(String),

    /// A registry was built without any issuer.
    #[error("issuer registry is empty")]
    EmptyRegistry,

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the cardstmt library.
pub type Result<T> = std::result::Result<T, StatementError>;

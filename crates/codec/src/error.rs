//! Codec error types

use thiserror::Error;

/// Codec error types
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CodecError {
    /// Tag outside the closed media type set
    #[error("Unknown media type: {0}")]
    UnknownMediaType(String),

    /// Payload shape does not match what the codec encodes
    #[error("Type mismatch: {codec} codec expects {expected} data, got {actual}")]
    TypeMismatch {
        /// Codec family name
        codec: &'static str,
        /// Expected payload kind
        expected: &'static str,
        /// Actual payload kind
        actual: &'static str,
    },

    /// Bytes are not valid UTF-8
    #[error("Invalid UTF-8: {0}")]
    InvalidUtf8(String),

    /// Bytes or value are not valid JSON
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// Text is not valid base64
    #[error("Invalid base64: {0}")]
    InvalidBase64(String),
}

/// Result type for codec operations
pub type CodecResult<T> = std::result::Result<T, CodecError>;

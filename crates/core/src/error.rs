//! Validation error types

use thiserror::Error;

/// A single schema violation at a field path
///
/// Paths use dotted field names and bracketed indices, e.g.
/// `renderable[0].media_type`. The root value is `$`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Location of the offending value
    pub path: String,
    /// What is wrong with it
    pub message: String,
}

impl FieldError {
    /// Create a new field error
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Input does not match the local or remote result schema
///
/// Carries every violation found, not just the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("validation failed: {}", join_errors(.errors))]
pub struct ValidationError {
    /// All violations, in document order
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    /// Create from a list of field errors
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// Create with a single field error
    pub fn single(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError::new(path, message)],
        }
    }

    /// Whether any error was reported at `path`
    pub fn has_path(&self, path: &str) -> bool {
        self.errors.iter().any(|e| e.path == path)
    }
}

fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

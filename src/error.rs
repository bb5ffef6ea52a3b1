//! Unified error types for resultbundle.
//!
//! This module provides a single error type that wraps the errors of the
//! codec, archive and storage layers and presents a consistent interface to
//! users.

use resultbundle_archive::{ArchiveError, StorageError};
use resultbundle_codec::CodecError;
use resultbundle_core::{Category, ValidationError};
use thiserror::Error;

/// All resultbundle errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Input does not match the result schema
    #[error("validation error: {0}")]
    Validation(ValidationError),

    /// Media type tag outside the closed set
    #[error("unknown media type: {0}")]
    UnknownMediaType(String),

    /// Output data could not be encoded or decoded
    #[error("codec error at {context}: {source}")]
    Codec {
        /// Where the failure happened (category/title or member name)
        context: String,
        /// Underlying codec error
        #[source]
        source: CodecError,
    },

    /// Manifest lists a filename the archive does not contain
    #[error("missing archive member: {category}/{filename}")]
    MissingArchiveMember {
        /// Category of the archive
        category: Category,
        /// Missing member name
        filename: String,
    },

    /// Manifest lists a category whose archive is unavailable
    #[error("missing archive for {category}: {ziplocation}")]
    MissingArchive {
        /// Category of the archive
        category: Category,
        /// Expected storage key
        ziplocation: String,
    },

    /// Object not found in storage
    #[error("not found: {0}")]
    NotFound(String),

    /// Zip container error
    #[error("archive error: {0}")]
    Archive(String),

    /// Storage gateway error
    #[error("storage error: {0}")]
    Storage(StorageError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Invalid configuration
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for resultbundle operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check if this is a schema validation error.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }

    /// Check if this is a not-found error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if an archive or archive member is missing.
    pub fn is_missing_archive(&self) -> bool {
        matches!(
            self,
            Error::MissingArchive { .. } | Error::MissingArchiveMember { .. }
        )
    }

    /// Check if this is a codec error (including unknown media types).
    pub fn is_codec(&self) -> bool {
        matches!(self, Error::Codec { .. } | Error::UnknownMediaType(_))
    }

    /// Validation field errors, if this is a validation error.
    pub fn field_errors(&self) -> &[resultbundle_core::FieldError] {
        match self {
            Error::Validation(e) => &e.errors,
            _ => &[],
        }
    }

    pub(crate) fn codec(context: impl Into<String>, source: CodecError) -> Self {
        match source {
            CodecError::UnknownMediaType(tag) => Error::UnknownMediaType(tag),
            source => Error::Codec {
                context: context.into(),
                source,
            },
        }
    }
}

impl From<ValidationError> for Error {
    fn from(e: ValidationError) -> Self {
        Error::Validation(e)
    }
}

impl From<CodecError> for Error {
    fn from(e: CodecError) -> Self {
        Error::codec("codec", e)
    }
}

impl From<StorageError> for Error {
    fn from(e: StorageError) -> Self {
        match e {
            StorageError::NotFound { key } => Error::NotFound(key),
            other => Error::Storage(other),
        }
    }
}

// Convert from archive errors, keeping the category context
impl From<ArchiveError> for Error {
    fn from(e: ArchiveError) -> Self {
        match e {
            ArchiveError::Validation(v) => Error::Validation(v),
            ArchiveError::Encode {
                category,
                title,
                source,
            } => Error::codec(format!("{}/{}", category, title), source),
            ArchiveError::Decode {
                category,
                filename,
                source,
            } => Error::codec(format!("{}/{}", category, filename), source),
            ArchiveError::MissingArchiveMember { category, filename } => {
                Error::MissingArchiveMember { category, filename }
            }
            ArchiveError::MissingArchive {
                category,
                ziplocation,
            } => Error::MissingArchive {
                category,
                ziplocation,
            },
            ArchiveError::Archive(msg) => Error::Archive(msg),
            ArchiveError::Storage(s) => s.into(),
            ArchiveError::Io(io) => Error::Io(io),
        }
    }
}

// Convert from serde_json errors
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

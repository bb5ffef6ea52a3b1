//! Archive error types

use crate::gateway::StorageError;
use resultbundle_codec::CodecError;
use resultbundle_core::{Category, ValidationError};
use thiserror::Error;

/// Errors from packing and unpacking category archives
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Input does not match the result schema
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// An output's data could not be encoded
    #[error("cannot encode {category} output {title:?}: {source}")]
    Encode {
        /// Category of the output
        category: Category,
        /// Title of the output
        title: String,
        /// Underlying codec error
        #[source]
        source: CodecError,
    },

    /// An archive member could not be decoded
    #[error("cannot decode {category} member {filename:?}: {source}")]
    Decode {
        /// Category of the archive
        category: Category,
        /// Member name
        filename: String,
        /// Underlying codec error
        #[source]
        source: CodecError,
    },

    /// Manifest references a member the archive does not contain
    #[error("{category} archive has no member {filename:?}")]
    MissingArchiveMember {
        /// Category of the archive
        category: Category,
        /// Missing member name
        filename: String,
    },

    /// Manifest lists a category but no archive bytes were supplied
    #[error("no archive supplied for {category} ({ziplocation})")]
    MissingArchive {
        /// Category without archive bytes
        category: Category,
        /// Storage key the archive is expected at
        ziplocation: String,
    },

    /// Zip container could not be read or written
    #[error("archive error: {0}")]
    Archive(String),

    /// Storage gateway failure
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// I/O error while building an archive in memory
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ArchiveError {
    /// Create an archive error
    pub fn archive(msg: impl Into<String>) -> Self {
        ArchiveError::Archive(msg.into())
    }

    /// Create a missing-member error
    pub fn missing_member(category: Category, filename: impl Into<String>) -> Self {
        ArchiveError::MissingArchiveMember {
            category,
            filename: filename.into(),
        }
    }
}

impl From<zip::result::ZipError> for ArchiveError {
    fn from(e: zip::result::ZipError) -> Self {
        match e {
            zip::result::ZipError::Io(io) => ArchiveError::Io(io),
            other => ArchiveError::Archive(other.to_string()),
        }
    }
}

/// Result type for archive operations
pub type ArchiveResult<T> = std::result::Result<T, ArchiveError>;

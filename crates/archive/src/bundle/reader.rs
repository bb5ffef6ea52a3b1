//! Category archive reader
//!
//! Opens a zip archive held in memory and reads members by name.

use crate::error::{ArchiveError, ArchiveResult};
use std::io::{Cursor, Read};
use zip::result::ZipError;
use zip::ZipArchive;

/// Reader over one category archive
pub struct CategoryReader<'a> {
    archive: ZipArchive<Cursor<&'a [u8]>>,
    archive_len: u64,
}

impl<'a> CategoryReader<'a> {
    /// Open archive bytes
    ///
    /// Fails if the bytes are not a zip container.
    pub fn open(bytes: &'a [u8]) -> ArchiveResult<Self> {
        let archive = ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| ArchiveError::archive(format!("open: {}", e)))?;
        Ok(Self {
            archive,
            archive_len: bytes.len() as u64,
        })
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    /// Whether the archive has no members
    pub fn is_empty(&self) -> bool {
        self.archive.len() == 0
    }

    /// Member names, in central directory order
    pub fn member_names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect()
    }

    /// Read a member's bytes
    ///
    /// Returns `Ok(None)` if no member has that name.
    pub fn read_member(&mut self, name: &str) -> ArchiveResult<Option<Vec<u8>>> {
        match self.archive.by_name(name) {
            Ok(mut file) => {
                // Header sizes are untrusted; never reserve past the archive length
                let mut data = Vec::with_capacity(file.size().min(self.archive_len) as usize);
                file.read_to_end(&mut data)
                    .map_err(|e| ArchiveError::archive(format!("read {}: {}", name, e)))?;
                Ok(Some(data))
            }
            Err(ZipError::FileNotFound) => Ok(None),
            Err(e) => Err(ArchiveError::archive(format!("read {}: {}", name, e))),
        }
    }
}

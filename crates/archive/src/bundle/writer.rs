//! Category archive writer
//!
//! Builds one zip archive in memory. Member names are the manifest filenames.

use crate::bundle::types::Compression;
use crate::error::ArchiveResult;
use std::io::{Cursor, Write};
use zip::write::FileOptions;
use zip::ZipWriter;

/// In-memory zip writer for one category
pub struct CategoryWriter {
    zip: ZipWriter<Cursor<Vec<u8>>>,
    options: FileOptions,
    members: usize,
}

impl CategoryWriter {
    /// Create an empty archive
    pub fn new(compression: Compression) -> Self {
        Self {
            zip: ZipWriter::new(Cursor::new(Vec::new())),
            options: FileOptions::default().compression_method(compression.method()),
            members: 0,
        }
    }

    /// Add a member
    pub fn add_member(&mut self, name: &str, data: &[u8]) -> ArchiveResult<()> {
        self.zip.start_file(name, self.options)?;
        self.zip.write_all(data)?;
        self.members += 1;
        Ok(())
    }

    /// Number of members written so far
    pub fn member_count(&self) -> usize {
        self.members
    }

    /// Finalize the archive and return its bytes
    pub fn finish(mut self) -> ArchiveResult<Vec<u8>> {
        let cursor = self.zip.finish()?;
        Ok(cursor.into_inner())
    }
}

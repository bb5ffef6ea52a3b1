//! Category archive types

use resultbundle_core::{Category, RemoteResult};

/// File extension of category archives
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Storage key of a category archive
///
/// `{task_id}_{category}.zip`: distinct per category for one task and
/// distinct across tasks with distinct ids.
///
/// ```
/// use resultbundle_archive::ziplocation;
/// use resultbundle_core::Category;
///
/// assert_eq!(ziplocation("1868c4a7", Category::Renderable), "1868c4a7_renderable.zip");
/// ```
pub fn ziplocation(task_id: &str, category: Category) -> String {
    format!("{}_{}.{}", task_id, category.name(), ARCHIVE_EXTENSION)
}

/// Zip compression used for archive members
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Compression {
    /// No compression
    Stored,
    /// Deflate (default)
    #[default]
    Deflated,
}

impl Compression {
    pub(crate) fn method(&self) -> zip::CompressionMethod {
        match self {
            Compression::Stored => zip::CompressionMethod::Stored,
            Compression::Deflated => zip::CompressionMethod::Deflated,
        }
    }
}

/// Options for packing
#[derive(Debug, Clone, Default)]
pub struct PackOptions {
    /// Member compression
    pub compression: Compression,
}

impl PackOptions {
    /// Set the member compression
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }
}

/// Raw archive bytes per category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArchiveSet {
    renderable: Option<Vec<u8>>,
    downloadable: Option<Vec<u8>>,
}

impl ArchiveSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Archive bytes of one category
    pub fn get(&self, category: Category) -> Option<&[u8]> {
        match category {
            Category::Renderable => self.renderable.as_deref(),
            Category::Downloadable => self.downloadable.as_deref(),
        }
    }

    /// Set the archive bytes of one category
    pub fn insert(&mut self, category: Category, bytes: Vec<u8>) {
        match category {
            Category::Renderable => self.renderable = Some(bytes),
            Category::Downloadable => self.downloadable = Some(bytes),
        }
    }

    /// Builder form of [`insert`](Self::insert)
    pub fn with(mut self, category: Category, bytes: Vec<u8>) -> Self {
        self.insert(category, bytes);
        self
    }

    /// Remove and return the archive bytes of one category
    pub fn take(&mut self, category: Category) -> Option<Vec<u8>> {
        match category {
            Category::Renderable => self.renderable.take(),
            Category::Downloadable => self.downloadable.take(),
        }
    }

    /// Present archives, in pack order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[u8])> {
        Category::ALL
            .into_iter()
            .filter_map(move |c| self.get(c).map(|b| (c, b)))
    }

    /// Number of archives present
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether no archive is present
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Output of packing: the manifest plus the archive bytes it describes
#[derive(Debug, Clone, PartialEq)]
pub struct PackedResult {
    /// Manifest describing every archive member
    pub remote: RemoteResult,
    /// Archive bytes, keyed by category
    pub archives: ArchiveSet,
}

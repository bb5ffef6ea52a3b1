//! Category archives
//!
//! Every category of a packed result is one zip archive stored under its
//! `ziplocation`:
//!
//! ```text
//! <task_id>_renderable.zip
//! ├── plot.png
//! └── table stuff.html
//! <task_id>_downloadable.zip
//! └── data.csv
//! ```
//!
//! Member names equal the manifest filenames, so standard zip tools can
//! inspect an archive without the manifest.

mod reader;
mod types;
mod writer;

pub use reader::CategoryReader;
pub use types::{
    ziplocation, ArchiveSet, Compression, PackOptions, PackedResult, ARCHIVE_EXTENSION,
};
pub use writer::CategoryWriter;

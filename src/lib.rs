//! # resultbundle
//!
//! Typed packaging of task results into per-category zip archives.
//!
//! A worker produces a [`LocalResult`]: outputs with in-memory data, split
//! into `renderable` and `downloadable`. Packing encodes every output with
//! the codec of its [`MediaType`], writes one zip archive per category and
//! returns a [`RemoteResult`] manifest describing them. Unpacking reverses
//! this, either into the native shape (binary data as bytes) or the JSON
//! transport shape (binary data as base64).
//!
//! ## Quick Start
//!
//! ```
//! use resultbundle::prelude::*;
//!
//! let store = ResultStore::in_memory();
//!
//! let mut local = LocalResult::new();
//! local.push(Category::Renderable, LocalOutput::new("plot", MediaType::Png, vec![0x89u8, 0x50]));
//! local.push(Category::Downloadable, LocalOutput::new("data", MediaType::Csv, "x,y\n1,2\n"));
//!
//! let report = store.write("1868c4a7", &local)?;
//! let manifest = report.remote.downloadable.as_ref().unwrap();
//! assert_eq!(manifest.ziplocation, "1868c4a7_downloadable.zip");
//! assert_eq!(manifest.outputs[0].filename, "data.csv");
//!
//! // Only the downloadable category
//! let partial = store.read(&report.remote.only(Category::Downloadable), TransportMode::Native)?;
//! assert!(partial.renderable.is_empty());
//! # Ok::<(), resultbundle::Error>(())
//! ```
//!
//! ## Layers
//!
//! - [`resultbundle_core`]: data model and schema validation
//! - [`resultbundle_codec`]: media type codecs
//! - [`resultbundle_archive`]: packer, unpacker, gateways, screenshots
//! - this crate: [`ResultStore`], [`StoreConfig`], [`transport`] helpers

#![warn(missing_docs)]

mod config;
mod error;
mod store;

pub mod prelude;
pub mod transport;

pub use config::{StoreConfig, ENV_BUCKET, ENV_SCREENSHOTS, ENV_SCREENSHOT_BASE_URL};
pub use error::{Error, Result};
pub use store::{ResultStore, ResultStoreBuilder, WriteReport};

// Re-export the layers
pub use resultbundle_archive::{
    capture_screenshots, fetch_archives, pack, unpack, unpack_category, unpack_value,
    ziplocation, ArchivePacker, ArchiveSet, Compression, LocalDirGateway, MemoryGateway,
    PackOptions, PackedResult, RenderError, ScreenshotOutcome, ScreenshotStatus, Screenshotter,
    StorageError, StorageGateway,
};
pub use resultbundle_codec::{codec_for, get_codec, Codec, CodecError, CodecFamily, TransportMode};
pub use resultbundle_core::{
    add_screenshot_links, validate_local, validate_remote, Category, FieldError, LocalOutput,
    LocalResult, MediaType, OutputCategory, OutputId, Payload, RemoteOutput, RemoteResult,
    ValidationError,
};
pub use transport::{from_json_safe, from_json_safe_value, to_json_safe, to_json_safe_value};

//! Archive packing and unpacking for resultbundle
//!
//! Turns a [`LocalResult`](resultbundle_core::LocalResult) into one zip
//! archive per category plus a [`RemoteResult`](resultbundle_core::RemoteResult)
//! manifest, and back:
//!
//! ```
//! use resultbundle_archive::{pack, unpack};
//! use resultbundle_codec::TransportMode;
//! use resultbundle_core::{Category, LocalOutput, LocalResult, MediaType};
//!
//! let mut local = LocalResult::new();
//! local.push(Category::Downloadable, LocalOutput::new("data", MediaType::Csv, "a,b\n"));
//!
//! let packed = pack("task-1", &local).unwrap();
//! let back = unpack(&packed.remote, &packed.archives, TransportMode::Native).unwrap();
//! assert_eq!(back.without_ids(), local);
//! ```
//!
//! Archives move through a [`StorageGateway`]; screenshots of renderable
//! outputs through a [`Screenshotter`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod bundle;
pub mod error;
pub mod gateway;
pub mod packer;
pub mod screenshot;
pub mod unpacker;

pub use bundle::{ziplocation, ArchiveSet, Compression, PackOptions, PackedResult};
pub use error::{ArchiveError, ArchiveResult};
pub use gateway::{LocalDirGateway, MemoryGateway, StorageError, StorageGateway};
pub use packer::{pack, ArchivePacker};
pub use screenshot::{
    capture_screenshots, RenderError, ScreenshotOutcome, ScreenshotStatus, Screenshotter,
};
pub use unpacker::{fetch_archives, unpack, unpack_category, unpack_value};

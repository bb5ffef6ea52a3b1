//! Convenient imports for resultbundle.
//!
//! ```
//! use resultbundle::prelude::*;
//!
//! let store = ResultStore::in_memory();
//! let packed = store.pack("task", &LocalResult::new())?;
//! assert_eq!(packed.remote.categories().count(), 2);
//! # Ok::<(), resultbundle::Error>(())
//! ```

// Main entry point
pub use crate::store::{ResultStore, ResultStoreBuilder, WriteReport};
pub use crate::config::StoreConfig;

// Error handling
pub use crate::error::{Error, Result};

// Data model
pub use resultbundle_core::{
    Category, LocalOutput, LocalResult, MediaType, OutputId, Payload, RemoteOutput, RemoteResult,
};

// Decoding shape
pub use resultbundle_codec::TransportMode;

// Collaborators
pub use resultbundle_archive::{
    LocalDirGateway, MemoryGateway, RenderError, Screenshotter, StorageGateway,
};

// Transport helpers
pub use crate::transport::{from_json_safe, to_json_safe};

// Re-export serde_json for convenience
pub use serde_json::json;

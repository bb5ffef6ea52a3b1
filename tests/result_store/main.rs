//! ResultStore Test Suite
//!
//! End-to-end tests for the store facade: pack, upload, fetch, unpack.
//!
//! ## Modules
//!
//! - `write_read`: write/read cycles through memory and directory gateways
//! - `partial`: single-category reads and missing archives
//! - `schema`: raw value validation on both sides
//! - `screenshots`: capture, failure reporting and link augmentation
//! - `transport`: JSON-safe conversions
//! - `concurrency`: shared store across threads
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test --test result_store
//! cargo test --test result_store screenshots::
//! ```

use std::sync::{Arc, Once};

use resultbundle::{
    Category, LocalOutput, LocalResult, MediaType, MemoryGateway, OutputId, Payload, RemoteResult,
    RenderError, ResultStore, StoreConfig, TransportMode,
};
use serde_json::json;

pub mod partial;
pub mod schema;
pub mod screenshots;
pub mod transport;
pub mod write_read;

// =============================================================================
// SHARED TEST UTILITIES
// =============================================================================

static TRACING: Once = Once::new();

/// Install a test subscriber once per process
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Store over a shared memory gateway, so tests can inspect uploads
pub fn create_store() -> (ResultStore, Arc<MemoryGateway>) {
    init_tracing();
    let gateway = Arc::new(MemoryGateway::new());
    let store = ResultStore::builder()
        .shared_gateway(gateway.clone())
        .config(StoreConfig::new("test-bucket"))
        .build()
        .expect("Failed to build store");
    (store, gateway)
}

/// The PNG + CSV result used across the suite
pub fn png_and_csv() -> LocalResult {
    let mut local = LocalResult::new();
    local.push(
        Category::Renderable,
        LocalOutput::new("plot", MediaType::Png, PNG_HEADER.to_vec()),
    );
    local.push(
        Category::Downloadable,
        LocalOutput::new("data", MediaType::Csv, "x,y\n1,2\n3,4\n"),
    );
    local
}

/// One output of every media type
pub fn every_media_type() -> LocalResult {
    let mut local = LocalResult::new();
    for (i, mt) in MediaType::all().iter().enumerate() {
        let data = if mt.is_binary() {
            Payload::Bytes(vec![i as u8; 16])
        } else if *mt == MediaType::Bokeh {
            Payload::Json(json!({"target_id": i, "root": {"type": "Figure"}}))
        } else {
            Payload::Text(format!("output number {}", i))
        };
        let category = if i % 2 == 0 {
            Category::Renderable
        } else {
            Category::Downloadable
        };
        local.push(category, LocalOutput::new(format!("out{}", i), *mt, data));
    }
    local
}

/// First bytes of every PNG file
pub const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];

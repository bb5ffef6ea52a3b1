//! The result store facade.
//!
//! [`ResultStore`] ties packing, screenshot capture and storage together:
//! `write` packs a result, uploads both category archives and then
//! optionally captures screenshots; `read` fetches the archives named by a manifest and
//! unpacks them.

use crate::config::StoreConfig;
use crate::error::{Error, Result};
use resultbundle_archive::{
    capture_screenshots, fetch_archives, unpack, ArchivePacker, Compression, MemoryGateway,
    PackOptions, PackedResult, ScreenshotOutcome, ScreenshotStatus, Screenshotter, StorageGateway,
};
use resultbundle_codec::TransportMode;
use resultbundle_core::{
    add_screenshot_links, validate_local, validate_remote, LocalResult, RemoteResult,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Outcome of [`ResultStore::write`].
#[derive(Debug, Clone, PartialEq)]
pub struct WriteReport {
    /// Manifest of the uploaded archives
    pub remote: RemoteResult,
    /// One entry per renderable output when screenshots are enabled
    pub screenshots: Vec<ScreenshotOutcome>,
}

impl WriteReport {
    /// Screenshots that could not be rendered
    pub fn failed_screenshots(&self) -> impl Iterator<Item = &ScreenshotOutcome> {
        self.screenshots.iter().filter(|o| !o.is_stored())
    }
}

/// Packs, stores and reads back task results.
///
/// # Example
///
/// ```
/// use resultbundle::prelude::*;
///
/// let store = ResultStore::in_memory();
///
/// let mut local = LocalResult::new();
/// local.push(Category::Downloadable, LocalOutput::new("data", MediaType::Csv, "a,b\n1,2\n"));
///
/// let report = store.write("task-1", &local)?;
/// let back = store.read(&report.remote, TransportMode::Native)?;
/// assert_eq!(back.without_ids(), local);
/// # Ok::<(), resultbundle::Error>(())
/// ```
pub struct ResultStore {
    gateway: Arc<dyn StorageGateway>,
    screenshotter: Option<Arc<dyn Screenshotter>>,
    config: StoreConfig,
    packer: ArchivePacker,
}

impl ResultStore {
    /// Create a builder for store configuration.
    pub fn builder() -> ResultStoreBuilder {
        ResultStoreBuilder::new()
    }

    /// Create a store backed by a process-local [`MemoryGateway`].
    ///
    /// Screenshots are disabled. Everything is lost when the store is dropped.
    pub fn in_memory() -> Self {
        Self::from_parts(
            Arc::new(MemoryGateway::new()),
            None,
            StoreConfig::default(),
        )
    }

    fn from_parts(
        gateway: Arc<dyn StorageGateway>,
        screenshotter: Option<Arc<dyn Screenshotter>>,
        config: StoreConfig,
    ) -> Self {
        let packer = ArchivePacker::new(PackOptions::default().with_compression(config.compression));
        Self {
            gateway,
            screenshotter,
            config,
            packer,
        }
    }

    /// Store configuration.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// The storage gateway archives go through.
    pub fn gateway(&self) -> &dyn StorageGateway {
        self.gateway.as_ref()
    }

    /// Pack a result without uploading anything.
    pub fn pack(&self, task_id: &str, result: &LocalResult) -> Result<PackedResult> {
        Ok(self.packer.pack(task_id, result)?)
    }

    /// Pack a result, upload both archives, then capture screenshots if enabled.
    ///
    /// Screenshot render failures are logged and reported in the
    /// [`WriteReport`]; they never fail the write. Storage failures do. A
    /// failed screenshot upload leaves the archives already stored.
    pub fn write(&self, task_id: &str, result: &LocalResult) -> Result<WriteReport> {
        let start = Instant::now();
        let packed = self.pack(task_id, result)?;

        for (category, manifest) in packed.remote.categories() {
            let bytes = packed.archives.get(category).ok_or_else(|| Error::MissingArchive {
                category,
                ziplocation: manifest.ziplocation.clone(),
            })?;
            self.gateway.put(&manifest.ziplocation, bytes)?;
            debug!(task_id, ziplocation = %manifest.ziplocation, len = bytes.len(), "Uploaded archive");
        }

        let screenshots = match (&self.screenshotter, self.config.screenshots) {
            (Some(screenshotter), true) => {
                let outcomes =
                    capture_screenshots(&packed, screenshotter.as_ref(), self.gateway.as_ref())?;
                for outcome in &outcomes {
                    if let ScreenshotStatus::Failed(e) = &outcome.status {
                        warn!(
                            task_id,
                            id = %outcome.id,
                            title = %outcome.title,
                            error = %e,
                            "Failed to create screenshot"
                        );
                    }
                }
                outcomes
            }
            _ => Vec::new(),
        };

        info!(
            task_id,
            outputs = result.len(),
            screenshots = screenshots.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Write finished"
        );

        Ok(WriteReport {
            remote: packed.remote,
            screenshots,
        })
    }

    /// Validate a raw local result, then [`write`](Self::write) it.
    pub fn write_value(&self, task_id: &str, value: &serde_json::Value) -> Result<WriteReport> {
        let result = validate_local(value)?;
        self.write(task_id, &result)
    }

    /// Fetch and unpack every category present in the manifest.
    pub fn read(&self, remote: &RemoteResult, mode: TransportMode) -> Result<LocalResult> {
        let start = Instant::now();
        let archives = fetch_archives(remote, self.gateway.as_ref())?;
        let result = unpack(remote, &archives, mode)?;
        info!(
            outputs = result.len(),
            mode = ?mode,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Read finished"
        );
        Ok(result)
    }

    /// Validate a raw manifest, then [`read`](Self::read) it.
    pub fn read_value(&self, value: &serde_json::Value, mode: TransportMode) -> Result<LocalResult> {
        let remote = validate_remote(value)?;
        self.read(&remote, mode)
    }

    /// Copy of a manifest with screenshot links on every renderable output.
    pub fn add_screenshot_links(&self, remote: &RemoteResult) -> RemoteResult {
        remote.with_screenshot_links(&self.config.screenshot_base_url())
    }

    /// Screenshot links on a raw manifest value.
    pub fn add_screenshot_links_value(&self, value: &serde_json::Value) -> Result<serde_json::Value> {
        Ok(add_screenshot_links(value, &self.config.screenshot_base_url())?)
    }
}

impl std::fmt::Debug for ResultStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResultStore")
            .field("config", &self.config)
            .field("screenshotter", &self.screenshotter.is_some())
            .finish_non_exhaustive()
    }
}

/// Builder for a [`ResultStore`].
///
/// # Example
///
/// ```
/// use resultbundle::{MemoryGateway, ResultStore, StoreConfig};
///
/// let store = ResultStore::builder()
///     .gateway(MemoryGateway::new())
///     .config(StoreConfig::new("results"))
///     .build()
///     .unwrap();
/// assert_eq!(store.config().bucket, "results");
/// ```
#[derive(Default)]
pub struct ResultStoreBuilder {
    gateway: Option<Arc<dyn StorageGateway>>,
    screenshotter: Option<Arc<dyn Screenshotter>>,
    config: StoreConfig,
}

impl ResultStoreBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the storage gateway. Defaults to a [`MemoryGateway`].
    pub fn gateway<G: StorageGateway + 'static>(mut self, gateway: G) -> Self {
        self.gateway = Some(Arc::new(gateway));
        self
    }

    /// Set a shared storage gateway.
    pub fn shared_gateway(mut self, gateway: Arc<dyn StorageGateway>) -> Self {
        self.gateway = Some(gateway);
        self
    }

    /// Set the screenshot renderer and enable screenshot capture.
    pub fn screenshotter<S: Screenshotter + 'static>(mut self, screenshotter: S) -> Self {
        self.screenshotter = Some(Arc::new(screenshotter));
        self.config.screenshots = true;
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the zip compression.
    pub fn compression(mut self, compression: Compression) -> Self {
        self.config.compression = compression;
        self
    }

    /// Enable or disable screenshot capture.
    pub fn screenshots(mut self, enabled: bool) -> Self {
        self.config.screenshots = enabled;
        self
    }

    /// Build the store.
    ///
    /// Fails if screenshots are enabled without a screenshotter.
    pub fn build(self) -> Result<ResultStore> {
        if self.config.screenshots && self.screenshotter.is_none() {
            return Err(Error::Config(
                "screenshots enabled but no screenshotter configured".to_string(),
            ));
        }
        let gateway = self
            .gateway
            .unwrap_or_else(|| Arc::new(MemoryGateway::new()));
        Ok(ResultStore::from_parts(
            gateway,
            self.screenshotter,
            self.config,
        ))
    }
}

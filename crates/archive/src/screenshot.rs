//! Screenshot capture for renderable outputs
//!
//! The renderer itself lives outside this crate behind [`Screenshotter`].
//! [`capture_screenshots`] reads the renderable archive back in JSON
//! transport mode, renders each output and stores the PNG under
//! `{id}.png`.
//!
//! Render failures do not fail the capture. Each output gets a
//! [`ScreenshotOutcome`] and the caller decides how to report failures.
//! Gateway failures are returned as errors.

use crate::bundle::PackedResult;
use crate::error::ArchiveResult;
use crate::gateway::StorageGateway;
use crate::unpacker::unpack_category;
use resultbundle_codec::TransportMode;
use resultbundle_core::{screenshot_key, Category, LocalOutput, MediaType, OutputId};
use thiserror::Error;
use tracing::debug;

/// Renderer failure
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    /// Rendering ran and failed
    #[error("render failed: {0}")]
    Failed(String),

    /// The renderer cannot handle this media type
    #[error("cannot render {0} outputs")]
    Unsupported(MediaType),
}

/// Renders an output to PNG bytes
///
/// Outputs are passed in JSON transport form: binary data arrives as
/// base64 text.
pub trait Screenshotter: Send + Sync {
    /// Render one output
    fn render(&self, output: &LocalOutput) -> Result<Vec<u8>, RenderError>;
}

impl<F> Screenshotter for F
where
    F: Fn(&LocalOutput) -> Result<Vec<u8>, RenderError> + Send + Sync,
{
    fn render(&self, output: &LocalOutput) -> Result<Vec<u8>, RenderError> {
        self(output)
    }
}

/// What happened to one output's screenshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenshotStatus {
    /// PNG stored under `key`
    Stored {
        /// Storage key of the PNG
        key: String,
    },
    /// Renderer failed; nothing stored
    Failed(RenderError),
}

/// Per-output screenshot result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotOutcome {
    /// Output id
    pub id: OutputId,
    /// Output title
    pub title: String,
    /// Result
    pub status: ScreenshotStatus,
}

impl ScreenshotOutcome {
    /// Whether the PNG was stored
    pub fn is_stored(&self) -> bool {
        matches!(self.status, ScreenshotStatus::Stored { .. })
    }
}

/// Render and store a screenshot for every renderable output
///
/// Returns one outcome per renderable output, in manifest order. An empty
/// renderable category yields no outcomes.
pub fn capture_screenshots<S, G>(
    packed: &PackedResult,
    screenshotter: &S,
    gateway: &G,
) -> ArchiveResult<Vec<ScreenshotOutcome>>
where
    S: Screenshotter + ?Sized,
    G: StorageGateway + ?Sized,
{
    let manifest = match packed.remote.category(Category::Renderable) {
        Some(manifest) if !manifest.outputs.is_empty() => manifest,
        _ => return Ok(Vec::new()),
    };

    let outputs = unpack_category(
        Category::Renderable,
        manifest,
        packed.archives.get(Category::Renderable),
        TransportMode::Json,
    )?;

    let mut outcomes = Vec::with_capacity(outputs.len());
    for output in &outputs {
        // Packed outputs always carry an id
        let Some(id) = output.id else { continue };

        let status = match screenshotter.render(output) {
            Ok(png) => {
                let key = screenshot_key(&id);
                gateway.put(&key, &png)?;
                debug!(%id, key = %key, len = png.len(), "Stored screenshot");
                ScreenshotStatus::Stored { key }
            }
            Err(e) => ScreenshotStatus::Failed(e),
        };

        outcomes.push(ScreenshotOutcome {
            id,
            title: output.title.clone(),
            status,
        });
    }

    Ok(outcomes)
}

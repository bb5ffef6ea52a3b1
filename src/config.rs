//! Store configuration.
//!
//! Built in code with the `with_*` setters, or read from the environment:
//!
//! | Variable | Field |
//! |----------|-------|
//! | `BUCKET` | `bucket` (required) |
//! | `SCREENSHOT_BASE_URL` | `screenshot_base_url` |
//! | `RESULTBUNDLE_SCREENSHOTS` | `screenshots` (`1`/`true`/`yes`/`on` or `0`/`false`/`no`/`off`) |

use crate::error::{Error, Result};
use resultbundle_archive::Compression;

/// Environment variable holding the bucket name
pub const ENV_BUCKET: &str = "BUCKET";
/// Environment variable overriding the screenshot base URL
pub const ENV_SCREENSHOT_BASE_URL: &str = "SCREENSHOT_BASE_URL";
/// Environment variable enabling screenshot capture
pub const ENV_SCREENSHOTS: &str = "RESULTBUNDLE_SCREENSHOTS";

/// Configuration for a [`ResultStore`](crate::ResultStore).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreConfig {
    /// Bucket the archives and screenshots live in
    pub bucket: String,
    /// Base URL for screenshot links; derived from the bucket when unset
    pub screenshot_base_url: Option<String>,
    /// Zip compression for new archives
    pub compression: Compression,
    /// Capture screenshots of renderable outputs on write
    pub screenshots: bool,
}

impl StoreConfig {
    /// Config for a bucket, other fields at their defaults.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            ..Self::default()
        }
    }

    /// Read the config from process environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read the config through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let bucket = lookup(ENV_BUCKET)
            .filter(|b| !b.is_empty())
            .ok_or_else(|| Error::Config(format!("{} is not set", ENV_BUCKET)))?;

        let screenshots = match lookup(ENV_SCREENSHOTS) {
            Some(raw) => parse_flag(ENV_SCREENSHOTS, &raw)?,
            None => false,
        };

        Ok(Self {
            bucket,
            screenshot_base_url: lookup(ENV_SCREENSHOT_BASE_URL).filter(|u| !u.is_empty()),
            compression: Compression::default(),
            screenshots,
        })
    }

    /// Set the screenshot base URL
    pub fn with_screenshot_base_url(mut self, url: impl Into<String>) -> Self {
        self.screenshot_base_url = Some(url.into());
        self
    }

    /// Set the zip compression
    pub fn with_compression(mut self, compression: Compression) -> Self {
        self.compression = compression;
        self
    }

    /// Enable or disable screenshot capture
    pub fn with_screenshots(mut self, enabled: bool) -> Self {
        self.screenshots = enabled;
        self
    }

    /// Base URL screenshot links are built from.
    ///
    /// Defaults to `https://storage.googleapis.com/{bucket}/`.
    pub fn screenshot_base_url(&self) -> String {
        match &self.screenshot_base_url {
            Some(url) => url.clone(),
            None => format!("https://storage.googleapis.com/{}/", self.bucket),
        }
    }
}

fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Config(format!(
            "{} must be a boolean, got {:?}",
            name, other
        ))),
    }
}

//! Core types for resultbundle
//!
//! This crate defines the data model shared by every other crate:
//! - [`MediaType`]: the closed set of output media types
//! - [`LocalOutput`] / [`RemoteOutput`]: an output with data, or a manifest entry
//! - [`LocalResult`] / [`RemoteResult`]: outputs partitioned by [`Category`]
//! - [`schema`]: validation of raw JSON values against both result contracts

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod media_type;
pub mod output;
pub mod result;
pub mod schema;
pub mod types;

pub use error::{FieldError, ValidationError};
pub use media_type::MediaType;
pub use output::{LocalOutput, Payload, RemoteOutput};
pub use result::{
    add_screenshot_links, screenshot_key, screenshot_url, Category, LocalResult, OutputCategory,
    RemoteResult,
};
pub use schema::{validate_local, validate_remote};
pub use types::OutputId;

//! Output records
//!
//! An output exists in two forms:
//!
//! - [`LocalOutput`]: in memory, carrying its [`Payload`]
//! - [`RemoteOutput`]: a manifest entry pointing at an archive member by `filename`
//!
//! ## Payload JSON Encoding
//!
//! | Payload | JSON |
//! |---------|------|
//! | Json | the value itself |
//! | Text | string |
//! | Bytes | base64 string |
//!
//! Decoding JSON never yields `Bytes`: a string always becomes `Text`. Turning
//! base64 text back into bytes is the codec's job, driven by the media type.

use crate::media_type::MediaType;
use crate::types::OutputId;
use base64::Engine;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The data carried by a local output
///
/// Which variant is expected depends on the output's media type: `Json` for
/// structured plots, `Text` for text-like types and `Bytes` for binary types.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Structured JSON document
    Json(serde_json::Value),
    /// UTF-8 text
    Text(String),
    /// Raw binary data
    Bytes(Vec<u8>),
}

impl Payload {
    /// Short name of the variant, used in error messages
    pub const fn kind(&self) -> &'static str {
        match self {
            Payload::Json(_) => "json",
            Payload::Text(_) => "text",
            Payload::Bytes(_) => "bytes",
        }
    }

    /// Get the text, if this is a `Text` payload
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the bytes, if this is a `Bytes` payload
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Payload::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Get the JSON value, if this is a `Json` payload
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Payload::Json(v) => Some(v),
            _ => None,
        }
    }

    /// Build a payload from an arbitrary JSON value
    ///
    /// Strings become `Text`, everything else `Json`.
    pub fn from_json_value(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => Payload::Text(s),
            other => Payload::Json(other),
        }
    }

    /// Convert to a JSON value (bytes are base64 encoded)
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            Payload::Json(v) => v.clone(),
            Payload::Text(s) => serde_json::Value::String(s.clone()),
            Payload::Bytes(b) => serde_json::Value::String(
                base64::engine::general_purpose::STANDARD.encode(b),
            ),
        }
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Payload::Text(s.to_string())
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Payload::Text(s)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(b: Vec<u8>) -> Self {
        Payload::Bytes(b)
    }
}

impl From<&[u8]> for Payload {
    fn from(b: &[u8]) -> Self {
        Payload::Bytes(b.to_vec())
    }
}

impl From<serde_json::Value> for Payload {
    fn from(v: serde_json::Value) -> Self {
        Payload::Json(v)
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Payload::Json(v) => v.serialize(serializer),
            Payload::Text(s) => serializer.serialize_str(s),
            Payload::Bytes(b) => serializer
                .serialize_str(&base64::engine::general_purpose::STANDARD.encode(b)),
        }
    }
}

impl<'de> Deserialize<'de> for Payload {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Payload::from_json_value(value))
    }
}

/// An output with its data held in memory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocalOutput {
    /// Output id; absent until the output has been packed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<OutputId>,
    /// Human-readable title, also the base of the archive filename
    pub title: String,
    /// Media type, selects the codec
    pub media_type: MediaType,
    /// The output data
    pub data: Payload,
}

impl LocalOutput {
    /// Create an output without an id
    pub fn new(title: impl Into<String>, media_type: MediaType, data: impl Into<Payload>) -> Self {
        Self {
            id: None,
            title: title.into(),
            media_type,
            data: data.into(),
        }
    }

    /// Set the id
    pub fn with_id(mut self, id: OutputId) -> Self {
        self.id = Some(id);
        self
    }

    /// Copy of this output with a different payload
    pub fn with_data(&self, data: Payload) -> Self {
        Self {
            id: self.id,
            title: self.title.clone(),
            media_type: self.media_type,
            data,
        }
    }
}

/// A manifest entry describing one archived output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteOutput {
    /// Output id
    #[serde(default)]
    pub id: Option<OutputId>,
    /// Human-readable title
    pub title: String,
    /// Media type, selects the codec
    pub media_type: MediaType,
    /// Name of the archive member holding the encoded data
    pub filename: String,
    /// Screenshot URL, only present after link augmentation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screenshot: Option<String>,
}

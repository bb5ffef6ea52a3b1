//! Codec families
//!
//! A [`Codec`] turns a [`Payload`] into the bytes stored in an archive and
//! back. There are four families:
//!
//! | Family | encode | decode (native) | decode (transport) |
//! |--------|--------|-----------------|--------------------|
//! | Opaque | bytes as-is | bytes | bytes |
//! | StructuredJson | JSON text | JSON value | JSON value |
//! | Text | UTF-8 | string | string |
//! | Base64 | bytes as-is | bytes | base64 string |
//!
//! Raw bytes are the only native form for binary payloads. Base64 text only
//! appears in transport mode, and [`Codec::to_native`] is the one place
//! that turns it back into bytes.

use crate::error::{CodecError, CodecResult};
use base64::Engine;
use resultbundle_core::Payload;

/// Shape selected when decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransportMode {
    /// In-memory shape: raw bytes for binary payloads
    #[default]
    Native,
    /// JSON-transportable shape: binary payloads become base64 strings
    Json,
}

impl TransportMode {
    /// Whether decoding produces JSON-safe payloads
    pub const fn is_json(&self) -> bool {
        matches!(self, TransportMode::Json)
    }
}

/// The four codec families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CodecFamily {
    /// Identity on bytes
    Opaque,
    /// JSON documents
    StructuredJson,
    /// UTF-8 text
    Text,
    /// Binary data, base64 in transport mode
    Base64,
}

impl CodecFamily {
    /// Family name, used in error messages
    pub const fn name(&self) -> &'static str {
        match self {
            CodecFamily::Opaque => "opaque",
            CodecFamily::StructuredJson => "json",
            CodecFamily::Text => "text",
            CodecFamily::Base64 => "base64",
        }
    }
}

/// A codec: a family plus the canonical filename extension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codec {
    family: CodecFamily,
    extension: &'static str,
}

impl Codec {
    /// Identity codec
    pub const fn opaque(extension: &'static str) -> Self {
        Self::new(CodecFamily::Opaque, extension)
    }

    /// JSON document codec
    pub const fn json(extension: &'static str) -> Self {
        Self::new(CodecFamily::StructuredJson, extension)
    }

    /// UTF-8 text codec
    pub const fn text(extension: &'static str) -> Self {
        Self::new(CodecFamily::Text, extension)
    }

    /// Binary codec with base64 transport form
    pub const fn base64(extension: &'static str) -> Self {
        Self::new(CodecFamily::Base64, extension)
    }

    const fn new(family: CodecFamily, extension: &'static str) -> Self {
        Self { family, extension }
    }

    /// Codec family
    pub const fn family(&self) -> CodecFamily {
        self.family
    }

    /// Canonical filename extension, without the dot
    pub const fn extension(&self) -> &'static str {
        self.extension
    }

    /// Archive filename for an output title
    ///
    /// The extension is appended only if the title does not already end
    /// with it (exact, case-sensitive match).
    ///
    /// ```
    /// use resultbundle_codec::Codec;
    ///
    /// let pdf = Codec::base64("pdf");
    /// assert_eq!(pdf.filename_for("report"), "report.pdf");
    /// assert_eq!(pdf.filename_for("report.pdf"), "report.pdf");
    /// assert_eq!(pdf.filename_for("report.PDF"), "report.PDF.pdf");
    /// ```
    pub fn filename_for(&self, title: &str) -> String {
        let suffix = format!(".{}", self.extension);
        if title.ends_with(&suffix) {
            title.to_string()
        } else {
            format!("{}{}", title, suffix)
        }
    }

    /// Encode a payload to archive bytes
    pub fn encode(&self, data: &Payload) -> CodecResult<Vec<u8>> {
        match (self.family, data) {
            (CodecFamily::Opaque | CodecFamily::Base64, Payload::Bytes(b)) => Ok(b.clone()),
            (CodecFamily::StructuredJson, Payload::Json(v)) => {
                serde_json::to_vec(v).map_err(|e| CodecError::InvalidJson(e.to_string()))
            }
            // A bare string is a valid JSON document
            (CodecFamily::StructuredJson, Payload::Text(s)) => {
                serde_json::to_vec(s).map_err(|e| CodecError::InvalidJson(e.to_string()))
            }
            (CodecFamily::Text, Payload::Text(s)) => Ok(s.as_bytes().to_vec()),
            (family, data) => Err(CodecError::TypeMismatch {
                codec: family.name(),
                expected: expected_kind(family),
                actual: data.kind(),
            }),
        }
    }

    /// Decode archive bytes into a payload
    pub fn decode(&self, bytes: &[u8], mode: TransportMode) -> CodecResult<Payload> {
        match self.family {
            CodecFamily::Opaque => Ok(Payload::Bytes(bytes.to_vec())),
            // Bare strings come back as text, like deserialized payloads
            CodecFamily::StructuredJson => serde_json::from_slice(bytes)
                .map(Payload::from_json_value)
                .map_err(|e| CodecError::InvalidJson(e.to_string())),
            CodecFamily::Text => String::from_utf8(bytes.to_vec())
                .map(Payload::Text)
                .map_err(|e| CodecError::InvalidUtf8(e.to_string())),
            CodecFamily::Base64 => match mode {
                TransportMode::Native => Ok(Payload::Bytes(bytes.to_vec())),
                TransportMode::Json => Ok(Payload::Text(
                    base64::engine::general_purpose::STANDARD.encode(bytes),
                )),
            },
        }
    }

    /// Convert standard base64 text to raw bytes
    pub fn base64_to_bytes(&self, text: &str) -> CodecResult<Vec<u8>> {
        decode_base64(text)
    }

    /// Native payload to its JSON-safe form
    pub fn to_transport(&self, data: &Payload) -> CodecResult<Payload> {
        let bytes = self.encode(data)?;
        self.decode(&bytes, TransportMode::Json)
    }

    /// JSON-safe payload back to its native form
    ///
    /// For binary codecs this accepts base64 text. Native bytes pass through.
    pub fn to_native(&self, data: &Payload) -> CodecResult<Payload> {
        match (self.family, data) {
            (CodecFamily::Base64, Payload::Text(s)) => self.base64_to_bytes(s).map(Payload::Bytes),
            _ => {
                let bytes = self.encode(data)?;
                self.decode(&bytes, TransportMode::Native)
            }
        }
    }
}

/// Decode standard base64 text to raw bytes
pub fn decode_base64(text: &str) -> CodecResult<Vec<u8>> {
    base64::engine::general_purpose::STANDARD
        .decode(text.as_bytes())
        .map_err(|e| CodecError::InvalidBase64(e.to_string()))
}

const fn expected_kind(family: CodecFamily) -> &'static str {
    match family {
        CodecFamily::Opaque | CodecFamily::Base64 => "bytes",
        CodecFamily::StructuredJson => "json",
        CodecFamily::Text => "text",
    }
}

//! Media type enumeration
//!
//! Every output carries exactly one media type. The set is closed: adding a
//! media type means adding a variant here and binding a codec for it.
//!
//! ## Wire Tags
//!
//! | Variant | Tag | Payload |
//! |---------|-----|---------|
//! | Bokeh | `bokeh` | structured JSON |
//! | Table | `table` | text (HTML) |
//! | Csv | `CSV` | text |
//! | Png | `PNG` | bytes |
//! | Jpeg | `JPEG` | bytes |
//! | Mp3 | `MP3` | bytes |
//! | Mp4 | `MP4` | bytes |
//! | Hdf5 | `HDF5` | bytes |
//! | Pdf | `PDF` | bytes |
//! | Markdown | `Markdown` | text |
//! | Text | `Text` | text |
//!
//! `Bokeh` and `Table` are also accepted on read.

use serde::{Deserialize, Serialize};

/// The media types an output can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MediaType {
    /// Bokeh plot, stored as a JSON document
    #[serde(rename = "bokeh", alias = "Bokeh")]
    Bokeh,
    /// Rendered HTML table
    #[serde(rename = "table", alias = "Table")]
    Table,
    /// Comma separated values
    #[serde(rename = "CSV")]
    Csv,
    /// PNG image
    #[serde(rename = "PNG")]
    Png,
    /// JPEG image
    #[serde(rename = "JPEG")]
    Jpeg,
    /// MP3 audio
    #[serde(rename = "MP3")]
    Mp3,
    /// MP4 video
    #[serde(rename = "MP4")]
    Mp4,
    /// HDF5 data file
    #[serde(rename = "HDF5")]
    Hdf5,
    /// PDF document
    #[serde(rename = "PDF")]
    Pdf,
    /// Markdown document
    #[serde(rename = "Markdown")]
    Markdown,
    /// Plain text
    #[serde(rename = "Text")]
    Text,
}

impl MediaType {
    /// All media types (for iteration)
    pub const ALL: [MediaType; 11] = [
        MediaType::Bokeh,
        MediaType::Table,
        MediaType::Csv,
        MediaType::Png,
        MediaType::Jpeg,
        MediaType::Mp3,
        MediaType::Mp4,
        MediaType::Hdf5,
        MediaType::Pdf,
        MediaType::Markdown,
        MediaType::Text,
    ];

    /// Get all media types as a slice
    pub fn all() -> &'static [MediaType] {
        &Self::ALL
    }

    /// Canonical wire tag
    pub const fn tag(&self) -> &'static str {
        match self {
            MediaType::Bokeh => "bokeh",
            MediaType::Table => "table",
            MediaType::Csv => "CSV",
            MediaType::Png => "PNG",
            MediaType::Jpeg => "JPEG",
            MediaType::Mp3 => "MP3",
            MediaType::Mp4 => "MP4",
            MediaType::Hdf5 => "HDF5",
            MediaType::Pdf => "PDF",
            MediaType::Markdown => "Markdown",
            MediaType::Text => "Text",
        }
    }

    /// Parse from a wire tag
    ///
    /// Tags are case-sensitive. `Bokeh` and `Table` are accepted as aliases.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "bokeh" | "Bokeh" => Some(MediaType::Bokeh),
            "table" | "Table" => Some(MediaType::Table),
            "CSV" => Some(MediaType::Csv),
            "PNG" => Some(MediaType::Png),
            "JPEG" => Some(MediaType::Jpeg),
            "MP3" => Some(MediaType::Mp3),
            "MP4" => Some(MediaType::Mp4),
            "HDF5" => Some(MediaType::Hdf5),
            "PDF" => Some(MediaType::Pdf),
            "Markdown" => Some(MediaType::Markdown),
            "Text" => Some(MediaType::Text),
            _ => None,
        }
    }

    /// Whether the native payload for this media type is raw bytes
    pub const fn is_binary(&self) -> bool {
        matches!(
            self,
            MediaType::Png
                | MediaType::Jpeg
                | MediaType::Mp3
                | MediaType::Mp4
                | MediaType::Hdf5
                | MediaType::Pdf
        )
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.tag())
    }
}

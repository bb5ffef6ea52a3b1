//! Media type to codec binding
//!
//! | Media type | Codec | Extension |
//! |------------|-------|-----------|
//! | bokeh | StructuredJson | json |
//! | table | Text | html |
//! | CSV | Text | csv |
//! | Markdown | Text | md |
//! | Text | Text | txt |
//! | PNG | Base64 | png |
//! | JPEG | Base64 | jpeg |
//! | MP3 | Base64 | mp3 |
//! | MP4 | Base64 | mp4 |
//! | HDF5 | Base64 | h5 |
//! | PDF | Base64 | pdf |

use crate::codec::Codec;
use crate::error::{CodecError, CodecResult};
use resultbundle_core::MediaType;

/// Codec bound to a media type
pub const fn codec_for(media_type: MediaType) -> Codec {
    match media_type {
        MediaType::Bokeh => Codec::json("json"),
        MediaType::Table => Codec::text("html"),
        MediaType::Csv => Codec::text("csv"),
        MediaType::Markdown => Codec::text("md"),
        MediaType::Text => Codec::text("txt"),
        MediaType::Png => Codec::base64("png"),
        MediaType::Jpeg => Codec::base64("jpeg"),
        MediaType::Mp3 => Codec::base64("mp3"),
        MediaType::Mp4 => Codec::base64("mp4"),
        MediaType::Hdf5 => Codec::base64("h5"),
        MediaType::Pdf => Codec::base64("pdf"),
    }
}

/// Codec for a raw media type tag
///
/// Fails with [`CodecError::UnknownMediaType`] for tags outside the closed set.
pub fn get_codec(tag: &str) -> CodecResult<Codec> {
    MediaType::from_tag(tag)
        .map(codec_for)
        .ok_or_else(|| CodecError::UnknownMediaType(tag.to_string()))
}

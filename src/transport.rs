//! JSON transport helpers.
//!
//! A native [`LocalResult`] holds binary outputs as raw bytes. Its
//! JSON-safe form holds them as standard base64 strings instead; JSON and
//! text outputs are the same in both forms. These helpers convert between
//! the two without touching the input.
//!
//! ```
//! use resultbundle::transport::{from_json_safe, to_json_safe};
//! use resultbundle::{Category, LocalOutput, LocalResult, MediaType, Payload};
//!
//! let mut local = LocalResult::new();
//! local.push(Category::Renderable, LocalOutput::new("pic", MediaType::Png, vec![72u8, 105]));
//!
//! let safe = to_json_safe(&local).unwrap();
//! assert_eq!(safe.renderable[0].data, Payload::from("SGk="));
//! assert_eq!(from_json_safe(&safe).unwrap(), local);
//! ```

use crate::error::{Error, Result};
use resultbundle_codec::{codec_for, Codec};
use resultbundle_core::{validate_local, Category, LocalOutput, LocalResult, Payload};

/// Convert a result to its JSON-safe form.
///
/// Already JSON-safe binary data (base64 text) is accepted and kept, so the
/// conversion is idempotent.
pub fn to_json_safe(result: &LocalResult) -> Result<LocalResult> {
    map_outputs(result, |codec, data| {
        let native = codec.to_native(data)?;
        codec.to_transport(&native)
    })
}

/// Convert a JSON-safe result back to its native form.
pub fn from_json_safe(result: &LocalResult) -> Result<LocalResult> {
    map_outputs(result, |codec, data| codec.to_native(data))
}

/// Validate a raw local result and return its JSON-safe form as a value.
pub fn to_json_safe_value(value: &serde_json::Value) -> Result<serde_json::Value> {
    let result = validate_local(value)?;
    let safe = to_json_safe(&result)?;
    Ok(serde_json::to_value(&safe)?)
}

/// Validate a raw JSON-safe local result and return it in native form.
pub fn from_json_safe_value(value: &serde_json::Value) -> Result<LocalResult> {
    let result = validate_local(value)?;
    from_json_safe(&result)
}

fn map_outputs<F>(result: &LocalResult, convert: F) -> Result<LocalResult>
where
    F: Fn(&Codec, &Payload) -> resultbundle_codec::CodecResult<Payload>,
{
    let map = |category: Category| -> Result<Vec<LocalOutput>> {
        result
            .outputs(category)
            .iter()
            .map(|output| {
                let codec = codec_for(output.media_type);
                convert(&codec, &output.data)
                    .map(|data| output.with_data(data))
                    .map_err(|e| Error::codec(format!("{}/{}", category, output.title), e))
            })
            .collect()
    };

    Ok(LocalResult {
        renderable: map(Category::Renderable)?,
        downloadable: map(Category::Downloadable)?,
    })
}

//! Result schema validation
//!
//! Validates raw JSON values against the local and remote result contracts
//! and converts them into typed results.
//!
//! ## Contracts
//!
//! | Field | Local | Remote |
//! |-------|-------|--------|
//! | `renderable` / `downloadable` | required, array of outputs | optional, category object |
//! | `ziplocation` | - | required string |
//! | `outputs` | - | required array |
//! | `id` | optional UUID | optional UUID |
//! | `title` | required string | required string |
//! | `media_type` | required, known tag | required, known tag |
//! | `data` | required, any value | - |
//! | `filename` | - | required string |
//! | `screenshot` | - | optional string |
//!
//! Categories are required on the local side and optional on the remote side.
//! The asymmetry is intentional: producers always hand over both partitions,
//! while readers may ask for a single one.
//!
//! Unknown keys are rejected everywhere. Every violation is collected before
//! failing.

use crate::error::{FieldError, ValidationError};
use crate::media_type::MediaType;
use crate::output::{LocalOutput, Payload, RemoteOutput};
use crate::result::{Category, LocalResult, OutputCategory, RemoteResult};
use crate::types::OutputId;
use serde_json::{Map, Value};

const LOCAL_OUTPUT_FIELDS: &[&str] = &["id", "title", "media_type", "data"];
const REMOTE_OUTPUT_FIELDS: &[&str] = &["id", "title", "media_type", "filename", "screenshot"];
const CATEGORY_FIELDS: &[&str] = &["ziplocation", "outputs"];
const RESULT_FIELDS: &[&str] = &["renderable", "downloadable"];

/// Validate a local result value
pub fn validate_local(value: &Value) -> Result<LocalResult, ValidationError> {
    let mut v = Validator::default();
    let mut result = LocalResult::new();

    if let Some(obj) = v.object(value, "$") {
        v.reject_unknown(obj, RESULT_FIELDS, "");
        for category in Category::ALL {
            let path = category.name().to_string();
            match obj.get(category.name()) {
                None => v.error(&path, "missing required field"),
                Some(outputs) => {
                    *result.outputs_mut(category) = v.local_outputs(outputs, &path);
                }
            }
        }
    }

    v.finish(result)
}

/// Validate a remote result value
pub fn validate_remote(value: &Value) -> Result<RemoteResult, ValidationError> {
    let mut v = Validator::default();
    let mut result = RemoteResult::default();

    if let Some(obj) = v.object(value, "$") {
        v.reject_unknown(obj, RESULT_FIELDS, "");
        for category in Category::ALL {
            match obj.get(category.name()) {
                None | Some(Value::Null) => {}
                Some(manifest) => {
                    let manifest = v.remote_category(manifest, category.name());
                    result.set_category(category, manifest);
                }
            }
        }
    }

    v.finish(result)
}

#[derive(Default)]
struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    fn error(&mut self, path: &str, message: impl Into<String>) {
        self.errors.push(FieldError::new(path, message));
    }

    fn finish<T>(self, value: T) -> Result<T, ValidationError> {
        if self.errors.is_empty() {
            Ok(value)
        } else {
            Err(ValidationError::new(self.errors))
        }
    }

    fn object<'a>(&mut self, value: &'a Value, path: &str) -> Option<&'a Map<String, Value>> {
        match value.as_object() {
            Some(obj) => Some(obj),
            None => {
                self.error(path, format!("expected an object, got {}", type_name(value)));
                None
            }
        }
    }

    fn array<'a>(&mut self, value: &'a Value, path: &str) -> Option<&'a Vec<Value>> {
        match value.as_array() {
            Some(arr) => Some(arr),
            None => {
                self.error(path, format!("expected an array, got {}", type_name(value)));
                None
            }
        }
    }

    fn reject_unknown(&mut self, obj: &Map<String, Value>, known: &[&str], prefix: &str) {
        for key in obj.keys() {
            if !known.contains(&key.as_str()) {
                self.error(&join(prefix, key), "unknown field");
            }
        }
    }

    fn required_str(&mut self, obj: &Map<String, Value>, key: &str, prefix: &str) -> Option<String> {
        let path = join(prefix, key);
        match obj.get(key) {
            None => {
                self.error(&path, "missing required field");
                None
            }
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                self.error(&path, format!("expected a string, got {}", type_name(other)));
                None
            }
        }
    }

    fn optional_str(&mut self, obj: &Map<String, Value>, key: &str, prefix: &str) -> Option<String> {
        match obj.get(key) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => {
                let path = join(prefix, key);
                self.error(&path, format!("expected a string, got {}", type_name(other)));
                None
            }
        }
    }

    fn id(&mut self, obj: &Map<String, Value>, prefix: &str) -> Option<OutputId> {
        let raw = self.optional_str(obj, "id", prefix)?;
        match OutputId::parse(&raw) {
            Ok(id) => Some(id),
            Err(_) => {
                self.error(&join(prefix, "id"), format!("not a valid UUID: {:?}", raw));
                None
            }
        }
    }

    fn media_type(&mut self, obj: &Map<String, Value>, prefix: &str) -> Option<MediaType> {
        let tag = self.required_str(obj, "media_type", prefix)?;
        match MediaType::from_tag(&tag) {
            Some(mt) => Some(mt),
            None => {
                let choices: Vec<&str> = MediaType::all().iter().map(|m| m.tag()).collect();
                self.error(
                    &join(prefix, "media_type"),
                    format!("must be one of {}, got {:?}", choices.join(", "), tag),
                );
                None
            }
        }
    }

    fn local_outputs(&mut self, value: &Value, path: &str) -> Vec<LocalOutput> {
        let Some(items) = self.array(value, path) else {
            return Vec::new();
        };
        items
            .iter()
            .enumerate()
            .filter_map(|(i, item)| self.local_output(item, &format!("{}[{}]", path, i)))
            .collect()
    }

    fn local_output(&mut self, value: &Value, path: &str) -> Option<LocalOutput> {
        let obj = self.object(value, path)?;
        self.reject_unknown(obj, LOCAL_OUTPUT_FIELDS, path);

        let id = self.id(obj, path);
        let title = self.required_str(obj, "title", path);
        let media_type = self.media_type(obj, path);
        let data = match obj.get("data") {
            Some(data) => Some(Payload::from_json_value(data.clone())),
            None => {
                self.error(&join(path, "data"), "missing required field");
                None
            }
        };

        Some(LocalOutput {
            id,
            title: title?,
            media_type: media_type?,
            data: data?,
        })
    }

    fn remote_category(&mut self, value: &Value, path: &str) -> Option<OutputCategory> {
        let obj = self.object(value, path)?;
        self.reject_unknown(obj, CATEGORY_FIELDS, path);

        let ziplocation = self.required_str(obj, "ziplocation", path);
        let outputs_path = join(path, "outputs");
        let outputs = match obj.get("outputs") {
            None => {
                self.error(&outputs_path, "missing required field");
                None
            }
            Some(value) => self.array(value, &outputs_path).map(|items| {
                items
                    .iter()
                    .enumerate()
                    .filter_map(|(i, item)| {
                        self.remote_output(item, &format!("{}[{}]", outputs_path, i))
                    })
                    .collect()
            }),
        };

        Some(OutputCategory {
            ziplocation: ziplocation?,
            outputs: outputs?,
        })
    }

    fn remote_output(&mut self, value: &Value, path: &str) -> Option<RemoteOutput> {
        let obj = self.object(value, path)?;
        self.reject_unknown(obj, REMOTE_OUTPUT_FIELDS, path);

        let id = self.id(obj, path);
        let title = self.required_str(obj, "title", path);
        let media_type = self.media_type(obj, path);
        let filename = self.required_str(obj, "filename", path);
        let screenshot = self.optional_str(obj, "screenshot", path);

        Some(RemoteOutput {
            id,
            title: title?,
            media_type: media_type?,
            filename: filename?,
            screenshot,
        })
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

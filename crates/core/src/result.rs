//! Local and remote results
//!
//! A result is partitioned into two independent categories:
//!
//! - `renderable`: outputs shown in the browser (plots, tables, images)
//! - `downloadable`: outputs offered as files (CSV, HDF5, PDF, ...)
//!
//! [`LocalResult`] always has both categories (possibly empty). In a
//! [`RemoteResult`] both are optional so a caller can ask for one category only.

use crate::error::ValidationError;
use crate::output::{LocalOutput, RemoteOutput};
use crate::types::OutputId;
use serde::{Deserialize, Serialize};

/// One of the two output partitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Outputs rendered for display
    Renderable,
    /// Outputs offered for download
    Downloadable,
}

impl Category {
    /// Both categories, in pack order
    pub const ALL: [Category; 2] = [Category::Renderable, Category::Downloadable];

    /// Wire name of the category
    pub const fn name(&self) -> &'static str {
        match self {
            Category::Renderable => "renderable",
            Category::Downloadable => "downloadable",
        }
    }

    /// Parse from the wire name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "renderable" => Some(Category::Renderable),
            "downloadable" => Some(Category::Downloadable),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Outputs held in memory, before packing or after unpacking
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocalResult {
    /// Outputs rendered for display
    pub renderable: Vec<LocalOutput>,
    /// Outputs offered for download
    pub downloadable: Vec<LocalOutput>,
}

impl LocalResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Outputs of one category
    pub fn outputs(&self, category: Category) -> &[LocalOutput] {
        match category {
            Category::Renderable => &self.renderable,
            Category::Downloadable => &self.downloadable,
        }
    }

    /// Mutable outputs of one category
    pub fn outputs_mut(&mut self, category: Category) -> &mut Vec<LocalOutput> {
        match category {
            Category::Renderable => &mut self.renderable,
            Category::Downloadable => &mut self.downloadable,
        }
    }

    /// Append an output to a category
    pub fn push(&mut self, category: Category, output: LocalOutput) {
        self.outputs_mut(category).push(output);
    }

    /// Total number of outputs across both categories
    pub fn len(&self) -> usize {
        self.renderable.len() + self.downloadable.len()
    }

    /// Whether both categories are empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of this result with every id cleared
    ///
    /// Ids are assigned fresh on every pack, so comparisons across a
    /// pack/unpack cycle go through this.
    pub fn without_ids(&self) -> Self {
        let strip = |outputs: &[LocalOutput]| {
            outputs
                .iter()
                .map(|o| LocalOutput {
                    id: None,
                    ..o.clone()
                })
                .collect()
        };
        Self {
            renderable: strip(&self.renderable),
            downloadable: strip(&self.downloadable),
        }
    }
}

/// Manifest of one category archive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputCategory {
    /// Storage key of the category's zip archive
    pub ziplocation: String,
    /// Archived outputs, in pack order
    pub outputs: Vec<RemoteOutput>,
}

/// Manifest of a packed result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteResult {
    /// Renderable category manifest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renderable: Option<OutputCategory>,
    /// Downloadable category manifest
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub downloadable: Option<OutputCategory>,
}

impl RemoteResult {
    /// Manifest of one category, if present
    pub fn category(&self, category: Category) -> Option<&OutputCategory> {
        match category {
            Category::Renderable => self.renderable.as_ref(),
            Category::Downloadable => self.downloadable.as_ref(),
        }
    }

    /// Set or clear the manifest of one category
    pub fn set_category(&mut self, category: Category, manifest: Option<OutputCategory>) {
        match category {
            Category::Renderable => self.renderable = manifest,
            Category::Downloadable => self.downloadable = manifest,
        }
    }

    /// Present categories, in pack order
    pub fn categories(&self) -> impl Iterator<Item = (Category, &OutputCategory)> {
        Category::ALL
            .into_iter()
            .filter_map(move |c| self.category(c).map(|m| (c, m)))
    }

    /// Copy restricted to a single category
    pub fn only(&self, category: Category) -> Self {
        let mut result = RemoteResult::default();
        result.set_category(category, self.category(category).cloned());
        result
    }

    /// Copy with a `screenshot` URL attached to every renderable output
    ///
    /// The URL is `base_url` followed by `{id}.png`. Outputs without an id
    /// get no link. Archive content is not touched.
    pub fn with_screenshot_links(&self, base_url: &str) -> Self {
        let mut result = self.clone();
        if let Some(renderable) = result.renderable.as_mut() {
            for output in &mut renderable.outputs {
                output.screenshot = output.id.map(|id| screenshot_url(base_url, &id));
            }
        }
        result
    }
}

/// Storage key of an output's screenshot
pub fn screenshot_key(id: &OutputId) -> String {
    format!("{}.png", id)
}

/// Public URL of an output's screenshot
pub fn screenshot_url(base_url: &str, id: &OutputId) -> String {
    format!("{}{}", base_url, screenshot_key(id))
}

/// Attach screenshot links to a raw remote result value
///
/// Works on partial manifests: only `renderable.outputs[*].id` is required.
/// Returns a new value; the input is left untouched.
pub fn add_screenshot_links(
    value: &serde_json::Value,
    base_url: &str,
) -> Result<serde_json::Value, ValidationError> {
    let mut result = value.clone();
    let outputs = result
        .get_mut("renderable")
        .and_then(|r| r.get_mut("outputs"))
        .and_then(|o| o.as_array_mut())
        .ok_or_else(|| ValidationError::single("renderable.outputs", "expected an array"))?;

    for (i, output) in outputs.iter_mut().enumerate() {
        let id = output
            .get("id")
            .and_then(|id| id.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                ValidationError::single(format!("renderable.outputs[{}].id", i), "expected a string")
            })?;
        let obj = output.as_object_mut().ok_or_else(|| {
            ValidationError::single(format!("renderable.outputs[{}]", i), "expected an object")
        })?;
        obj.insert(
            "screenshot".to_string(),
            serde_json::Value::String(format!("{}{}.png", base_url, id)),
        );
    }

    Ok(result)
}

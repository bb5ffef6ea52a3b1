//! Archive packer
//!
//! Packing runs in two phases. The plan phase walks every output of both
//! categories: codec lookup, encoding, filename and a fresh id. Any failure
//! there aborts before a single archive byte is written. The write phase
//! then zips each category and builds the manifest.
//!
//! The caller's [`LocalResult`] is never modified.

use crate::bundle::{ziplocation, ArchiveSet, CategoryWriter, PackOptions, PackedResult};
use crate::error::{ArchiveError, ArchiveResult};
use resultbundle_codec::codec_for;
use resultbundle_core::{
    validate_local, Category, FieldError, LocalOutput, LocalResult, OutputCategory, OutputId,
    RemoteOutput, RemoteResult, ValidationError,
};
use std::collections::HashMap;
use tracing::debug;

/// Packs local results into category archives
#[derive(Debug, Clone, Default)]
pub struct ArchivePacker {
    options: PackOptions,
}

/// One output, encoded and named
struct PlannedMember {
    remote: RemoteOutput,
    bytes: Vec<u8>,
}

impl ArchivePacker {
    /// Create a packer with the given options
    pub fn new(options: PackOptions) -> Self {
        Self { options }
    }

    /// Pack options
    pub fn options(&self) -> &PackOptions {
        &self.options
    }

    /// Pack a result into one archive per category
    ///
    /// Both categories appear in the manifest, even when empty.
    ///
    /// # Errors
    ///
    /// - [`ArchiveError::Validation`] if `task_id` is empty or two outputs of
    ///   one category map to the same filename
    /// - [`ArchiveError::Encode`] if an output's data does not fit its codec
    pub fn pack(&self, task_id: &str, result: &LocalResult) -> ArchiveResult<PackedResult> {
        if task_id.is_empty() {
            return Err(ValidationError::single("task_id", "must not be empty").into());
        }

        let mut plans = Vec::with_capacity(Category::ALL.len());
        let mut problems = Vec::new();
        for category in Category::ALL {
            let planned = plan_category(category, result.outputs(category))?;
            problems.extend(duplicate_filenames(category, &planned));
            plans.push((category, planned));
        }
        if !problems.is_empty() {
            return Err(ValidationError::new(problems).into());
        }

        let mut remote = RemoteResult::default();
        let mut archives = ArchiveSet::new();
        for (category, planned) in plans {
            let mut writer = CategoryWriter::new(self.options.compression);
            let mut outputs = Vec::with_capacity(planned.len());
            for member in planned {
                writer.add_member(&member.remote.filename, &member.bytes)?;
                debug!(
                    category = %category,
                    filename = %member.remote.filename,
                    len = member.bytes.len(),
                    "Packed member"
                );
                outputs.push(member.remote);
            }

            let bytes = writer.finish()?;
            debug!(category = %category, members = outputs.len(), len = bytes.len(), "Finished archive");

            archives.insert(category, bytes);
            remote.set_category(
                category,
                Some(OutputCategory {
                    ziplocation: ziplocation(task_id, category),
                    outputs,
                }),
            );
        }

        Ok(PackedResult { remote, archives })
    }

    /// Validate a raw local result, then pack it
    pub fn pack_value(&self, task_id: &str, value: &serde_json::Value) -> ArchiveResult<PackedResult> {
        let result = validate_local(value)?;
        self.pack(task_id, &result)
    }
}

/// Pack with default options
pub fn pack(task_id: &str, result: &LocalResult) -> ArchiveResult<PackedResult> {
    ArchivePacker::default().pack(task_id, result)
}

fn plan_category(category: Category, outputs: &[LocalOutput]) -> ArchiveResult<Vec<PlannedMember>> {
    outputs
        .iter()
        .map(|output| {
            let codec = codec_for(output.media_type);
            let bytes = codec
                .encode(&output.data)
                .map_err(|source| ArchiveError::Encode {
                    category,
                    title: output.title.clone(),
                    source,
                })?;
            Ok(PlannedMember {
                remote: RemoteOutput {
                    id: Some(OutputId::new()),
                    title: output.title.clone(),
                    media_type: output.media_type,
                    filename: codec.filename_for(&output.title),
                    screenshot: None,
                },
                bytes,
            })
        })
        .collect()
}

fn duplicate_filenames(category: Category, planned: &[PlannedMember]) -> Vec<FieldError> {
    let mut first_seen: HashMap<&str, usize> = HashMap::new();
    let mut errors = Vec::new();
    for (i, member) in planned.iter().enumerate() {
        let filename = member.remote.filename.as_str();
        if let Some(first) = first_seen.get(filename) {
            errors.push(FieldError::new(
                format!("{}[{}].title", category, i),
                format!("filename {:?} already used by {}[{}]", filename, category, first),
            ));
        } else {
            first_seen.insert(filename, i);
        }
    }
    errors
}

//! Archive unpacker
//!
//! Reverses packing: for each category present in the manifest, open its
//! archive, read every listed member and decode it with the codec of the
//! output's media type. Output order follows the manifest.
//!
//! Categories absent from the manifest are skipped and need no archive
//! bytes, which is how a caller reads a single category.

use crate::bundle::{ArchiveSet, CategoryReader};
use crate::error::{ArchiveError, ArchiveResult};
use crate::gateway::StorageGateway;
use resultbundle_codec::{codec_for, TransportMode};
use resultbundle_core::{validate_remote, Category, LocalOutput, LocalResult, OutputCategory, RemoteResult};
use tracing::debug;

/// Unpack every category present in the manifest
///
/// Categories missing from `remote` leave their list empty.
pub fn unpack(
    remote: &RemoteResult,
    archives: &ArchiveSet,
    mode: TransportMode,
) -> ArchiveResult<LocalResult> {
    let mut result = LocalResult::new();
    for (category, manifest) in remote.categories() {
        let outputs = unpack_category(category, manifest, archives.get(category), mode)?;
        *result.outputs_mut(category) = outputs;
    }
    Ok(result)
}

/// Unpack a single category
///
/// # Errors
///
/// - [`ArchiveError::MissingArchive`] if `archive` is `None`
/// - [`ArchiveError::MissingArchiveMember`] if a manifest filename is not in the archive
/// - [`ArchiveError::Decode`] if a member does not decode with its codec
pub fn unpack_category(
    category: Category,
    manifest: &OutputCategory,
    archive: Option<&[u8]>,
    mode: TransportMode,
) -> ArchiveResult<Vec<LocalOutput>> {
    let bytes = archive.ok_or_else(|| ArchiveError::MissingArchive {
        category,
        ziplocation: manifest.ziplocation.clone(),
    })?;
    let mut reader = CategoryReader::open(bytes)?;

    let mut outputs = Vec::with_capacity(manifest.outputs.len());
    for entry in &manifest.outputs {
        let member = reader
            .read_member(&entry.filename)?
            .ok_or_else(|| ArchiveError::missing_member(category, &entry.filename))?;

        let data = codec_for(entry.media_type)
            .decode(&member, mode)
            .map_err(|source| ArchiveError::Decode {
                category,
                filename: entry.filename.clone(),
                source,
            })?;
        debug!(category = %category, filename = %entry.filename, len = member.len(), "Unpacked member");

        outputs.push(LocalOutput {
            id: entry.id,
            title: entry.title.clone(),
            media_type: entry.media_type,
            data,
        });
    }

    Ok(outputs)
}

/// Validate a raw manifest, then unpack it
pub fn unpack_value(
    value: &serde_json::Value,
    archives: &ArchiveSet,
    mode: TransportMode,
) -> ArchiveResult<LocalResult> {
    let remote = validate_remote(value)?;
    unpack(&remote, archives, mode)
}

/// Fetch the archive of every category present in the manifest
pub fn fetch_archives<G>(remote: &RemoteResult, gateway: &G) -> ArchiveResult<ArchiveSet>
where
    G: StorageGateway + ?Sized,
{
    let mut archives = ArchiveSet::new();
    for (category, manifest) in remote.categories() {
        let bytes = gateway.get(&manifest.ziplocation)?;
        debug!(category = %category, ziplocation = %manifest.ziplocation, len = bytes.len(), "Fetched archive");
        archives.insert(category, bytes);
    }
    Ok(archives)
}

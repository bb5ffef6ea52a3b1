//! Write/Read Cycle Tests

use crate::*;
use resultbundle::{Compression, LocalDirGateway};

// =============================================================================
// MEMORY GATEWAY
// =============================================================================

#[test]
fn test_png_csv_manifest() {
    let (store, _) = create_store();

    let report = store.write("1868c4a7", &png_and_csv()).unwrap();

    let renderable = report.remote.renderable.as_ref().unwrap();
    assert_eq!(renderable.ziplocation, "1868c4a7_renderable.zip");
    assert_eq!(renderable.outputs[0].filename, "plot.png");
    assert_eq!(renderable.outputs[0].media_type, MediaType::Png);

    let downloadable = report.remote.downloadable.as_ref().unwrap();
    assert_eq!(downloadable.ziplocation, "1868c4a7_downloadable.zip");
    assert_eq!(downloadable.outputs[0].filename, "data.csv");
}

#[test]
fn test_write_uploads_under_ziplocations() {
    let (store, gateway) = create_store();

    store.write("1868c4a7", &png_and_csv()).unwrap();

    assert_eq!(
        gateway.keys(),
        vec![
            "1868c4a7_downloadable.zip".to_string(),
            "1868c4a7_renderable.zip".to_string(),
        ]
    );
}

#[test]
fn test_native_read_returns_bytes() {
    let (store, _) = create_store();
    let report = store.write("t", &png_and_csv()).unwrap();

    let back = store.read(&report.remote, TransportMode::Native).unwrap();
    assert_eq!(back.renderable[0].data, Payload::Bytes(PNG_HEADER.to_vec()));
    assert_eq!(back.downloadable[0].data, Payload::from("x,y\n1,2\n3,4\n"));
}

#[test]
fn test_json_read_returns_base64() {
    let (store, _) = create_store();
    let report = store.write("t", &png_and_csv()).unwrap();

    let back = store.read(&report.remote, TransportMode::Json).unwrap();
    assert_eq!(back.renderable[0].data, Payload::from("iVBORw0KGgo="));
    assert_eq!(back.downloadable[0].data, Payload::from("x,y\n1,2\n3,4\n"));
}

#[test]
fn test_every_media_type_roundtrip() {
    let (store, _) = create_store();
    let local = every_media_type();

    let report = store.write("all-types", &local).unwrap();
    let back = store.read(&report.remote, TransportMode::Native).unwrap();

    assert_eq!(back.without_ids(), local);
}

#[test]
fn test_read_ids_match_manifest() {
    let (store, _) = create_store();
    let report = store.write("t", &every_media_type()).unwrap();
    let back = store.read(&report.remote, TransportMode::Native).unwrap();

    for category in Category::ALL {
        let manifest = report.remote.category(category).unwrap();
        for (entry, output) in manifest.outputs.iter().zip(back.outputs(category)) {
            assert!(entry.id.is_some());
            assert_eq!(entry.id, output.id);
        }
    }
}

#[test]
fn test_rewrite_assigns_new_ids() {
    let (store, _) = create_store();
    let local = png_and_csv();

    let first = store.write("t", &local).unwrap();
    let second = store.write("t", &local).unwrap();

    let id = |r: &RemoteResult| r.renderable.as_ref().unwrap().outputs[0].id;
    assert_ne!(id(&first.remote), id(&second.remote));
    assert!(local.renderable[0].id.is_none());
}

#[test]
fn test_title_with_extension_is_kept() {
    let (store, _) = create_store();
    let mut local = LocalResult::new();
    local.push(
        Category::Downloadable,
        LocalOutput::new("report.pdf", MediaType::Pdf, b"%PDF-1.4".to_vec()),
    );
    local.push(
        Category::Downloadable,
        LocalOutput::new("summary.PDF", MediaType::Pdf, b"%PDF-1.4".to_vec()),
    );

    let report = store.write("t", &local).unwrap();
    let filenames: Vec<_> = report
        .remote
        .downloadable
        .unwrap()
        .outputs
        .into_iter()
        .map(|o| o.filename)
        .collect();
    assert_eq!(filenames, vec!["report.pdf", "summary.PDF.pdf"]);
}

#[test]
fn test_duplicate_filenames_upload_nothing() {
    let (store, gateway) = create_store();
    let mut local = png_and_csv();
    local.push(
        Category::Downloadable,
        LocalOutput::new("data.csv", MediaType::Csv, "other"),
    );

    let err = store.write("t", &local).unwrap_err();
    assert!(err.is_validation());
    assert!(gateway.is_empty());
}

#[test]
fn test_type_mismatch_uploads_nothing() {
    let (store, gateway) = create_store();
    let mut local = png_and_csv();
    local.push(
        Category::Renderable,
        LocalOutput::new("photo", MediaType::Jpeg, "not raw bytes"),
    );

    let err = store.write("t", &local).unwrap_err();
    assert!(err.is_codec());
    assert!(gateway.is_empty());
}

#[test]
fn test_empty_result_roundtrip() {
    let (store, gateway) = create_store();

    let report = store.write("empty", &LocalResult::new()).unwrap();
    assert_eq!(gateway.len(), 2);
    assert!(report.remote.renderable.unwrap().outputs.is_empty());

    let report = store.write("empty", &LocalResult::new()).unwrap();
    let back = store.read(&report.remote, TransportMode::Native).unwrap();
    assert!(back.is_empty());
}

// =============================================================================
// DIRECTORY GATEWAY
// =============================================================================

#[test]
fn test_local_dir_gateway_cycle() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let store = ResultStore::builder()
        .gateway(LocalDirGateway::create(dir.path()).unwrap())
        .compression(Compression::Stored)
        .build()
        .unwrap();

    let report = store.write("on-disk", &every_media_type()).unwrap();
    assert!(dir.path().join("on-disk_renderable.zip").is_file());
    assert!(dir.path().join("on-disk_downloadable.zip").is_file());

    let back = store.read(&report.remote, TransportMode::Native).unwrap();
    assert_eq!(back.without_ids(), every_media_type());
}

#[test]
fn test_manifest_survives_serialization() {
    let (store, _) = create_store();
    let report = store.write("t", &png_and_csv()).unwrap();

    let wire = serde_json::to_string(&report.remote).unwrap();
    let value: serde_json::Value = serde_json::from_str(&wire).unwrap();
    assert_eq!(value["renderable"]["outputs"][0]["media_type"], json!("PNG"));
    assert!(value["renderable"]["outputs"][0].get("screenshot").is_none());

    let back = store.read_value(&value, TransportMode::Native).unwrap();
    assert_eq!(back.without_ids(), png_and_csv());
}

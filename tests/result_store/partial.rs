//! Partial Read Tests
//!
//! A manifest restricted to one category reads only that category.

use crate::*;
use resultbundle::StorageGateway;

#[test]
fn test_read_downloadable_only() {
    let (store, _) = create_store();
    let report = store.write("t", &png_and_csv()).unwrap();

    let back = store
        .read(&report.remote.only(Category::Downloadable), TransportMode::Native)
        .unwrap();

    assert!(back.renderable.is_empty());
    assert_eq!(back.downloadable.len(), 1);
    assert_eq!(back.downloadable[0].title, "data");
}

#[test]
fn test_read_renderable_only() {
    let (store, _) = create_store();
    let report = store.write("t", &png_and_csv()).unwrap();

    let back = store
        .read(&report.remote.only(Category::Renderable), TransportMode::Json)
        .unwrap();

    assert_eq!(back.renderable.len(), 1);
    assert!(back.downloadable.is_empty());
}

#[test]
fn test_partial_read_does_not_need_other_archive() {
    let (store, gateway) = create_store();
    let report = store.write("t", &png_and_csv()).unwrap();
    gateway.remove("t_renderable.zip");

    let back = store
        .read(&report.remote.only(Category::Downloadable), TransportMode::Native)
        .unwrap();
    assert_eq!(back.downloadable.len(), 1);

    let err = store.read(&report.remote, TransportMode::Native).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_partial_raw_manifest() {
    let (store, _) = create_store();
    let report = store.write("t", &png_and_csv()).unwrap();
    let mut value = serde_json::to_value(&report.remote).unwrap();
    value["renderable"] = serde_json::Value::Null;

    let back = store.read_value(&value, TransportMode::Native).unwrap();
    assert!(back.renderable.is_empty());
    assert_eq!(back.downloadable.len(), 1);
}

#[test]
fn test_missing_member_reported() {
    let (store, _) = create_store();
    let mut report = store.write("t", &png_and_csv()).unwrap();
    if let Some(downloadable) = report.remote.downloadable.as_mut() {
        downloadable.outputs[0].filename = "renamed.csv".to_string();
    }

    let err = store.read(&report.remote, TransportMode::Native).unwrap_err();
    match err {
        resultbundle::Error::MissingArchiveMember { category, filename } => {
            assert_eq!(category, Category::Downloadable);
            assert_eq!(filename, "renamed.csv");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_corrupt_archive_reported() {
    let (store, gateway) = create_store();
    let report = store.write("t", &png_and_csv()).unwrap();
    gateway.put("t_downloadable.zip", b"garbage").unwrap();

    let err = store.read(&report.remote, TransportMode::Native).unwrap_err();
    assert!(matches!(err, resultbundle::Error::Archive(_)), "{:?}", err);
}

//! Raw Value Validation Tests

use crate::*;

#[test]
fn test_write_value_rejects_bad_data() {
    let (store, gateway) = create_store();

    let err = store.write_value("t", &json!({"bad": "data"})).unwrap_err();
    assert!(err.is_validation());
    assert!(!err.field_errors().is_empty());
    assert!(gateway.is_empty());
}

#[test]
fn test_read_value_rejects_bad_data() {
    let (store, _) = create_store();

    let err = store
        .read_value(&json!({"bad": "data"}), TransportMode::Native)
        .unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn test_write_value_reports_every_problem() {
    let (store, _) = create_store();
    let value = json!({
        "renderable": [
            {"title": "a", "media_type": "GIF", "data": ""},
            {"media_type": "Text", "data": "x"}
        ],
        "downloadable": "nope"
    });

    let err = store.write_value("t", &value).unwrap_err();
    let paths: Vec<&str> = err.field_errors().iter().map(|e| e.path.as_str()).collect();
    assert!(paths.contains(&"renderable[0].media_type"), "{:?}", paths);
    assert!(paths.contains(&"renderable[1].title"), "{:?}", paths);
    assert!(paths.contains(&"downloadable"), "{:?}", paths);
}

#[test]
fn test_write_value_accepts_native_json() {
    let (store, _) = create_store();
    let value = json!({
        "renderable": [
            {"title": "plot", "media_type": "bokeh", "data": {"doc": {"roots": []}}},
            {"title": "summary", "media_type": "table", "data": "<table></table>"}
        ],
        "downloadable": [
            {"id": null, "title": "notes", "media_type": "Markdown", "data": "# Notes"}
        ]
    });

    let report = store.write_value("t", &value).unwrap();
    let renderable = report.remote.renderable.as_ref().unwrap();
    assert_eq!(renderable.outputs[0].filename, "plot.json");
    assert_eq!(renderable.outputs[1].filename, "summary.html");

    let back = store.read(&report.remote, TransportMode::Json).unwrap();
    assert_eq!(
        back.renderable[0].data,
        Payload::Json(json!({"doc": {"roots": []}}))
    );
    assert_eq!(back.downloadable[0].data, Payload::from("# Notes"));
}

#[test]
fn test_local_requires_both_categories() {
    let (store, _) = create_store();

    let err = store
        .write_value("t", &json!({"renderable": []}))
        .unwrap_err();
    assert!(err.field_errors().iter().any(|e| e.path == "downloadable"));
}

#[test]
fn test_remote_empty_object_reads_nothing() {
    let (store, _) = create_store();

    let back = store.read_value(&json!({}), TransportMode::Native).unwrap();
    assert!(back.is_empty());
}

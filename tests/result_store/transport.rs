//! JSON Transport Tests

use crate::*;
use resultbundle::transport::{from_json_safe, from_json_safe_value, to_json_safe, to_json_safe_value};

#[test]
fn test_transport_roundtrip_every_type() {
    let local = every_media_type();

    let safe = to_json_safe(&local).unwrap();
    assert!(serde_json::to_string(&safe).is_ok());
    assert_eq!(from_json_safe(&safe).unwrap(), local);
}

#[test]
fn test_transport_matches_json_read() {
    let (store, _) = create_store();
    let report = store.write("t", &every_media_type()).unwrap();

    let native = store.read(&report.remote, TransportMode::Native).unwrap();
    let json_read = store.read(&report.remote, TransportMode::Json).unwrap();

    assert_eq!(to_json_safe(&native).unwrap(), json_read);
    assert_eq!(from_json_safe(&json_read).unwrap(), native);
}

#[test]
fn test_transport_value_roundtrip() {
    let value = json!({
        "renderable": [{"title": "img", "media_type": "PNG", "data": "iVBORw0KGgo="}],
        "downloadable": [{"title": "t", "media_type": "CSV", "data": "a,b"}]
    });

    let native = from_json_safe_value(&value).unwrap();
    assert_eq!(native.renderable[0].data, Payload::Bytes(PNG_HEADER.to_vec()));

    let safe = to_json_safe_value(&value).unwrap();
    assert_eq!(safe["renderable"][0]["data"], json!("iVBORw0KGgo="));
    assert_eq!(safe["downloadable"][0]["data"], json!("a,b"));
}

#[test]
fn test_safe_form_can_be_written() {
    let (store, _) = create_store();
    let safe = to_json_safe(&png_and_csv()).unwrap();

    // Base64 text is not a native binary payload
    let err = store.write("t", &safe).unwrap_err();
    assert!(err.is_codec());

    let native = from_json_safe(&safe).unwrap();
    assert!(store.write("t", &native).is_ok());
}

//! Screenshot Tests
//!
//! Capture on write, failure reporting and link augmentation.

use crate::*;
use parking_lot::Mutex;
use resultbundle::{ScreenshotStatus, Screenshotter, StorageGateway};

// =============================================================================
// HELPERS
// =============================================================================

/// Records every output it is asked to render
#[derive(Default)]
struct RecordingRenderer {
    seen: Mutex<Vec<(String, Payload)>>,
    fail_titles: Vec<&'static str>,
}

impl Screenshotter for RecordingRenderer {
    fn render(&self, output: &LocalOutput) -> Result<Vec<u8>, RenderError> {
        self.seen
            .lock()
            .push((output.title.clone(), output.data.clone()));
        if self.fail_titles.contains(&output.title.as_str()) {
            return Err(RenderError::Failed(format!("cannot render {}", output.title)));
        }
        Ok(PNG_HEADER.to_vec())
    }
}

fn screenshot_store(renderer: Arc<RecordingRenderer>) -> (ResultStore, Arc<MemoryGateway>) {
    init_tracing();
    let gateway = Arc::new(MemoryGateway::new());
    let store = ResultStore::builder()
        .shared_gateway(gateway.clone())
        .screenshotter(SharedRenderer(renderer))
        .config(StoreConfig::new("shots").with_screenshots(true))
        .build()
        .unwrap();
    (store, gateway)
}

struct SharedRenderer(Arc<RecordingRenderer>);

impl Screenshotter for SharedRenderer {
    fn render(&self, output: &LocalOutput) -> Result<Vec<u8>, RenderError> {
        self.0.render(output)
    }
}

fn two_renderables() -> LocalResult {
    let mut local = png_and_csv();
    local.push(
        Category::Renderable,
        LocalOutput::new("chart", MediaType::Bokeh, json!({"roots": [1]})),
    );
    local
}

// =============================================================================
// CAPTURE
// =============================================================================

#[test]
fn test_screenshots_stored_per_renderable_output() {
    let renderer = Arc::new(RecordingRenderer::default());
    let (store, gateway) = screenshot_store(renderer.clone());

    let report = store.write("t", &two_renderables()).unwrap();

    assert_eq!(report.screenshots.len(), 2);
    assert_eq!(report.failed_screenshots().count(), 0);
    for output in &report.remote.renderable.as_ref().unwrap().outputs {
        let key = format!("{}.png", output.id.unwrap());
        assert_eq!(gateway.get(&key).unwrap(), PNG_HEADER.to_vec());
    }
    // Two archives plus two screenshots
    assert_eq!(gateway.len(), 4);
}

#[test]
fn test_renderer_gets_transport_form() {
    let renderer = Arc::new(RecordingRenderer::default());
    let (store, _) = screenshot_store(renderer.clone());

    store.write("t", &two_renderables()).unwrap();

    let seen = renderer.seen.lock();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], ("plot".to_string(), Payload::from("iVBORw0KGgo=")));
    assert_eq!(seen[1], ("chart".to_string(), Payload::Json(json!({"roots": [1]}))));
}

#[test]
fn test_downloadable_outputs_not_rendered() {
    let renderer = Arc::new(RecordingRenderer::default());
    let (store, _) = screenshot_store(renderer.clone());

    store.write("t", &png_and_csv()).unwrap();

    let seen = renderer.seen.lock();
    assert!(seen.iter().all(|(title, _)| title != "data"));
}

#[test]
fn test_render_failure_reported_not_fatal() {
    let renderer = Arc::new(RecordingRenderer {
        fail_titles: vec!["chart"],
        ..Default::default()
    });
    let (store, gateway) = screenshot_store(renderer);

    let report = store.write("t", &two_renderables()).unwrap();

    let failed: Vec<_> = report.failed_screenshots().collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].title, "chart");
    assert!(matches!(failed[0].status, ScreenshotStatus::Failed(RenderError::Failed(_))));

    // Archives uploaded regardless
    assert!(gateway.contains("t_renderable.zip"));
    assert!(gateway.contains("t_downloadable.zip"));
    assert!(!gateway.contains(&format!("{}.png", failed[0].id)));
}

#[test]
fn test_screenshots_disabled_in_config() {
    let renderer = Arc::new(RecordingRenderer::default());
    let gateway = Arc::new(MemoryGateway::new());
    let store = ResultStore::builder()
        .shared_gateway(gateway.clone())
        .screenshotter(SharedRenderer(renderer.clone()))
        .screenshots(false)
        .build()
        .unwrap();

    let report = store.write("t", &two_renderables()).unwrap();

    assert!(report.screenshots.is_empty());
    assert!(renderer.seen.lock().is_empty());
    assert_eq!(gateway.len(), 2);
}

// =============================================================================
// LINKS
// =============================================================================

#[test]
fn test_links_on_raw_value() {
    let (store, _) = create_store();
    let value = json!({"renderable": {"outputs": [{"id": "1234"}]}});

    let linked = store.add_screenshot_links_value(&value).unwrap();
    assert_eq!(
        linked["renderable"]["outputs"][0]["screenshot"],
        json!("https://storage.googleapis.com/test-bucket/1234.png")
    );
    // Input untouched
    assert!(value["renderable"]["outputs"][0].get("screenshot").is_none());
}

#[test]
fn test_links_on_typed_manifest() {
    let (store, _) = create_store();
    let report = store.write("t", &png_and_csv()).unwrap();

    let linked = store.add_screenshot_links(&report.remote);
    let output = &linked.renderable.as_ref().unwrap().outputs[0];
    assert_eq!(
        output.screenshot.as_deref(),
        Some(format!("https://storage.googleapis.com/test-bucket/{}.png", output.id.unwrap()).as_str())
    );
    assert!(linked.downloadable.unwrap().outputs[0].screenshot.is_none());

    // A linked manifest still reads back
    let value = serde_json::to_value(&store.add_screenshot_links(&report.remote)).unwrap();
    let back = store.read_value(&value, TransportMode::Native).unwrap();
    assert_eq!(back.without_ids(), png_and_csv());
}

#[test]
fn test_links_custom_base_url() {
    let store = ResultStore::builder()
        .config(StoreConfig::new("b").with_screenshot_base_url("https://cdn.example.org/"))
        .build()
        .unwrap();
    let id = OutputId::new();
    let value = json!({"renderable": {"outputs": [{"id": id.to_string()}]}});

    let linked = store.add_screenshot_links_value(&value).unwrap();
    assert_eq!(
        linked["renderable"]["outputs"][0]["screenshot"],
        json!(format!("https://cdn.example.org/{}.png", id))
    );
}

#[test]
fn test_links_require_renderable_outputs() {
    let (store, _) = create_store();
    let err = store
        .add_screenshot_links_value(&json!({"downloadable": {}}))
        .unwrap_err();
    assert!(err.is_validation());
}

//! Browser tests, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use std::sync::{Arc, Mutex};

use leptos::prelude::*;
use snapshot_viewer::components::fileviewer::ImageFileViewer;
use snapshot_viewer::core::error::DownloadError;
use snapshot_viewer::models::FileDetails;
use snapshot_viewer::utils::{Downloader, trigger_download};
use snapshot_viewer::{App, AppContext};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Element, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

/// Downloader that records its calls.
#[derive(Default)]
struct RecordingDownloader {
    calls: Mutex<Vec<(String, String)>>,
}

impl Downloader for RecordingDownloader {
    fn download(&self, path: &str, filename: &str) -> Result<(), DownloadError> {
        self.calls
            .lock()
            .unwrap()
            .push((path.to_string(), filename.to_string()));
        Ok(())
    }
}

/// Fresh container appended to the test page body.
fn container() -> HtmlElement {
    let document = document();
    let el = document
        .create_element("div")
        .unwrap()
        .unchecked_into::<HtmlElement>();
    document.body().unwrap().append_child(&el).unwrap();
    el
}

fn find(root: &HtmlElement, selector: &str) -> Element {
    root.query_selector(selector).unwrap().unwrap()
}

/// Let scheduled render effects run.
async fn settle() {
    leptos::task::Executor::tick().await;
    leptos::task::Executor::tick().await;
}

fn anchor_count() -> u32 {
    document()
        .query_selector_all("a[download]")
        .map(|nodes| nodes.length())
        .unwrap_or(0)
}

#[wasm_bindgen_test]
fn download_link_is_removed_after_click() {
    let before = anchor_count();
    // A data URL keeps the click from leaving the test page.
    assert_eq!(trigger_download("data:text/plain,hello", "hello.txt"), Ok(()));
    assert_eq!(anchor_count(), before);
}

#[wasm_bindgen_test]
fn empty_path_is_rejected() {
    assert_eq!(trigger_download("", "a.png"), Err(DownloadError::EmptyPath));
}

#[wasm_bindgen_test]
async fn image_viewer_renders_and_downloads_current_file() {
    let recorder = Arc::new(RecordingDownloader::default());
    let ctx = AppContext::with_downloader(recorder.clone());
    ctx.files
        .set_details(Some(FileDetails::new("a.png", "/files/a.png")));

    let root = container();
    let _handle = mount_to(root.clone(), move || {
        provide_context(ctx);
        view! { <ImageFileViewer /> }
    });

    let img = find(&root, "img");
    assert_eq!(img.get_attribute("src").as_deref(), Some("/files/a.png"));
    assert_eq!(img.get_attribute("alt").as_deref(), Some("a.png"));

    find(&root, "button")
        .unchecked_into::<HtmlElement>()
        .click();
    assert_eq!(
        *recorder.calls.lock().unwrap(),
        vec![("/files/a.png".to_string(), "a.png".to_string())]
    );

    // Setting the same details again leaves the rendered image untouched.
    ctx.files
        .set_details(Some(FileDetails::new("a.png", "/files/a.png")));
    settle().await;
    let same_img = find(&root, "img");
    assert!(same_img.is_same_node(Some(&img)));
    assert_eq!(same_img.get_attribute("src").as_deref(), Some("/files/a.png"));
    assert_eq!(same_img.get_attribute("alt").as_deref(), Some("a.png"));

    // A different file updates the bindings in place.
    ctx.files
        .set_details(Some(FileDetails::new("b.jpg", "/files/b.jpg")));
    settle().await;
    assert_eq!(img.get_attribute("src").as_deref(), Some("/files/b.jpg"));
    assert_eq!(img.get_attribute("alt").as_deref(), Some("b.jpg"));
    assert_eq!(recorder.calls.lock().unwrap().len(), 1);
}

#[wasm_bindgen_test]
fn app_without_file_shows_empty_state() {
    let root = container();
    let _handle = mount_to(root.clone(), App);

    let text = root.text_content().unwrap_or_default();
    assert!(text.contains("No file selected"), "rendered: {text}");
    assert!(root.query_selector("img").unwrap().is_none());
}

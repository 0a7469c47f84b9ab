//! Browser file downloads.
//!
//! Downloads are started by clicking a temporary `<a download>` element, which
//! lets the browser fetch `path` and save it under `filename`.

use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use super::dom;
use crate::core::error::DownloadError;

/// Something that can start a download of `path` saved as `filename`.
pub trait Downloader: Send + Sync {
    fn download(&self, path: &str, filename: &str) -> Result<(), DownloadError>;
}

/// [`Downloader`] backed by the browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDownloader;

impl Downloader for BrowserDownloader {
    fn download(&self, path: &str, filename: &str) -> Result<(), DownloadError> {
        trigger_download(path, filename)
    }
}

/// Name the browser should save `path` as.
///
/// Falls back to the last segment of `path` when `filename` is blank.
pub fn download_name<'a>(path: &'a str, filename: &'a str) -> &'a str {
    if !filename.trim().is_empty() {
        return filename;
    }
    path.rsplit('/').next().unwrap_or(path)
}

/// Start a browser download of `path`, saved as `filename`.
pub fn trigger_download(path: &str, filename: &str) -> Result<(), DownloadError> {
    if path.is_empty() {
        return Err(DownloadError::EmptyPath);
    }

    let window = dom::window().ok_or(DownloadError::NoWindow)?;
    let document = window.document().ok_or(DownloadError::NoDocument)?;
    let body = document.body().ok_or(DownloadError::NoDocument)?;

    let anchor = document
        .create_element("a")
        .map_err(|_| DownloadError::ElementCreationFailed)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| DownloadError::ElementCreationFailed)?;

    anchor.set_href(path);
    anchor.set_download(download_name(path, filename));
    let _ = anchor.style().set_property("display", "none");

    body.append_child(&anchor)
        .map_err(|_| DownloadError::ElementCreationFailed)?;
    anchor.click();
    anchor.remove();

    Ok(())
}

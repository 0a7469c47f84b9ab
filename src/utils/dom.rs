//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use web_sys::{Document, Window};

use crate::config::EMBEDDED_DETAILS_ID;
use crate::models::FileDetails;

use super::log;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the document of the browser window.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Set the document title.
pub fn set_title(title: &str) {
    if let Some(document) = document() {
        document.set_title(title);
    }
}

/// Read file details embedded by the server page.
///
/// Looks for `<script type="application/json" id="file-details">`. A payload
/// that fails to parse is logged and ignored.
pub fn load_embedded_details() -> Option<FileDetails> {
    let json = document()?
        .get_element_by_id(EMBEDDED_DETAILS_ID)?
        .text_content()?;

    parse_embedded_details(&json)
}

fn parse_embedded_details(json: &str) -> Option<FileDetails> {
    if json.trim().is_empty() {
        return None;
    }
    match serde_json::from_str(json) {
        Ok(details) => Some(details),
        Err(e) => {
            log::warn(&format!("ignoring embedded file details: {}", e));
            None
        }
    }
}

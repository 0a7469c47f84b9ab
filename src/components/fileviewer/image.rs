//! Image preview with a download action.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{DownloadButton, css};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::select_file_details;
use crate::models::FileDetails;

/// Attributes of the rendered `<img>`.
///
/// A missing file yields empty attributes, which the browser renders as a
/// broken image.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ImagePreview {
    pub src: String,
    pub alt: String,
}

impl ImagePreview {
    pub fn from_details(details: Option<&FileDetails>) -> Self {
        details
            .map(|d| Self {
                src: d.raw_path.clone(),
                alt: d.name.clone(),
            })
            .unwrap_or_default()
    }
}

/// Centered preview of the current file as an image.
#[component]
pub fn ImageFileViewer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Memo keeps the <img> untouched when the details are re-set unchanged.
    let preview =
        Memo::new(move |_| ImagePreview::from_details(select_file_details(&ctx.files).as_ref()));

    view! {
        <div class=css::viewer>
            <div class=css::toolbar>
                <span class=css::fileName>
                    <Icon icon=ic::FILE_IMAGE />
                    " "
                    {move || preview.with(|p| p.alt.clone())}
                </span>
                <DownloadButton />
            </div>
            <div class=css::imageStack>
                <img
                    class=css::image
                    src=move || preview.with(|p| p.src.clone())
                    alt=move || preview.with(|p| p.alt.clone())
                />
            </div>
        </div>
    }
}

//! File viewers.
//!
//! [`FileViewer`] picks a viewer from the [`FileKind`] of the current file.
//! Viewers read the file from [`AppContext`] and hold no state of their own.

mod image;
mod unsupported;

use leptos::{ev, prelude::*};
use leptos_icons::Icon;

pub use image::{ImageFileViewer, ImagePreview};
pub use unsupported::UnsupportedFileViewer;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::select_file_details;
use crate::models::{FileDetails, FileKind};
use crate::utils::{Downloader, log};

stylance::import_crate_style!(css, "src/components/fileviewer/fileviewer.module.css");

/// Download `details` through `downloader`, saved under the file name.
///
/// Does nothing when no file is selected. Failures are only logged.
pub fn handle_download_file(details: Option<&FileDetails>, downloader: &dyn Downloader) {
    let Some(details) = details else {
        log::warn("download requested with no file selected");
        return;
    };

    log::info(&format!("download: {} ({})", details.name, details.raw_path));
    if let Err(e) = downloader.download(&details.raw_path, &details.name) {
        log::error(&format!("download of {} failed: {}", details.name, e));
    }
}

/// Viewer for the current file.
#[component]
pub fn FileViewer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let kind = Memo::new(move |_| {
        select_file_details(&ctx.files).map(|details| FileKind::from_details(&details))
    });

    view! {
        {move || match kind.get() {
            Some(FileKind::Image) => view! { <ImageFileViewer /> }.into_any(),
            Some(FileKind::Other) => view! { <UnsupportedFileViewer /> }.into_any(),
            None => view! { <EmptyViewer /> }.into_any(),
        }}
    }
}

/// Placeholder shown when the URL addresses no file.
#[component]
fn EmptyViewer() -> impl IntoView {
    view! {
        <div class=css::empty>
            <span class=css::emptyIcon><Icon icon=ic::FILE /></span>
            <p class=css::hint>"No file selected"</p>
        </div>
    }
}

/// Download button for the current file.
#[component]
pub fn DownloadButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let on_download = move |_: ev::MouseEvent| {
        let details = select_file_details(&ctx.files);
        ctx.downloader
            .with_value(|downloader| handle_download_file(details.as_ref(), downloader.as_ref()));
    };

    view! {
        <button
            class=css::downloadButton
            on:click=on_download
            title="Download file"
            aria-label="Download file"
        >
            <Icon icon=ic::DOWNLOAD />
            <span>"Download"</span>
        </button>
    }
}

//! Fallback for files without an inline preview.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::{DownloadButton, css};
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::core::select_file_details;
use crate::utils::format::format_size;

/// File card with name, size and a download action.
#[component]
pub fn UnsupportedFileViewer() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let details = Memo::new(move |_| select_file_details(&ctx.files));

    view! {
        <div class=css::empty>
            <span class=css::emptyIcon><Icon icon=ic::FILE /></span>
            {move || details.get().map(|d| view! {
                <p class=css::fileName>{d.name.clone()}</p>
                <p class=css::fileMeta>
                    {format_size(d.size)}
                    {d.mime.clone().map(|mime| format!(" · {}", mime))}
                </p>
            })}
            <p class=css::hint>"Preview not available"</p>
            <DownloadButton />
        </div>
    }
}

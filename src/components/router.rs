//! Application router component.
//!
//! The URL hash is the source of truth for the viewed file. Native
//! `hashchange` events re-derive the route, so browser back/forward work.

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::fileviewer::FileViewer;
use crate::config::APP_NAME;
use crate::core::select_file_details;
#[cfg(target_arch = "wasm32")]
use crate::models::FileRoute;
use crate::utils::dom;

/// Main application router.
#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            ctx.files.navigate(FileRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    Effect::new(move |_| {
        let title = select_file_details(&ctx.files)
            .map(|d| format!("{} - {}", d.name, APP_NAME))
            .unwrap_or_else(|| APP_NAME.to_string());
        dom::set_title(&title);
    });

    view! { <FileViewer /> }
}

//! Root application module.
//!
//! Contains the main App component, AppContext definition, and
//! application-level setup logic following Leptos conventions.

use std::sync::Arc;

use leptos::prelude::*;

use crate::components::AppRouter;
use crate::core::FileState;
use crate::models::FileRoute;
use crate::utils::{BrowserDownloader, Downloader, dom};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any child
/// component with `use_context::<AppContext>()`.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// State of the currently viewed file.
    pub files: FileState,

    /// Download mechanism used by the viewers.
    pub downloader: StoredValue<Arc<dyn Downloader>>,
}

impl AppContext {
    /// Creates a context backed by the browser downloader.
    pub fn new() -> Self {
        Self::with_downloader(Arc::new(BrowserDownloader))
    }

    pub fn with_downloader(downloader: Arc<dyn Downloader>) -> Self {
        Self {
            files: FileState::new(),
            downloader: StoredValue::new(downloader),
        }
    }

    /// Seed the file state from the page.
    ///
    /// Details embedded by the server win over the URL hash, which only
    /// carries the name and raw path.
    pub fn load_initial_file(&self) {
        let route = FileRoute::current();
        match dom::load_embedded_details() {
            Some(details) => {
                self.files.route.set(route);
                self.files.set_details(Some(details));
            }
            None => self.files.navigate(route),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Loads the initial file from the page
/// - Renders the router
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    ctx.load_initial_file();
    provide_context(ctx);

    view! { <AppRouter /> }
}

//! File state store.
//!
//! Owns the lifecycle of the current [`FileDetails`]. Viewers only read it
//! through [`select_file_details`].

use leptos::prelude::*;

use crate::models::{FileDetails, FileRoute};
use crate::utils::log;

/// Reactive state of the currently viewed file.
///
/// `Copy` because all fields are Leptos signals.
#[derive(Clone, Copy)]
pub struct FileState {
    /// Route the details were last derived from.
    pub route: RwSignal<FileRoute>,
    /// Details of the current file, `None` when nothing is selected.
    pub details: RwSignal<Option<FileDetails>>,
}

impl FileState {
    pub fn new() -> Self {
        Self {
            route: RwSignal::new(FileRoute::None),
            details: RwSignal::new(None),
        }
    }

    /// Replace the current details.
    pub fn set_details(&self, details: Option<FileDetails>) {
        self.details.set(details);
    }

    /// Follow a route change.
    ///
    /// Details are rebuilt from the route unless it is unchanged, so that
    /// embedded details (which carry MIME type and size) survive the initial
    /// route sync.
    pub fn navigate(&self, route: FileRoute) {
        if self.route.get_untracked() == route && self.details.with_untracked(Option::is_some) {
            return;
        }
        log::info(&format!("route: {}", route.to_hash()));
        self.details.set(FileDetails::from_route(&route));
        self.route.set(route);
    }
}

impl Default for FileState {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the current file details from the store.
///
/// Tracks the underlying signal when called inside a reactive scope.
pub fn select_file_details(state: &FileState) -> Option<FileDetails> {
    state.details.get()
}

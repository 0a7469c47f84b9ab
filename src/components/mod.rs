//! UI components built with Leptos.
//!
//! - [`router`] - Hash routing (main entry point)
//! - [`fileviewer`] - File viewers (image preview, download fallback)
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod fileviewer;
pub mod icons;
pub mod router;

pub use router::AppRouter;

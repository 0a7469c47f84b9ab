//! Snapshot file viewer.
//!
//! A Leptos client-side app that previews a file stored in a snapshot and
//! offers it for download.

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use app::{App, AppContext};

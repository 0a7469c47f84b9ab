//! Utility modules for DOM, downloads, logging and formatting.
//!
//! Provides:
//! - [`trigger_download`], [`Downloader`] - Browser file downloads
//! - [`dom`] - Window/document access and embedded page data
//! - [`log`] - Console logging
//! - [`url`] - Percent-encoding of snapshot paths

pub mod dom;
mod download;
pub mod format;
pub mod log;
pub mod url;

pub use download::{BrowserDownloader, Downloader, download_name, trigger_download};

//! Custom error types for the application.
//!
//! - [`DownloadError`] - Browser download triggering errors

use thiserror::Error;

/// Errors raised while triggering a browser download.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DownloadError {
    /// Browser window not available
    #[error("Browser window not available")]
    NoWindow,
    /// Window has no document
    #[error("Document not available")]
    NoDocument,
    /// Failed to create or attach the temporary link element
    #[error("Failed to create download link")]
    ElementCreationFailed,
    /// Nothing to download
    #[error("Download path is empty")]
    EmptyPath,
}

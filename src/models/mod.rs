//! Data models and types for the application.
//!
//! - [`FileDetails`], [`FileKind`] - Metadata of the viewed file
//! - [`FileRoute`] - Hash-based snapshot file addressing

mod file;
mod route;

pub use file::{FileDetails, FileKind};
pub use route::FileRoute;

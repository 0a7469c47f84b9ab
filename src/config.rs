//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name shown in the document title.
pub const APP_NAME: &str = "snapshot viewer";

/// Id of the element the application is mounted into.
pub const ROOT_ELEMENT_ID: &str = "app";

// =============================================================================
// Snapshot Server
// =============================================================================

/// Path prefix of the raw object endpoint (`/raw/{snapshot}:{path}`).
pub const RAW_PREFIX: &str = "/raw";

/// Id of the `<script type="application/json">` element a server page may use
/// to embed the current file details.
pub const EMBEDDED_DETAILS_ID: &str = "file-details";

// =============================================================================
// File Types
// =============================================================================

/// Extensions rendered by the image viewer when no MIME type is known.
pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "svg", "bmp", "ico", "avif",
];

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

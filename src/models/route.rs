//! Hash-based routing for snapshot file addressing.
//!
//! URL format: `#/<snapshot>:<path>` (e.g., `#/9f2c41d0:/home/user/photo.png`),
//! mirroring the `{snapshot}:{path}` form used by the raw object endpoint.

use crate::utils::url;

/// The file currently addressed by the URL hash.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum FileRoute {
    /// Nothing selected: empty or malformed hash, or a directory.
    #[default]
    None,
    /// A file inside a snapshot.
    File {
        /// Snapshot identifier (never empty).
        snapshot: String,
        /// Absolute path inside the snapshot (always starts with `/`).
        path: String,
    },
}

impl FileRoute {
    /// Parse a URL hash into a route.
    ///
    /// The hash is expected to be already percent-decoded.
    pub fn from_hash(hash: &str) -> Self {
        let target = hash.trim_start_matches('#').trim_start_matches('/');

        let Some((snapshot, path)) = target.split_once(':') else {
            return Self::None;
        };

        let snapshot = snapshot.trim();
        if snapshot.is_empty() || snapshot.contains('/') {
            return Self::None;
        }

        let path = path.trim_start_matches('/');
        if path.is_empty() || path.ends_with('/') {
            return Self::None;
        }

        Self::File {
            snapshot: snapshot.to_string(),
            path: format!("/{}", path),
        }
    }

    /// Convert the route back to a URL hash.
    pub fn to_hash(&self) -> String {
        match self {
            Self::None => "#/".to_string(),
            Self::File { snapshot, path } => format!("#/{}:{}", snapshot, path),
        }
    }

    /// Get the current route from the browser URL.
    pub fn current() -> Self {
        let hash = web_sys::window()
            .and_then(|w| w.location().hash().ok())
            .unwrap_or_default();
        Self::from_hash(&url::decode(&hash))
    }

    /// Last path segment, used as the file name.
    pub fn file_name(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::File { path, .. } => path.rsplit('/').next().filter(|s| !s.is_empty()),
        }
    }
}

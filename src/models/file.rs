//! File metadata shared between the state store and the viewers.

use serde::{Deserialize, Serialize};

use super::FileRoute;
use crate::config::{IMAGE_EXTENSIONS, RAW_PREFIX};
use crate::utils::url;

/// Metadata describing the currently viewed file.
///
/// `raw_path` is used verbatim as the image source and download target.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDetails {
    pub name: String,
    pub raw_path: String,
    #[serde(default)]
    pub mime: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
}

impl FileDetails {
    pub fn new(name: impl Into<String>, raw_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            raw_path: raw_path.into(),
            mime: None,
            size: None,
        }
    }

    /// Build details for a routed snapshot file.
    ///
    /// The raw path points at `{RAW_PREFIX}/{snapshot}:{path}`, with the
    /// snapshot id and each path segment percent-encoded.
    pub fn from_route(route: &FileRoute) -> Option<Self> {
        match route {
            FileRoute::None => None,
            FileRoute::File { snapshot, path } => Some(Self::new(
                route.file_name().unwrap_or_default(),
                format!(
                    "{}/{}:{}",
                    RAW_PREFIX,
                    url::encode_segment(snapshot),
                    url::encode_path(path)
                ),
            )),
        }
    }

    /// Lowercased extension of the file name, if any.
    pub fn extension(&self) -> Option<String> {
        self.name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_lowercase())
            .filter(|ext| !ext.is_empty())
    }
}

/// Which viewer renders a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Other,
}

impl FileKind {
    /// Detect the kind from the MIME type, falling back to the extension.
    pub fn from_details(details: &FileDetails) -> Self {
        if let Some(mime) = details.mime.as_deref() {
            return if mime.starts_with("image/") {
                Self::Image
            } else {
                Self::Other
            };
        }

        match details.extension() {
            Some(ext) if IMAGE_EXTENSIONS.contains(&ext.as_str()) => Self::Image,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_route() {
        let route = FileRoute::from_hash("#/9f2c41d0:/home/user/a.png");
        let details = FileDetails::from_route(&route).unwrap();
        assert_eq!(details.name, "a.png");
        assert_eq!(details.raw_path, "/raw/9f2c41d0:/home/user/a.png");
        assert_eq!(details.mime, None);

        assert_eq!(FileDetails::from_route(&FileRoute::None), None);
    }

    #[test]
    fn test_from_route_encodes_raw_path() {
        let raw_path = |hash: &str| {
            FileDetails::from_route(&FileRoute::from_hash(hash))
                .unwrap()
                .raw_path
        };

        assert_eq!(raw_path("#/abc:/photos/a#1.png"), "/raw/abc:/photos/a%231.png");
        assert_eq!(raw_path("#/abc:/q/why?.png"), "/raw/abc:/q/why%3F.png");
        assert_eq!(raw_path("#/abc:/docs/100%.png"), "/raw/abc:/docs/100%25.png");
        assert_eq!(
            raw_path("#/abc:/my photos/a b.png"),
            "/raw/abc:/my%20photos/a%20b.png"
        );

        // The name stays decoded: it is the alt text and the saved file name.
        let route = FileRoute::from_hash("#/abc:/photos/a#1.png");
        let details = FileDetails::from_route(&route).unwrap();
        assert_eq!(details.name, "a#1.png");
    }

    #[test]
    fn test_deserialize_embedded() {
        let details: FileDetails =
            serde_json::from_str(r#"{"name":"a.png","rawPath":"/files/a.png"}"#).unwrap();
        assert_eq!(details, FileDetails::new("a.png", "/files/a.png"));

        let details: FileDetails = serde_json::from_str(
            r#"{"name":"notes.txt","rawPath":"/raw/x:/notes.txt","mime":"text/plain","size":42}"#,
        )
        .unwrap();
        assert_eq!(details.mime.as_deref(), Some("text/plain"));
        assert_eq!(details.size, Some(42));
    }

    #[test]
    fn test_kind_detection() {
        assert_eq!(
            FileKind::from_details(&FileDetails::new("a.png", "/files/a.png")),
            FileKind::Image
        );
        assert_eq!(
            FileKind::from_details(&FileDetails::new("PHOTO.JPG", "/files/PHOTO.JPG")),
            FileKind::Image
        );
        assert_eq!(
            FileKind::from_details(&FileDetails::new("notes.txt", "/files/notes.txt")),
            FileKind::Other
        );
        assert_eq!(
            FileKind::from_details(&FileDetails::new("Makefile", "/files/Makefile")),
            FileKind::Other
        );
    }

    #[test]
    fn test_mime_overrides_extension() {
        let mut details = FileDetails::new("blob", "/raw/x:/blob");
        details.mime = Some("image/png".to_string());
        assert_eq!(FileKind::from_details(&details), FileKind::Image);

        let mut details = FileDetails::new("fake.png", "/raw/x:/fake.png");
        details.mime = Some("application/octet-stream".to_string());
        assert_eq!(FileKind::from_details(&details), FileKind::Other);
    }
}

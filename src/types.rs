//! Media types shared by the album tree, the manifests, and the renderer.
//!
//! Media records come from the external file scanner and metadata extractor.
//! The album tree never validates them: a missing date stays `None` and
//! simply sorts last or drops out of date ranges.

use chrono::{DateTime, Utc};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::sync::Arc;

/// Thumbnail shown in place of a preview when an album runs out of media.
pub const MISSING_THUMBNAIL: &str = "public/missing.png";

/// Kind of a media item.
///
/// Scanner records with any other `type` (or none) parse as `Other`: the file
/// stays in its album and its previews but is neither a photo nor a video.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
    #[default]
    #[serde(other)]
    Other,
}

/// Metadata extracted from the file (EXIF, container headers, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
}

/// Output URLs for the rendered media.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaUrls {
    pub thumbnail: String,
}

/// A photo or video belonging to an album.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaFile {
    #[serde(rename = "type", default)]
    pub kind: MediaKind,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub meta: MediaMeta,
    #[serde(default)]
    pub urls: MediaUrls,
}

impl MediaFile {
    pub fn new(kind: MediaKind, filename: impl Into<String>) -> Self {
        let filename = filename.into();
        Self {
            kind,
            urls: MediaUrls {
                thumbnail: format!("media/thumbs/{filename}"),
            },
            filename,
            meta: MediaMeta::default(),
        }
    }

    pub fn image(filename: impl Into<String>) -> Self {
        Self::new(MediaKind::Image, filename)
    }

    pub fn video(filename: impl Into<String>) -> Self {
        Self::new(MediaKind::Video, filename)
    }

    pub fn with_date(mut self, date: DateTime<Utc>) -> Self {
        self.meta.date = Some(date);
        self
    }

    pub fn with_thumbnail(mut self, thumbnail: impl Into<String>) -> Self {
        self.urls.thumbnail = thumbnail.into();
        self
    }

    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.meta.date
    }
}

/// One slot of an album's preview strip.
///
/// `Media` points at a file owned somewhere in the album's subtree. `Missing`
/// is the shared placeholder used to pad the strip; it is recognized by its
/// variant, never by comparing fields.
#[derive(Debug, Clone)]
pub enum Preview {
    Media(Arc<MediaFile>),
    Missing,
}

impl Preview {
    pub fn is_missing(&self) -> bool {
        matches!(self, Preview::Missing)
    }

    pub fn media(&self) -> Option<&MediaFile> {
        match self {
            Preview::Media(file) => Some(file),
            Preview::Missing => None,
        }
    }

    pub fn thumbnail(&self) -> &str {
        match self {
            Preview::Media(file) => &file.urls.thumbnail,
            Preview::Missing => MISSING_THUMBNAIL,
        }
    }
}

/// Previews are equal when they reference the same file, not an equal copy.
impl PartialEq for Preview {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Preview::Media(a), Preview::Media(b)) => Arc::ptr_eq(a, b),
            (Preview::Missing, Preview::Missing) => true,
            _ => false,
        }
    }
}

impl Serialize for Preview {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Preview::Media(file) => file.serialize(serializer),
            Preview::Missing => {
                let mut state = serializer.serialize_struct("Missing", 2)?;
                state.serialize_field("missing", &true)?;
                state.serialize_field(
                    "urls",
                    &MediaUrls {
                        thumbnail: MISSING_THUMBNAIL.to_string(),
                    },
                )?;
                state.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_kind_uses_lowercase_names() {
        let file: MediaFile = serde_json::from_str(
            r#"{"type": "video", "filename": "clip.mp4", "urls": {"thumbnail": "t.jpg"}}"#,
        )
        .unwrap();
        assert_eq!(file.kind, MediaKind::Video);
        assert_eq!(file.date(), None);
        assert_eq!(file.urls.thumbnail, "t.jpg");
    }

    #[test]
    fn unrecognized_media_records_still_parse() {
        let raw: MediaFile =
            serde_json::from_str(r#"{"type": "raw", "filename": "IMG_0001.CR2"}"#).unwrap();
        assert_eq!(raw.kind, MediaKind::Other);
        assert_eq!(raw.filename, "IMG_0001.CR2");

        let bare: MediaFile = serde_json::from_str(r#"{"urls": {"thumbnail": "t.jpg"}}"#).unwrap();
        assert_eq!(bare.kind, MediaKind::Other);
        assert_eq!(bare.filename, "");
        assert_eq!(bare.urls.thumbnail, "t.jpg");
    }

    #[test]
    fn media_date_parsed_from_rfc3339() {
        let file: MediaFile = serde_json::from_str(
            r#"{"type": "image", "filename": "a.jpg", "meta": {"date": "2023-07-01T10:00:00Z"}}"#,
        )
        .unwrap();
        assert_eq!(
            file.date().unwrap().to_rfc3339(),
            "2023-07-01T10:00:00+00:00"
        );
    }

    #[test]
    fn preview_equality_is_identity() {
        let a = Arc::new(MediaFile::image("a.jpg"));
        let copy = Arc::new(MediaFile::image("a.jpg"));
        assert_eq!(Preview::Media(a.clone()), Preview::Media(a.clone()));
        assert_ne!(Preview::Media(a.clone()), Preview::Media(copy));
        assert_eq!(Preview::Missing, Preview::Missing);
        assert_ne!(Preview::Media(a), Preview::Missing);
    }

    #[test]
    fn missing_preview_has_placeholder_thumbnail() {
        assert!(Preview::Missing.is_missing());
        assert_eq!(Preview::Missing.thumbnail(), "public/missing.png");
        assert!(Preview::Missing.media().is_none());
    }

    #[test]
    fn missing_preview_serializes_as_placeholder() {
        let json = serde_json::to_value(Preview::Missing).unwrap();
        assert_eq!(json["missing"], true);
        assert_eq!(json["urls"]["thumbnail"], "public/missing.png");
    }

    #[test]
    fn media_preview_serializes_as_file() {
        let file = Arc::new(MediaFile::image("a.jpg").with_thumbnail("thumbs/a.jpg"));
        let json = serde_json::to_value(Preview::Media(file)).unwrap();
        assert_eq!(json["type"], "image");
        assert_eq!(json["filename"], "a.jpg");
        assert_eq!(json["urls"]["thumbnail"], "thumbs/a.jpg");
    }
}

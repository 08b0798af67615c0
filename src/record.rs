//! Output types for media extraction.
//!
//! This module defines the structured, JSON-serializable records produced by
//! the extraction pipeline. Records are request-scoped: built once per
//! extraction call and discarded after serialization, with no persistence.

use serde::Serialize;
use serde_json::{Map, Value};

/// Caption attached to a media item, taken from a `<figcaption>` descendant.
///
/// Both the rendered markup and the flattened text are kept, since gallery
/// clients want the markup while accessibility layers want plain text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Caption {
    /// Inner HTML of the caption element.
    pub html: String,

    /// Plain text content of the caption element.
    pub text: String,
}

/// A single playable rendition of a video, from a `<source>` child.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VideoSource {
    /// Source URL (`src` attribute).
    pub url: String,

    /// MIME type, taken from the `type` attribute up to the first `;`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,

    /// Codec names parsed from the `codecs="..."` parameter of the `type`
    /// attribute, comma-split.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codecs: Option<Vec<String>>,

    /// Display name (`data-title` attribute).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Short display name (`data-shorttitle` attribute).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_name: Option<String>,

    /// Pixel width, preferring `data-file-width` over `data-width`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u64>,

    /// Pixel height, preferring `data-file-height` over `data-height`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u64>,
}

/// Original rendition of a math-formula image.
///
/// Mathoid renders formulas to SVG, so the MIME type is fixed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MathSource {
    /// The `src` attribute of the rendered formula image.
    pub source: String,

    /// Always `image/svg`.
    pub mime: String,
}

impl MathSource {
    /// Build a math source for the given rendered image URL.
    #[must_use]
    pub fn new(source: String) -> Self {
        Self { source, mime: "image/svg".to_string() }
    }
}

/// How an audio item should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AudioKind {
    /// A pronunciation clip linked from an IPA transcription.
    Pronunciation,
    /// A Spoken Wikipedia narration of the article.
    Spoken,
    /// Any other audio.
    Generic,
}

/// One media item extracted from a Parsoid document.
///
/// Field visibility in the serialized payload follows the gallery contract:
/// `None` fields are omitted, `show_in_gallery` is emitted as `showInGallery`,
/// and metadata merged from an external per-title map is flattened into the
/// top level. After the merge step `title` is always `None` (it is a join key,
/// not a user-facing field).
#[derive(Debug, Clone, Default, Serialize)]
pub struct MediaRecord {
    /// File page title, e.g. `File:Foo.jpg`. Absent for math images, and
    /// stripped from every record by the merge step.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// `data-mw-section-id` of the nearest enclosing `<section>`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<i64>,

    /// Output discriminator: `image`, `video`, `audio`, or `unknown`.
    #[serde(rename = "type")]
    pub media_type: String,

    /// Caption from the nearest `<figcaption>` descendant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<Caption>,

    /// Playback start offset in seconds (video only, from `data-mw`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<f64>,

    /// Playback end offset in seconds (video only, from `data-mw`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<f64>,

    /// Poster frame offset in seconds (video only, from `data-mw`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumb_time: Option<f64>,

    /// Audio presentation kind (audio only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio_type: Option<AudioKind>,

    /// `id` of the nearest enclosing gallery container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gallery_id: Option<String>,

    /// Playable renditions in document order (video only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<VideoSource>>,

    /// Original math-image rendition. Never present on merged video records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original: Option<MathSource>,

    /// True only for images and videos.
    #[serde(rename = "showInGallery")]
    pub show_in_gallery: bool,

    /// Fields shallow-merged from the external per-title metadata map.
    #[serde(flatten, skip_serializing_if = "Map::is_empty")]
    pub extra: Map<String, Value>,
}

impl MediaRecord {
    /// Identity key used for deduplication: the derived title when present,
    /// otherwise the math-image source URL.
    #[must_use]
    pub fn dedup_key(&self) -> Option<&str> {
        self.title
            .as_deref()
            .or_else(|| self.original.as_ref().map(|o| o.source.as_str()))
    }
}

//! # parsoid-media
//!
//! Media list extraction from MediaWiki Parsoid HTML.
//!
//! This library walks a Parsoid-rendered page, classifies its media markers
//! (images, video, audio, pronunciation clips, math images) into a closed
//! set of variants, applies per-variant field extraction and filtering
//! heuristics, and produces an ordered, deduplicated list of records suitable
//! for a mobile media gallery. An optional second pass merges in externally
//! supplied per-title metadata.
//!
//! ## Quick Start
//!
//! ```rust
//! use parsoid_media::extract;
//!
//! let html = r#"<section data-mw-section-id="1">
//!   <figure typeof="mw:Image">
//!     <img resource="./File:Foo.jpg" src="foo.jpg" width="100" height="100">
//!     <figcaption>A foo</figcaption>
//!   </figure>
//! </section>"#;
//!
//! let media = extract(html)?;
//! assert_eq!(media[0].title.as_deref(), Some("File:Foo.jpg"));
//! assert_eq!(media[0].media_type, "image");
//! # Ok::<(), parsoid_media::Error>(())
//! ```
//!
//! ## Scope
//!
//! Input is always already-rendered Parsoid HTML, never wikitext. Fetching
//! the document, querying the MediaWiki API for the metadata map, and
//! serving the result are the caller's concern; extraction itself is a pure,
//! synchronous function of its inputs.

mod error;
mod extract;

/// DOM helpers over `dom_query` (attribute access, ancestor walks).
pub mod dom;

/// Output record types.
pub mod record;

/// Media classification, contract constants, and candidate filtering.
pub mod selector;

/// External metadata enrichment.
pub mod merge;

use std::collections::HashMap;

use serde_json::Value;

// Public API - re-exports
pub use error::{Error, Result};
pub use merge::merge;
pub use record::{AudioKind, Caption, MathSource, MediaRecord, VideoSource};
pub use selector::MediaType;

/// Extracts the ordered media list from a Parsoid HTML document.
///
/// Records come back in document order of first appearance, deduplicated by
/// file title (math images by their source URL). Non-fatal problems inside
/// individual elements degrade to omitted fields or excluded elements; the
/// only error is a document that cannot be parsed at all.
///
/// # Example
///
/// ```rust
/// use parsoid_media::extract;
///
/// let html = r#"<video typeof="mw:Video" resource="./File:Clip.webm">
///   <source src="//upload.example/clip.webm" type='video/webm; codecs="vp8, vorbis"'>
/// </video>"#;
/// let media = extract(html)?;
/// assert_eq!(media[0].media_type, "video");
/// # Ok::<(), parsoid_media::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract(html: &str) -> Result<Vec<MediaRecord>> {
    extract::extract_media(html)
}

/// Extracts the media list and merges in external per-title metadata.
///
/// Composes [`extract`] and [`merge`]: the metadata map (as returned by a
/// MediaWiki page-metadata batch lookup, keyed by file title) is shallow-
/// merged into each record, after which titles are stripped and video
/// records lose any `original` field.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use parsoid_media::extract_with_metadata;
/// use serde_json::json;
///
/// let html = r#"<figure typeof="mw:Image">
///   <img resource="./File:Foo.jpg" src="foo.jpg"></figure>"#;
/// let mut metadata = HashMap::new();
/// metadata.insert("File:Foo.jpg".to_string(), json!({"description": "A foo"}));
///
/// let media = extract_with_metadata(html, &metadata)?;
/// assert!(media[0].title.is_none());
/// assert_eq!(media[0].extra["description"], "A foo");
/// # Ok::<(), parsoid_media::Error>(())
/// ```
#[allow(clippy::missing_errors_doc)]
pub fn extract_with_metadata(
    html: &str,
    metadata: &HashMap<String, Value>,
) -> Result<Vec<MediaRecord>> {
    let records = extract(html)?;
    Ok(merge::merge(metadata, records))
}

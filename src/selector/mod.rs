//! Selector Infrastructure
//!
//! Parsoid contract constants and candidate enumeration for media extraction.
//! The attribute names and class markers below are wire-contract values
//! emitted by the MediaWiki rendering pipeline and must match exactly.

use crate::dom::{self, Document, Selection};

pub mod classify;
pub mod filters;

pub use classify::{classify, MediaType};
pub use filters::{is_disallowed, is_too_small};

/// Class marking an inline Mathoid formula rendering. Math images carry no
/// `typeof` marker and are recognized by class membership alone.
pub const MATHOID_IMAGE_CLASS: &str = "mwe-math-fallback-image-inline";

/// Class on gallery container elements.
pub const GALLERY_CLASS: &str = "gallery";

/// `id` of the Spoken Wikipedia section container. Audio inside it is
/// narration of the article rather than generic audio.
pub const SPOKEN_WIKIPEDIA_ID: &str = "section_SpokenWikipedia";

/// Classes that exclude an element (and everything inside it) from the media
/// list: maintenance/metadata templates and elements opted out of the viewer.
pub const DISALLOWED_CLASSES: &[&str] = &["metadata", "noviewer"];

/// Minimum declared pixel size for gallery images. Smaller images are icons.
pub const MIN_IMAGE_DIMENSION: u64 = 48;

/// True if the element matches the union of known media selectors:
/// `[typeof^="mw:Image"]`, `[typeof^="mw:Video"]`, `[typeof^="mw:Audio"]`,
/// `[rel="mw:MediaLink"]`, or the Mathoid image class.
#[must_use]
pub fn is_media_candidate(sel: &Selection) -> bool {
    let type_of = dom::attr(sel, "typeof");
    type_of.starts_with("mw:Image")
        || type_of.starts_with("mw:Video")
        || type_of.starts_with("mw:Audio")
        || dom::attr(sel, "rel") == "mw:MediaLink"
        || dom::has_class(sel, MATHOID_IMAGE_CLASS)
}

/// Enumerate all media candidates in the document, in document order.
///
/// The walk visits every element once and applies [`is_media_candidate`],
/// which keeps ordering independent of how the selector union is evaluated.
#[must_use]
pub fn candidates(doc: &Document) -> Vec<Selection<'_>> {
    let mut matches = Vec::new();
    for node in doc.select("*").nodes() {
        let sel = Selection::from(*node);
        if is_media_candidate(&sel) {
            matches.push(sel);
        }
    }
    matches
}

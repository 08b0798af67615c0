//! Media type classification.
//!
//! Maps a DOM element onto the closed set of media variants. Classification
//! is a pure function of the element's attributes: the same element always
//! classifies the same way, and an element matching no rule is simply not a
//! media candidate (classification precedes all filtering).

use crate::dom::{self, Selection};
use crate::selector::MATHOID_IMAGE_CLASS;

/// The closed set of media variants a Parsoid element can classify into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// Still image (`typeof^="mw:Image"`).
    Image,
    /// Video (`typeof^="mw:Video"`).
    Video,
    /// Audio wrapper (`typeof^="mw:Audio"`).
    Audio,
    /// Pronunciation clip (`rel="mw:MediaLink"`).
    Pronunciation,
    /// Mathoid formula rendering, recognized by class membership.
    MathImage,
    /// Any other `mw:*` typed element; kept as a defensive catch-all.
    Unknown,
}

impl MediaType {
    /// CSS selector locating the child element that carries the primary
    /// resource URL, where the variant has one.
    #[must_use]
    pub fn resource_selector(self) -> Option<&'static str> {
        match self {
            MediaType::Image => Some("img"),
            MediaType::Video => Some("video"),
            MediaType::Audio => Some("audio, video"),
            MediaType::Pronunciation | MediaType::MathImage | MediaType::Unknown => None,
        }
    }

    /// String discriminator used in the output payload.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Image | MediaType::MathImage => "image",
            MediaType::Video => "video",
            MediaType::Audio | MediaType::Pronunciation => "audio",
            MediaType::Unknown => "unknown",
        }
    }

    /// Only images and videos surface in the gallery.
    #[must_use]
    pub fn shows_in_gallery(self) -> bool {
        matches!(self, MediaType::Image | MediaType::Video)
    }
}

/// Classify an element into its media variant, or `None` if the element
/// carries no media marker at all.
///
/// Priority order: `typeof` prefix (first 8 characters), then
/// `rel="mw:MediaLink"`, then the Mathoid image class. A non-empty `typeof`
/// that matches none of the known prefixes yields [`MediaType::Unknown`]
/// rather than falling through to the later rules.
#[must_use]
pub fn classify(sel: &Selection) -> Option<MediaType> {
    if let Some(type_of) = dom::get_attribute(sel, "typeof") {
        if !type_of.is_empty() {
            return Some(match type_of.get(..8) {
                Some("mw:Image") => MediaType::Image,
                Some("mw:Video") => MediaType::Video,
                Some("mw:Audio") => MediaType::Audio,
                _ => MediaType::Unknown,
            });
        }
    }
    if dom::attr(sel, "rel") == "mw:MediaLink" {
        return Some(MediaType::Pronunciation);
    }
    if dom::has_class(sel, MATHOID_IMAGE_CLASS) {
        return Some(MediaType::MathImage);
    }
    None
}

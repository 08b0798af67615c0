//! Candidate filtering predicates.
//!
//! Two filters run after classification: a class blacklist that walks the
//! full ancestor chain, and a minimum-size check for image resources.

use crate::dom::{self, Selection};
use crate::selector::{DISALLOWED_CLASSES, MIN_IMAGE_DIMENSION};

/// True if the element or any ancestor carries a blacklisted class.
///
/// The ancestor walk goes all the way to the document root; there is no
/// depth limit.
#[must_use]
pub fn is_disallowed(sel: &Selection) -> bool {
    dom::self_or_ancestor(sel, |ancestor| {
        DISALLOWED_CLASSES.iter().any(|class| dom::has_class(ancestor, class))
    })
}

/// True if the image's declared `width` or `height` is below the minimum
/// gallery size.
///
/// A missing or non-numeric dimension never excludes the element: only a
/// dimension that parses and falls below the threshold counts as too small.
#[must_use]
pub fn is_too_small(img: &Selection) -> bool {
    below_min(img, "width") || below_min(img, "height")
}

fn below_min(sel: &Selection, name: &str) -> bool {
    dom::get_attribute(sel, name)
        .and_then(|v| v.trim().parse::<u64>().ok())
        .is_some_and(|px| px < MIN_IMAGE_DIMENSION)
}

//! DOM Operations Adapter
//!
//! Thin helpers over the `dom_query` crate, giving the extraction pipeline a
//! small, consistent vocabulary for attribute access and ancestor walks. The
//! parsed document is treated as read-only throughout.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for external use
pub use tendril::StrTendril;

// === Parsing ===

/// Parse HTML string into document
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

// === Attribute Operations ===

/// Get any attribute value
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get any attribute (empty string if missing)
#[inline]
#[must_use]
pub fn attr(sel: &Selection, name: &str) -> String {
    get_attribute(sel, name).unwrap_or_default()
}

/// Get element ID attribute
#[inline]
#[must_use]
pub fn id(sel: &Selection) -> Option<String> {
    sel.attr("id").map(|s| s.to_string())
}

/// Get element class attribute (empty string if missing)
#[inline]
#[must_use]
pub fn class(sel: &Selection) -> String {
    sel.attr("class").map(|s| s.to_string()).unwrap_or_default()
}

/// Check whether the element's class attribute contains `name` as a
/// whitespace-separated token (substring matches do not count).
#[must_use]
pub fn has_class(sel: &Selection, name: &str) -> bool {
    class(sel).split_ascii_whitespace().any(|c| c == name)
}

// === Tag/Node Information ===

/// Get tag name (lowercase)
#[must_use]
pub fn tag_name(sel: &Selection) -> Option<String> {
    sel.nodes()
        .first()
        .and_then(dom_query::NodeRef::node_name)
        .map(|t| t.to_string())
}

// === Text Content ===

/// Get all text content of node and descendants
///
/// Returns `StrTendril` for zero-copy passing. Use `.to_string()` only when
/// you need owned storage.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Get inner HTML content
#[inline]
#[must_use]
pub fn inner_html(sel: &Selection) -> StrTendril {
    sel.inner_html()
}

// === Querying ===

/// Query single element by CSS selector
#[inline]
#[must_use]
pub fn query_selector<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select_single(selector)
}

/// Query all elements by CSS selector, in document order
#[inline]
#[must_use]
pub fn query_selector_all<'a>(sel: &Selection<'a>, selector: &str) -> Selection<'a> {
    sel.select(selector)
}

// === Tree Navigation ===

/// Get parent element
#[inline]
#[must_use]
pub fn parent<'a>(sel: &Selection<'a>) -> Selection<'a> {
    sel.parent()
}

/// Walk the ancestor chain from the element's parent up to the document
/// root, returning the nearest ancestor for which `pred` holds.
///
/// The walk has no depth limit; it terminates at the root.
#[must_use]
pub fn find_ancestor<'a, F>(sel: &Selection<'a>, pred: F) -> Option<Selection<'a>>
where
    F: Fn(&Selection<'a>) -> bool,
{
    let mut current = parent(sel);
    while current.exists() {
        if pred(&current) {
            return Some(current);
        }
        current = parent(&current);
    }
    None
}

/// True if the element itself or any ancestor satisfies `pred`.
#[must_use]
pub fn self_or_ancestor<'a, F>(sel: &Selection<'a>, pred: F) -> bool
where
    F: Fn(&Selection<'a>) -> bool,
{
    pred(sel) || find_ancestor(sel, pred).is_some()
}

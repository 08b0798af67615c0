//! Core media extraction algorithm.
//!
//! Walks the media candidates of a Parsoid document in document order,
//! applies per-variant field extraction, and deduplicates by identity key.
//! The pipeline degrades gracefully: a malformed `data-mw` sidecar only
//! drops the time fields, and a candidate whose resource element cannot be
//! resolved is excluded rather than failing the document.

use std::collections::HashSet;
use std::sync::LazyLock;

use percent_encoding::percent_decode_str;
use regex::Regex;

use crate::dom::{self, Selection};
use crate::error::{Error, Result};
use crate::record::{AudioKind, Caption, MathSource, MediaRecord, VideoSource};
use crate::selector::{
    self, classify, is_disallowed, is_too_small, MediaType, SPOKEN_WIKIPEDIA_ID,
};

/// Captures the quoted codecs parameter of a `type` attribute, e.g.
/// `video/webm; codecs="vp8, vorbis"`.
#[allow(clippy::expect_used)]
static CODECS_PARAM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"codecs="([^"]*)""#).expect("CODECS_PARAM regex")
});

/// Extract the ordered, deduplicated media list from a Parsoid HTML document.
pub(crate) fn extract_media(html: &str) -> Result<Vec<MediaRecord>> {
    let doc = dom::parse(html);
    if doc.select("*").is_empty() {
        return Err(Error::ParseError("document has no elements".to_string()));
    }

    let mut records = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for cand in selector::candidates(&doc) {
        let Some(media_type) = classify(&cand) else {
            continue;
        };
        if is_disallowed(&cand) {
            continue;
        }

        // Math images bypass resource resolution and the size filter.
        let resource = if media_type == MediaType::MathImage {
            None
        } else {
            match media_type.resource_selector() {
                Some(sel) => {
                    let Some(resource) = resolve_resource(&cand, sel) else {
                        continue;
                    };
                    if media_type == MediaType::Image && is_too_small(&resource) {
                        continue;
                    }
                    Some(resource)
                }
                None => None,
            }
        };

        let record = build_record(&cand, resource.as_ref(), media_type);

        if let Some(key) = record.dedup_key() {
            if !seen.insert(key.to_string()) {
                continue;
            }
        }
        records.push(record);
    }

    Ok(records)
}

/// Resolve the element carrying the media resource.
///
/// Parsoid usually places the `typeof` marker on a wrapper (`figure`, `span`)
/// with the `img`/`video` element inside, but the marker can also sit on the
/// resource element itself, so the candidate is checked before descending.
fn resolve_resource<'a>(cand: &Selection<'a>, resource_selector: &str) -> Option<Selection<'a>> {
    if let Some(tag) = dom::tag_name(cand) {
        if resource_selector.split(',').any(|s| s.trim() == tag) {
            return Some(cand.clone());
        }
    }
    let resource = dom::query_selector(cand, resource_selector);
    resource.exists().then_some(resource)
}

fn build_record(
    cand: &Selection,
    resource: Option<&Selection>,
    media_type: MediaType,
) -> MediaRecord {
    let mut record = MediaRecord {
        media_type: media_type.as_str().to_string(),
        show_in_gallery: media_type.shows_in_gallery(),
        title: extract_title(cand, resource, media_type),
        section_id: section_id(cand),
        gallery_id: gallery_id(cand),
        caption: extract_caption(cand),
        ..MediaRecord::default()
    };

    match media_type {
        MediaType::Video => {
            if let Some(times) = parse_data_mw_times(cand) {
                record.start_time = times.start;
                record.end_time = times.end;
                record.thumb_time = times.thumb;
            }
            record.sources = Some(extract_sources(cand));
        }
        MediaType::Pronunciation => {
            record.audio_type = Some(AudioKind::Pronunciation);
        }
        MediaType::Audio => {
            record.audio_type = Some(if in_spoken_wikipedia(cand) {
                AudioKind::Spoken
            } else {
                AudioKind::Generic
            });
        }
        MediaType::MathImage => {
            record.original = dom::get_attribute(cand, "src").map(MathSource::new);
        }
        MediaType::Image | MediaType::Unknown => {}
    }

    record
}

/// Derive the file page title for a candidate.
///
/// Pronunciation links carry the bare file name in their own `title`
/// attribute; everything else takes the `resource` attribute of the resource
/// element, with the leading relative-path marker stripped. Math images have
/// no title at all.
fn extract_title(
    cand: &Selection,
    resource: Option<&Selection>,
    media_type: MediaType,
) -> Option<String> {
    match media_type {
        MediaType::MathImage => None,
        MediaType::Pronunciation => dom::get_attribute(cand, "title")
            .map(|name| percent_decode(&format!("File:{name}"))),
        _ => resource
            .and_then(|r| dom::get_attribute(r, "resource"))
            .map(|raw| percent_decode(raw.strip_prefix("./").unwrap_or(&raw))),
    }
}

fn percent_decode(s: &str) -> String {
    percent_decode_str(s).decode_utf8_lossy().into_owned()
}

/// `data-mw-section-id` of the nearest enclosing `<section>`, if any.
fn section_id(cand: &Selection) -> Option<i64> {
    let section = dom::find_ancestor(cand, |a| dom::tag_name(a).as_deref() == Some("section"))?;
    dom::get_attribute(&section, "data-mw-section-id")?.trim().parse().ok()
}

/// `id` of the nearest enclosing gallery container, if any.
fn gallery_id(cand: &Selection) -> Option<String> {
    let gallery = dom::find_ancestor(cand, |a| dom::has_class(a, selector::GALLERY_CLASS))?;
    dom::id(&gallery)
}

fn extract_caption(cand: &Selection) -> Option<Caption> {
    let figcaption = dom::query_selector(cand, "figcaption");
    if !figcaption.exists() {
        return None;
    }
    Some(Caption {
        html: dom::inner_html(&figcaption).to_string(),
        text: dom::text_content(&figcaption).to_string(),
    })
}

fn in_spoken_wikipedia(cand: &Selection) -> bool {
    dom::find_ancestor(cand, |a| dom::id(a).as_deref() == Some(SPOKEN_WIKIPEDIA_ID)).is_some()
}

struct MediaTimes {
    start: Option<f64>,
    end: Option<f64>,
    thumb: Option<f64>,
}

/// Parse playback offsets out of the element's `data-mw` JSON sidecar.
///
/// A missing or malformed sidecar yields `None`; it never fails extraction.
fn parse_data_mw_times(cand: &Selection) -> Option<MediaTimes> {
    let raw = dom::get_attribute(cand, "data-mw")?;
    let value: serde_json::Value = serde_json::from_str(&raw).ok()?;
    Some(MediaTimes {
        start: time_field(&value, "starttime"),
        end: time_field(&value, "endtime"),
        thumb: time_field(&value, "thumbtime"),
    })
}

/// Parsoid has emitted both JSON numbers and numeric strings for time
/// offsets over the years; accept either.
fn time_field(value: &serde_json::Value, key: &str) -> Option<f64> {
    match value.get(key)? {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Enumerate `<source>` descendants in document order.
fn extract_sources(cand: &Selection) -> Vec<VideoSource> {
    let mut sources = Vec::new();
    for node in dom::query_selector_all(cand, "source").nodes() {
        let source = Selection::from(*node);
        let Some(url) = dom::get_attribute(&source, "src") else {
            continue;
        };
        let type_attr = dom::get_attribute(&source, "type");
        sources.push(VideoSource {
            url,
            mime: type_attr.as_deref().map(mime_of),
            codecs: type_attr.as_deref().and_then(codecs_of),
            name: dom::get_attribute(&source, "data-title"),
            short_name: dom::get_attribute(&source, "data-shorttitle"),
            width: dimension(&source, "data-file-width", "data-width"),
            height: dimension(&source, "data-file-height", "data-height"),
        });
    }
    sources
}

/// MIME type is the `type` attribute up to the first `;`.
fn mime_of(type_attr: &str) -> String {
    type_attr.split(';').next().unwrap_or(type_attr).trim().to_string()
}

/// Codec list from the quoted `codecs` parameter, comma-split.
fn codecs_of(type_attr: &str) -> Option<Vec<String>> {
    let captures = CODECS_PARAM.captures(type_attr)?;
    Some(captures[1].split(',').map(|c| c.trim().to_string()).collect())
}

/// Pixel dimension, preferring the file-specific attribute over the generic
/// one.
fn dimension(source: &Selection, file_attr: &str, generic_attr: &str) -> Option<u64> {
    dom::get_attribute(source, file_attr)
        .or_else(|| dom::get_attribute(source, generic_attr))
        .and_then(|v| v.trim().parse().ok())
}

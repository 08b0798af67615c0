//! Enrichment merge against externally supplied per-title metadata.
//!
//! The metadata map comes from a MediaWiki API batch lookup keyed by file
//! page title (captions, descriptions, extmetadata). The merge is shallow
//! and never fails: a title absent from the map leaves the record with only
//! its directly extracted fields.

use std::collections::HashMap;

use serde_json::Value;

use crate::record::MediaRecord;

/// Merge external metadata into extracted records.
///
/// For each record with a title, the fields of the matching metadata object
/// are shallow-merged into the record. The title is then stripped from every
/// record (it is a join key, not a user-facing field), and any record that
/// carries a `sources` array (a video) has its `original` field removed.
#[must_use]
pub fn merge(metadata: &HashMap<String, Value>, records: Vec<MediaRecord>) -> Vec<MediaRecord> {
    records
        .into_iter()
        .map(|mut record| {
            if let Some(title) = record.title.take() {
                if let Some(Value::Object(fields)) = metadata.get(&title) {
                    for (key, value) in fields {
                        record.extra.insert(key.clone(), value.clone());
                    }
                }
            }
            if record.sources.is_some() {
                record.original = None;
            }
            record
        })
        .collect()
}

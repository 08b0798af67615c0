use std::collections::HashMap;

use parsoid_media::{extract, extract_with_metadata, merge};
use serde_json::json;

#[test]
fn merge_enriches_record_and_strips_title() {
    let html = r#"
        <figure typeof="mw:Image">
            <img resource="./File:Foo.jpg" src="foo.jpg" width="100" height="100">
        </figure>
    "#;
    let mut metadata = HashMap::new();
    metadata.insert("File:Foo.jpg".to_string(), json!({"description": "A foo"}));

    let media = extract_with_metadata(html, &metadata).unwrap();
    assert_eq!(media.len(), 1);
    assert!(media[0].title.is_none());
    assert_eq!(media[0].extra["description"], "A foo");

    let json = serde_json::to_value(&media).unwrap();
    let obj = json[0].as_object().unwrap();
    assert!(!obj.contains_key("title"));
    assert_eq!(obj["description"], "A foo");
}

#[test]
fn merged_video_never_exposes_original() {
    let html = r#"
        <video typeof="mw:Video" resource="./File:Clip.webm">
            <source src="//upload.example/clip.webm" type="video/webm"
                    data-width="640" data-height="360">
        </video>
    "#;

    let media = extract_with_metadata(html, &HashMap::new()).unwrap();
    assert_eq!(media.len(), 1);
    assert!(media[0].original.is_none());

    let json = serde_json::to_value(&media).unwrap();
    let obj = json[0].as_object().unwrap();
    assert!(!obj.contains_key("original"));
    assert!(!obj.contains_key("title"));

    let sources = obj["sources"].as_array().unwrap();
    assert_eq!(sources[0]["url"], "//upload.example/clip.webm");
    assert_eq!(sources[0]["width"], 640);
}

#[test]
fn records_missing_from_metadata_map_pass_through() {
    let html = r#"
        <figure typeof="mw:Image">
            <img resource="./File:Known.jpg" src="k.jpg" width="100" height="100">
        </figure>
        <figure typeof="mw:Image">
            <img resource="./File:Unknown.jpg" src="u.jpg" width="100" height="100">
        </figure>
    "#;
    let mut metadata = HashMap::new();
    metadata.insert("File:Known.jpg".to_string(), json!({"license": "pd"}));

    let media = extract_with_metadata(html, &metadata).unwrap();
    assert_eq!(media.len(), 2);
    assert_eq!(media[0].extra["license"], "pd");
    assert!(media[1].extra.is_empty());
}

#[test]
fn math_images_pass_through_the_merge_untouched() {
    let html = r#"<img class="mwe-math-fallback-image-inline" src="formula.svg">"#;

    let media = extract_with_metadata(html, &HashMap::new()).unwrap();
    assert_eq!(media.len(), 1);

    let json = serde_json::to_value(&media).unwrap();
    let obj = json[0].as_object().unwrap();
    assert_eq!(obj["original"]["source"], "formula.svg");
    assert_eq!(obj["original"]["mime"], "image/svg");
    assert!(!obj.contains_key("title"));
}

#[test]
fn merge_is_composable_with_a_separate_extract_call() {
    let html = r#"
        <figure typeof="mw:Image">
            <img resource="./File:Foo.jpg" src="f.jpg" width="100" height="100">
        </figure>
    "#;
    let records = extract(html).unwrap();
    assert_eq!(records[0].title.as_deref(), Some("File:Foo.jpg"));

    let mut metadata = HashMap::new();
    metadata.insert("File:Foo.jpg".to_string(), json!({"artist": "Someone"}));

    let merged = merge(&metadata, records);
    assert!(merged[0].title.is_none());
    assert_eq!(merged[0].extra["artist"], "Someone");
}

#[test]
fn serialized_records_use_gallery_contract_field_names() {
    let html = r#"
        <figure typeof="mw:Image">
            <img resource="./File:Foo.jpg" src="f.jpg" width="100" height="100">
        </figure>
    "#;

    let media = extract_with_metadata(html, &HashMap::new()).unwrap();
    let json = serde_json::to_value(&media).unwrap();
    let obj = json[0].as_object().unwrap();

    assert_eq!(obj["type"], "image");
    assert_eq!(obj["showInGallery"], true);
    // None fields are omitted entirely
    assert!(!obj.contains_key("caption"));
    assert!(!obj.contains_key("start_time"));
    assert!(!obj.contains_key("audio_type"));
}

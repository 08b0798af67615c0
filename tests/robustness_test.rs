use parsoid_media::extract;

#[test]
fn extract_does_not_panic_on_malformed_html_unclosed_tags() {
    let html = r#"<figure typeof="mw:Image"><img resource="./File:A.jpg" src="a""#;
    let result = extract(html);
    assert!(result.is_ok());
}

#[test]
fn extract_does_not_panic_on_malformed_html_invalid_nesting() {
    let html = r#"<p><figure typeof="mw:Image"></p><img resource="./File:A.jpg" src="a"></figure>"#;
    assert!(extract(html).is_ok());
}

#[test]
fn extract_returns_empty_list_for_empty_input() {
    let media = extract("").unwrap();
    assert!(media.is_empty());
}

#[test]
fn extract_returns_empty_list_for_whitespace_only_input() {
    let media = extract("   \n\t  ").unwrap();
    assert!(media.is_empty());
}

#[test]
fn extract_returns_empty_list_when_no_media_present() {
    let media = extract("<html><body><p>Just text.</p></body></html>").unwrap();
    assert!(media.is_empty());
}

#[test]
fn malformed_data_mw_only_drops_time_fields() {
    let html = r#"
        <video typeof="mw:Video" resource="./File:Clip.webm" data-mw="{not json">
            <source src="//upload.example/clip.webm" type="video/webm">
        </video>
    "#;

    let media = extract(html).unwrap();
    assert_eq!(media.len(), 1);
    assert!(media[0].start_time.is_none());
    assert!(media[0].end_time.is_none());
    assert!(media[0].thumb_time.is_none());
    // The rest of the record is intact
    assert_eq!(media[0].title.as_deref(), Some("File:Clip.webm"));
    assert_eq!(media[0].sources.as_ref().unwrap().len(), 1);
}

#[test]
fn image_wrapper_without_img_is_excluded_not_fatal() {
    let html = r#"
        <figure typeof="mw:Image">no image inside</figure>
        <figure typeof="mw:Image">
            <img resource="./File:Good.jpg" src="g.jpg" width="100" height="100">
        </figure>
    "#;

    let media = extract(html).unwrap();
    assert_eq!(media.len(), 1);
    assert_eq!(media[0].title.as_deref(), Some("File:Good.jpg"));
}

#[test]
fn source_elements_without_src_are_skipped() {
    let html = r#"
        <video typeof="mw:Video" resource="./File:Clip.webm">
            <source type="video/webm">
            <source src="//upload.example/clip.webm" type="video/webm">
        </video>
    "#;

    let media = extract(html).unwrap();
    let sources = media[0].sources.as_ref().unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0].url, "//upload.example/clip.webm");
}

#[test]
fn broken_percent_encoding_degrades_to_lossy_decoding() {
    let html = r#"
        <figure typeof="mw:Image">
            <img resource="./File:Bad%ZZname.jpg" src="b.jpg" width="100" height="100">
        </figure>
    "#;

    let media = extract(html).unwrap();
    assert_eq!(media.len(), 1);
    // An undecodable sequence passes through rather than failing extraction
    assert!(media[0].title.as_deref().unwrap().contains("name.jpg"));
}

#[test]
fn resource_without_relative_prefix_is_used_as_is() {
    let html = r#"
        <figure typeof="mw:Image">
            <img resource="File:Absolute.jpg" src="a.jpg" width="100" height="100">
        </figure>
    "#;

    let media = extract(html).unwrap();
    assert_eq!(media[0].title.as_deref(), Some("File:Absolute.jpg"));
}

#[test]
fn non_numeric_section_id_is_omitted() {
    let html = r#"
        <section data-mw-section-id="abc">
            <figure typeof="mw:Image">
                <img resource="./File:A.jpg" src="a.jpg" width="100" height="100">
            </figure>
        </section>
    "#;

    let media = extract(html).unwrap();
    assert!(media[0].section_id.is_none());
}

#[test]
fn synthetic_negative_section_ids_are_preserved() {
    let html = r#"
        <section data-mw-section-id="-1">
            <figure typeof="mw:Image">
                <img resource="./File:A.jpg" src="a.jpg" width="100" height="100">
            </figure>
        </section>
    "#;

    let media = extract(html).unwrap();
    assert_eq!(media[0].section_id, Some(-1));
}

#[test]
fn extract_handles_large_documents() {
    let mut html = String::from("<html><body>");
    for i in 0..2000 {
        html.push_str(&format!(
            r#"<figure typeof="mw:Image"><img resource="./File:Img{i}.jpg" src="{i}.jpg" width="100" height="100"></figure>"#
        ));
    }
    html.push_str("</body></html>");

    let media = extract(&html).unwrap();
    assert_eq!(media.len(), 2000);
    assert_eq!(media[0].title.as_deref(), Some("File:Img0.jpg"));
    assert_eq!(media[1999].title.as_deref(), Some("File:Img1999.jpg"));
}

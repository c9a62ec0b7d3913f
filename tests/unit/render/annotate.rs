use super::*;

#[test]
fn caption_is_centered_above_bottom_edge() {
    let svg = caption_svg(
        Canvas {
            width: 200,
            height: 100,
        },
        "0:00:15",
        Rgba8::RED,
    );
    assert!(svg.contains(r#"width="200" height="100""#));
    assert!(svg.contains(r#"x="100" y="90""#));
    assert!(svg.contains(r#"text-anchor="middle""#));
    assert!(svg.contains(r##"fill="#ff0000""##));
    assert!(svg.contains(">0:00:15</text>"));
}

#[test]
fn caption_text_is_escaped() {
    let svg = caption_svg(
        Canvas {
            width: 10,
            height: 10,
        },
        "a<b & c",
        Rgba8::RED,
    );
    assert!(svg.contains("a&lt;b &amp; c"));
}

#[test]
fn empty_font_database_skips_caption() {
    let db = Arc::new(usvg::fontdb::Database::new());
    let out = rasterize_caption(
        Canvas {
            width: 16,
            height: 16,
        },
        "1:00:00",
        Rgba8::RED,
        db,
    )
    .unwrap();
    assert!(out.is_none());
}

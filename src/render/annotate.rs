use std::sync::Arc;

use anyhow::Context as _;

use crate::foundation::{
    core::{Canvas, Rgba8},
    error::{SketchError, SketchResult},
};

/// Gap between the text baseline and the bottom edge of the canvas.
pub const TEXT_BOTTOM_MARGIN: f64 = 10.0;
pub const TEXT_FONT_SIZE: f64 = 12.0;

/// Lay out `text` centered near the bottom edge and rasterize it to premultiplied RGBA8 at
/// canvas size.
///
/// Returns `None` when no font face is available: the annotation is decoration and a bare
/// machine without fonts still gets its image.
pub fn rasterize_caption(
    canvas: Canvas,
    text: &str,
    color: Rgba8,
    fontdb: Arc<usvg::fontdb::Database>,
) -> SketchResult<Option<Vec<u8>>> {
    if fontdb.faces().next().is_none() {
        tracing::warn!("no font faces available; elapsed-time caption omitted");
        return Ok(None);
    }

    let svg = caption_svg(canvas, text, color);
    let opts = usvg::Options {
        fontdb,
        ..Default::default()
    };
    let tree = usvg::Tree::from_data(svg.as_bytes(), &opts).context("parse caption svg")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(canvas.width, canvas.height)
        .ok_or_else(|| SketchError::render("failed to allocate caption pixmap"))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );
    Ok(Some(pixmap.data().to_vec()))
}

/// System fonts, queried once per run.
pub fn system_fontdb() -> Arc<usvg::fontdb::Database> {
    let mut db = usvg::fontdb::Database::new();
    db.load_system_fonts();
    tracing::debug!(faces = db.faces().count(), "system fonts loaded");
    Arc::new(db)
}

pub(crate) fn caption_svg(canvas: Canvas, text: &str, color: Rgba8) -> String {
    let x = f64::from(canvas.width) / 2.0;
    let y = f64::from(canvas.height) - TEXT_BOTTOM_MARGIN;
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}">"#,
            r#"<text x="{x}" y="{y}" font-family="sans-serif" font-size="{size}" "#,
            r#"text-anchor="middle" fill="{fill}" fill-opacity="{alpha}">{text}</text>"#,
            "</svg>"
        ),
        w = canvas.width,
        h = canvas.height,
        x = x,
        y = y,
        size = TEXT_FONT_SIZE,
        fill = color.to_hex(),
        alpha = f64::from(color.a) / 255.0,
        text = escape_xml(text),
    )
}

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/annotate.rs"]
mod tests;

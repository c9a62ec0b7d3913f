use std::sync::Arc;

use kurbo::Shape as _;

use crate::{
    events::model::format_elapsed,
    foundation::{
        core::Canvas,
        error::{SketchError, SketchResult},
    },
    geometry::{
        mapper::{CIRCLE_OUTLINE_THICKNESS, Scene},
        primitives::LinePrim,
    },
    render::{FrameRGBA, RenderSettings, annotate, composite},
};

/// Flattening tolerance for circles, in pixels.
const PATH_TOLERANCE: f64 = 0.1;

/// Rasterizes a [`Scene`] on the CPU.
pub struct CpuRenderer {
    settings: RenderSettings,
    fontdb: Option<Arc<usvg::fontdb::Database>>,
}

impl CpuRenderer {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            fontdb: None,
        }
    }

    /// Use a specific font database for the caption instead of the system one.
    pub fn with_fontdb(mut self, fontdb: Arc<usvg::fontdb::Database>) -> Self {
        self.fontdb = Some(fontdb);
        self
    }

    #[tracing::instrument(skip(self, scene), fields(lines = scene.lines.len(), circles = scene.circles.len()))]
    pub fn render(&mut self, scene: &Scene, canvas: Canvas) -> SketchResult<FrameRGBA> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| SketchError::render("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| SketchError::render("canvas height exceeds u16"))?;

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        let mut ctx = vello_cpu::RenderContext::new(width, height);
        if let Some([r, g, b, a]) = self.settings.clear_rgba {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(width),
                f64::from(height),
            ));
        }

        let ink = self.settings.ink;
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            ink.r, ink.g, ink.b, ink.a,
        ));

        for line in &scene.lines {
            stroke_line(&mut ctx, line);
        }
        for circle in &scene.circles {
            ctx.set_stroke(butt_stroke(CIRCLE_OUTLINE_THICKNESS));
            let outline = circle.inset_outline(CIRCLE_OUTLINE_THICKNESS);
            ctx.stroke_path(&bezpath_to_cpu(&outline.to_path(PATH_TOLERANCE)));
            stroke_line(&mut ctx, &circle.cross.horizontal);
            stroke_line(&mut ctx, &circle.cross.vertical);
        }

        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        let mut data = pixmap.data_as_u8_slice().to_vec();

        if self.settings.annotate {
            let fontdb = self
                .fontdb
                .get_or_insert_with(annotate::system_fontdb)
                .clone();
            let caption = format_elapsed(scene.elapsed);
            if let Some(text_px) = annotate::rasterize_caption(canvas, &caption, ink, fontdb)? {
                composite::over_in_place(&mut data, &text_px)?;
            }
        }

        Ok(FrameRGBA {
            width: canvas.width,
            height: canvas.height,
            data,
            premultiplied: true,
        })
    }
}

fn stroke_line(ctx: &mut vello_cpu::RenderContext, line: &LinePrim) {
    ctx.set_stroke(butt_stroke(line.thickness));
    ctx.stroke_path(&bezpath_to_cpu(&line.to_kurbo().to_path(PATH_TOLERANCE)));
}

fn butt_stroke(width: f64) -> vello_cpu::kurbo::Stroke {
    vello_cpu::kurbo::Stroke::new(width).with_caps(vello_cpu::kurbo::Cap::Butt)
}

fn point_to_cpu(p: kurbo::Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;

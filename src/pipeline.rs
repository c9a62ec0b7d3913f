use std::path::{Path, PathBuf};

use crate::{
    classify::classifier::Channels,
    config::SketchConfig,
    events::{
        ingest::read_log,
        model::{Event, format_elapsed, sort_events},
    },
    foundation::{core::Canvas, error::SketchResult},
    geometry::mapper::{Scene, map_events},
    render::{RenderSettings, cpu::CpuRenderer, output::write_png},
};

/// What a completed run produced.
#[derive(Clone, Debug)]
pub struct RenderReport {
    pub output: PathBuf,
    pub scene: Scene,
}

impl RenderReport {
    pub fn elapsed_text(&self) -> String {
        format_elapsed(self.scene.elapsed)
    }
}

/// Sort, classify and map in one forward pass.
#[tracing::instrument(skip(events, channels), fields(events = events.len()))]
pub fn build_scene(
    mut events: Vec<Event>,
    canvas: Canvas,
    channels: &Channels,
) -> SketchResult<Scene> {
    sort_events(&mut events);
    let scene = map_events(&events, canvas.region(), channels)?;
    for diag in &scene.diagnostics {
        tracing::warn!("{diag}");
    }
    if scene.open_intervals > 0 {
        tracing::debug!(
            open = scene.open_intervals,
            "intervals still open at end of log"
        );
    }
    Ok(scene)
}

/// Full run with the default renderer: read `log`, render, write `config.output`.
pub fn render_log(log: &Path, config: &SketchConfig) -> SketchResult<RenderReport> {
    let mut renderer = CpuRenderer::new(RenderSettings::default());
    render_log_with(log, config, &mut renderer)
}

/// Full run with a caller-supplied renderer. Nothing is written unless every stage succeeds.
#[tracing::instrument(skip(config, renderer))]
pub fn render_log_with(
    log: &Path,
    config: &SketchConfig,
    renderer: &mut CpuRenderer,
) -> SketchResult<RenderReport> {
    let events = read_log(log)?;
    let canvas = Canvas::physical();
    let scene = build_scene(events, canvas, &config.channels())?;

    let frame = renderer.render(&scene, canvas)?;
    write_png(&frame, &config.output)?;
    tracing::info!(path = %config.output.display(), "image written");

    Ok(RenderReport {
        output: config.output.clone(),
        scene,
    })
}

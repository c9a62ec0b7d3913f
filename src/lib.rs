//! eventsketch turns a sensor/actuator event log into a single static drawing.
//!
//! # Pipeline overview
//!
//! 1. **Ingest**: log file -> `Vec<Event>`, sorted by timestamp ([`read_log`], [`sort_events`])
//! 2. **Classify**: each event is routed by source to a shape rule ([`classify`])
//! 3. **Map**: magnitude readings become horizontal lines placed by rank; closed on/off
//!    intervals become circles placed by elapsed time ([`map_events`] -> [`Scene`])
//! 4. **Render**: the scene and an elapsed-time caption are rasterized on the CPU and written
//!    as a transparent PNG ([`CpuRenderer`], [`write_png`])
//!
//! The canvas is a fixed 210 x 290 mm sheet at 96 dpi. Geometry constants are fixed; only the
//! channel source identifiers and the output path are configurable ([`SketchConfig`]).
//!
//! Per-event problems never abort a run. They are collected as [`Diagnostic`]s; only ingestion
//! failures, an empty log and write failures are fatal ([`SketchError`]).
#![forbid(unsafe_code)]

mod classify;
mod config;
mod events;
mod foundation;
mod geometry;
mod pipeline;
mod render;

pub use classify::classifier::{
    Channels, Classified, Diagnostic, Interval, PendingIntervals, StateToken, classify,
    parse_magnitude,
};
pub use config::{DEFAULT_MAGNITUDE_SOURCE, DEFAULT_STATE_SOURCE, SketchConfig};
pub use events::ingest::{Record, parse_log, read_log, records};
pub use events::model::{
    Event, TIMESTAMP_FORMAT, format_elapsed, log_span, parse_timestamp, sort_events,
};
pub use events::segment::{
    DEFAULT_MAX_GAP_MINUTES, Segment, SplitLog, split_by_gap, write_segments,
};
pub use foundation::core::{
    CANVAS_HEIGHT_MM, CANVAS_WIDTH_MM, Canvas, DrawingRegion, MM_TO_PX, Point, Rgba8, mm_to_px,
};
pub use foundation::error::{SketchError, SketchResult};
pub use geometry::mapper::{
    CIRCLE_OUTLINE_THICKNESS, CROSS_HALF, LENGTH_DIVISOR, LENGTH_SCALE, LINE_THICKNESS,
    MAGNITUDE_MAX, MAGNITUDE_MIN, RADIUS_PER_SECOND, Scene, clamp_magnitude, elapsed_y,
    interval_circle, interval_radius, line_length, magnitude_line, map_events, rank_y,
};
pub use geometry::primitives::{CirclePrim, Cross, LinePrim};
pub use pipeline::{RenderReport, build_scene, render_log, render_log_with};
pub use render::annotate::{TEXT_BOTTOM_MARGIN, TEXT_FONT_SIZE, rasterize_caption, system_fontdb};
pub use render::cpu::CpuRenderer;
pub use render::output::{DEFAULT_OUTPUT, ensure_parent_dir, write_png};
pub use render::{FrameRGBA, RenderSettings};

pub use chrono::{NaiveDateTime, TimeDelta};

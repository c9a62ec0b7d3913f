//! Event -> primitive mapping.
//!
//! Lines and circles are placed vertically by two different rules: a line sits at its event's
//! rank among *all* events, a circle at its interval's end time as a fraction of the whole log
//! span. Non-line events therefore leave visible gaps between lines, while circles track wall
//! clock time.

use chrono::{NaiveDateTime, TimeDelta};

use crate::{
    classify::classifier::{Channels, Classified, Diagnostic, Interval, PendingIntervals, classify},
    events::model::{Event, log_span},
    foundation::{
        core::{DrawingRegion, Point},
        error::{SketchError, SketchResult},
    },
    geometry::primitives::{CirclePrim, Cross, LinePrim},
};

/// Smallest magnitude after clamping (longest line).
pub const MAGNITUDE_MIN: i64 = 5;
/// Largest magnitude after clamping (shortest line).
pub const MAGNITUDE_MAX: i64 = 400;
/// `length = side / (value / LENGTH_DIVISOR) * LENGTH_SCALE`
pub const LENGTH_DIVISOR: f64 = 4.0;
pub const LENGTH_SCALE: f64 = 0.6;
/// Stroke width for lines and circle crosses.
pub const LINE_THICKNESS: f64 = 4.0;
/// Stroke width for circle outlines.
pub const CIRCLE_OUTLINE_THICKNESS: f64 = 4.0;
/// Circle radius in pixels per second of interval.
pub const RADIUS_PER_SECOND: f64 = 2.0;
/// Half-length of each cross arm.
pub const CROSS_HALF: f64 = 2.0;

/// Everything the renderer needs, in painter's order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Scene {
    pub region: DrawingRegion,
    pub start: NaiveDateTime,
    #[serde(skip)]
    pub elapsed: TimeDelta,
    /// Total events, including those that produced nothing.
    pub event_count: usize,
    pub lines: Vec<LinePrim>,
    pub circles: Vec<CirclePrim>,
    #[serde(skip)]
    pub diagnostics: Vec<Diagnostic>,
    /// Intervals still open at end of log; they produce no circle.
    pub open_intervals: usize,
}

/// Clamp a reading into `[MAGNITUDE_MIN, MAGNITUDE_MAX]`; zero readings are dropped.
pub fn clamp_magnitude(value: i64) -> Option<i64> {
    (value != 0).then(|| value.clamp(MAGNITUDE_MIN, MAGNITUDE_MAX))
}

/// Inverse mapping: larger readings give shorter lines.
pub fn line_length(side: f64, clamped: i64) -> f64 {
    side / (clamped as f64 / LENGTH_DIVISOR) * LENGTH_SCALE
}

/// Rank placement: event `rank` of `total` occupies slot `(rank + 1) / (total + 1)`.
pub fn rank_y(region: DrawingRegion, rank: usize, total: usize) -> f64 {
    let spacing = region.side / (total as f64 + 1.0);
    region.y + (rank as f64 + 1.0) * spacing
}

/// Time-proportional placement of an instant within the log span.
pub fn elapsed_y(
    region: DrawingRegion,
    at: NaiveDateTime,
    log_start: NaiveDateTime,
    log_elapsed: TimeDelta,
) -> f64 {
    let total_ms = log_elapsed.num_milliseconds();
    let fraction = if total_ms == 0 {
        0.0
    } else {
        (at - log_start).num_milliseconds() as f64 / total_ms as f64
    };
    region.y + fraction * region.side
}

pub fn magnitude_line(
    region: DrawingRegion,
    rank: usize,
    total: usize,
    value: i64,
) -> Option<LinePrim> {
    let clamped = clamp_magnitude(value)?;
    let len = line_length(region.side, clamped);
    let mid = region.mid_x();
    let y = rank_y(region, rank, total);
    Some(LinePrim {
        x1: mid - len / 2.0,
        y1: y,
        x2: mid + len / 2.0,
        y2: y,
        thickness: LINE_THICKNESS,
    })
}

pub fn interval_radius(interval: &Interval) -> f64 {
    interval.duration().num_milliseconds() as f64 / 1000.0 * RADIUS_PER_SECOND
}

pub fn interval_circle(
    region: DrawingRegion,
    interval: &Interval,
    log_start: NaiveDateTime,
    log_elapsed: TimeDelta,
) -> CirclePrim {
    let center = Point::new(
        region.mid_x(),
        elapsed_y(region, interval.end, log_start, log_elapsed),
    );
    CirclePrim {
        center,
        radius: interval_radius(interval),
        cross: Cross::at(center, CROSS_HALF, LINE_THICKNESS),
    }
}

/// Single forward pass over a timestamp-sorted sequence.
pub fn map_events(
    events: &[Event],
    region: DrawingRegion,
    channels: &Channels,
) -> SketchResult<Scene> {
    let (start, elapsed) =
        log_span(events).ok_or_else(|| SketchError::validation("event log is empty"))?;
    if events.windows(2).any(|w| w[0].timestamp > w[1].timestamp) {
        return Err(SketchError::validation(
            "events must be sorted by timestamp before mapping",
        ));
    }

    let total = events.len();
    let mut pending = PendingIntervals::new();
    let mut lines = Vec::new();
    let mut circles = Vec::new();
    let mut diagnostics = Vec::new();

    for (rank, event) in events.iter().enumerate() {
        match classify(event, channels, &mut pending) {
            Classified::Magnitude(value) => {
                lines.extend(magnitude_line(region, rank, total, value));
            }
            Classified::Interval(interval) => {
                circles.push(interval_circle(region, &interval, start, elapsed));
            }
            Classified::Opened(replaced) => diagnostics.extend(replaced),
            Classified::Skipped(diag) => diagnostics.push(diag),
            Classified::Ignored => {}
        }
    }

    Ok(Scene {
        region,
        start,
        elapsed,
        event_count: total,
        lines,
        circles,
        diagnostics,
        open_intervals: pending.len(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/mapper.rs"]
mod tests;

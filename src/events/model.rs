use chrono::{NaiveDateTime, TimeDelta};

use crate::foundation::error::{SketchError, SketchResult};

/// Row timestamp layout written by the installation logger.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One logged message. Immutable once read.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Event {
    pub timestamp: NaiveDateTime,
    pub source: String,
    pub payload: String,
}

impl Event {
    pub fn new(
        timestamp: NaiveDateTime,
        source: impl Into<String>,
        payload: impl Into<String>,
    ) -> Self {
        Self {
            timestamp,
            source: source.into(),
            payload: payload.into(),
        }
    }
}

pub fn parse_timestamp(s: &str) -> SketchResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT).map_err(|e| {
        SketchError::ingest(format!(
            "timestamp '{s}' does not match '{TIMESTAMP_FORMAT}': {e}"
        ))
    })
}

/// Stable ascending sort; rows sharing a timestamp keep their file order.
pub fn sort_events(events: &mut [Event]) {
    events.sort_by_key(|e| e.timestamp);
}

/// Time between the first and last event of a sorted sequence.
pub fn log_span(events: &[Event]) -> Option<(NaiveDateTime, TimeDelta)> {
    let first = events.first()?.timestamp;
    let last = events.last()?.timestamp;
    Some((first, last - first))
}

/// `H:MM:SS`, prefixed with `N day(s), ` once the span reaches a full day.
pub fn format_elapsed(elapsed: TimeDelta) -> String {
    let total = elapsed.num_seconds();
    let (sign, total) = if total < 0 { ("-", -total) } else { ("", total) };
    let days = total / 86_400;
    let rem = total % 86_400;
    let clock = format!("{}:{:02}:{:02}", rem / 3600, (rem % 3600) / 60, rem % 60);
    match days {
        0 => format!("{sign}{clock}"),
        1 => format!("{sign}1 day, {clock}"),
        n => format!("{sign}{n} days, {clock}"),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/events/model.rs"]
mod tests;

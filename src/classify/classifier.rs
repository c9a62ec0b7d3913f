use std::{collections::BTreeMap, num::IntErrorKind};

use chrono::{NaiveDateTime, TimeDelta};

use crate::events::model::Event;

/// Source identifiers that select a shape rule. Events from any other source are ignored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Channels {
    /// Numeric readings; each becomes a line.
    pub magnitude: String,
    /// `on`/`off` tokens; each closed interval becomes a circle.
    pub state: String,
}

/// Payload of a state-channel event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StateToken {
    On,
    Off,
}

impl StateToken {
    /// Only the exact tokens count; anything else is not a state change.
    pub fn parse(payload: &str) -> Option<Self> {
        match payload {
            "on" => Some(Self::On),
            "off" => Some(Self::Off),
            _ => None,
        }
    }
}

/// A completed on -> off span of one source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Interval {
    pub source: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }
}

/// Non-fatal problem that caused one event to be skipped or reinterpreted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Diagnostic {
    /// Magnitude payload that is not an integer.
    InvalidMagnitude {
        timestamp: NaiveDateTime,
        payload: String,
    },
    /// `off` with no pending `on` for the same source.
    UnmatchedOff {
        timestamp: NaiveDateTime,
        source: String,
    },
    /// `on` while an interval was already pending; the interval restarts here.
    ReopenedInterval {
        timestamp: NaiveDateTime,
        source: String,
        discarded_start: NaiveDateTime,
    },
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidMagnitude { timestamp, payload } => {
                write!(f, "{timestamp}: invalid message value: {payload:?}")
            }
            Self::UnmatchedOff { timestamp, source } => {
                write!(f, "{timestamp}: '{source}' turned off without being on")
            }
            Self::ReopenedInterval {
                timestamp,
                source,
                discarded_start,
            } => write!(
                f,
                "{timestamp}: '{source}' turned on again; interval started at {discarded_start} dropped"
            ),
        }
    }
}

/// Outcome of routing one event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Classified {
    /// Parsed magnitude reading (not yet filtered or clamped).
    Magnitude(i64),
    /// An `off` that closed a pending interval.
    Interval(Interval),
    /// An `on` that opened (or restarted) an interval.
    Opened(Option<Diagnostic>),
    /// Event skipped with a reported reason.
    Skipped(Diagnostic),
    /// Unknown source, or a state payload that is neither `on` nor `off`.
    Ignored,
}

/// Open `on` timestamps, keyed by source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PendingIntervals {
    open: BTreeMap<String, NaiveDateTime>,
}

impl PendingIntervals {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending(&self, source: &str) -> Option<NaiveDateTime> {
        self.open.get(source).copied()
    }

    /// Start an interval, returning a previously pending start that was replaced.
    pub fn open(&mut self, source: &str, at: NaiveDateTime) -> Option<NaiveDateTime> {
        self.open.insert(source.to_string(), at)
    }

    pub fn close(&mut self, source: &str, at: NaiveDateTime) -> Option<Interval> {
        let start = self.open.remove(source)?;
        Some(Interval {
            source: source.to_string(),
            start,
            end: at,
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.open.len()
    }
}

/// Integer payload, saturating at the `i64` bounds when the digits overflow.
pub fn parse_magnitude(payload: &str) -> Option<i64> {
    match payload.trim().parse::<i64>() {
        Ok(v) => Some(v),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Route one event to its shape rule, updating `pending` for state-channel events.
pub fn classify(event: &Event, channels: &Channels, pending: &mut PendingIntervals) -> Classified {
    if event.source == channels.magnitude {
        return match parse_magnitude(&event.payload) {
            Some(v) => Classified::Magnitude(v),
            None => Classified::Skipped(Diagnostic::InvalidMagnitude {
                timestamp: event.timestamp,
                payload: event.payload.clone(),
            }),
        };
    }

    if event.source != channels.state {
        return Classified::Ignored;
    }

    match StateToken::parse(&event.payload) {
        Some(StateToken::On) => {
            let replaced = pending.open(&event.source, event.timestamp);
            Classified::Opened(replaced.map(|discarded_start| Diagnostic::ReopenedInterval {
                timestamp: event.timestamp,
                source: event.source.clone(),
                discarded_start,
            }))
        }
        Some(StateToken::Off) => match pending.close(&event.source, event.timestamp) {
            Some(interval) => Classified::Interval(interval),
            None => Classified::Skipped(Diagnostic::UnmatchedOff {
                timestamp: event.timestamp,
                source: event.source.clone(),
            }),
        },
        None => Classified::Ignored,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/classify/classifier.rs"]
mod tests;

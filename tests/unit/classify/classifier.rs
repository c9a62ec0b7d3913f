use super::*;
use crate::events::model::parse_timestamp;

fn channels() -> Channels {
    Channels {
        magnitude: "lab/mdef/anna".to_string(),
        state: "lab/mdef/carmen".to_string(),
    }
}

fn ev(t: &str, source: &str, payload: &str) -> Event {
    Event::new(parse_timestamp(t).unwrap(), source, payload)
}

#[test]
fn magnitude_payload_parses_as_integer() {
    let mut pending = PendingIntervals::new();
    let c = classify(
        &ev("2024-03-07 10:00:00", "lab/mdef/anna", " 120 "),
        &channels(),
        &mut pending,
    );
    assert_eq!(c, Classified::Magnitude(120));

    let c = classify(
        &ev("2024-03-07 10:00:00", "lab/mdef/anna", "-3"),
        &channels(),
        &mut pending,
    );
    assert_eq!(c, Classified::Magnitude(-3));
}

#[test]
fn non_integer_magnitude_is_skipped_with_diagnostic() {
    let mut pending = PendingIntervals::new();
    for payload in ["abc", "12.5", ""] {
        let c = classify(
            &ev("2024-03-07 10:00:00", "lab/mdef/anna", payload),
            &channels(),
            &mut pending,
        );
        let Classified::Skipped(Diagnostic::InvalidMagnitude { payload: p, .. }) = c else {
            panic!("expected InvalidMagnitude for {payload:?}, got {c:?}");
        };
        assert_eq!(p, payload);
    }
}

#[test]
fn on_then_off_yields_interval() {
    let mut pending = PendingIntervals::new();
    let on = classify(
        &ev("2024-03-07 10:00:00", "lab/mdef/carmen", "on"),
        &channels(),
        &mut pending,
    );
    assert_eq!(on, Classified::Opened(None));
    assert!(pending.pending("lab/mdef/carmen").is_some());

    let off = classify(
        &ev("2024-03-07 10:00:05", "lab/mdef/carmen", "off"),
        &channels(),
        &mut pending,
    );
    let Classified::Interval(interval) = off else {
        panic!("expected interval, got {off:?}");
    };
    assert_eq!(interval.duration().num_seconds(), 5);
    assert_eq!(pending.len(), 0);
}

#[test]
fn off_without_on_is_reported() {
    let mut pending = PendingIntervals::new();
    let c = classify(
        &ev("2024-03-07 10:00:05", "lab/mdef/carmen", "off"),
        &channels(),
        &mut pending,
    );
    assert!(matches!(
        c,
        Classified::Skipped(Diagnostic::UnmatchedOff { .. })
    ));
}

#[test]
fn second_on_restarts_interval() {
    let mut pending = PendingIntervals::new();
    classify(
        &ev("2024-03-07 10:00:00", "lab/mdef/carmen", "on"),
        &channels(),
        &mut pending,
    );
    let c = classify(
        &ev("2024-03-07 10:00:03", "lab/mdef/carmen", "on"),
        &channels(),
        &mut pending,
    );
    assert!(matches!(
        c,
        Classified::Opened(Some(Diagnostic::ReopenedInterval { .. }))
    ));
    assert_eq!(
        pending.pending("lab/mdef/carmen"),
        Some(parse_timestamp("2024-03-07 10:00:03").unwrap())
    );
}

#[test]
fn unknown_sources_and_state_payloads_are_ignored() {
    let mut pending = PendingIntervals::new();
    let c = classify(
        &ev("2024-03-07 10:00:00", "lab/other", "on"),
        &channels(),
        &mut pending,
    );
    assert_eq!(c, Classified::Ignored);

    for payload in ["ON", " on", "toggle"] {
        let c = classify(
            &ev("2024-03-07 10:00:00", "lab/mdef/carmen", payload),
            &channels(),
            &mut pending,
        );
        assert_eq!(c, Classified::Ignored, "{payload:?}");
    }
    assert_eq!(pending.len(), 0);
}

#[test]
fn diagnostics_render_readably() {
    let d = Diagnostic::InvalidMagnitude {
        timestamp: parse_timestamp("2024-03-07 10:00:00").unwrap(),
        payload: "abc".to_string(),
    };
    assert!(d.to_string().contains("invalid message value"));
}

#[test]
fn magnitude_parse_saturates_on_overflow() {
    assert_eq!(parse_magnitude(" 120 "), Some(120));
    assert_eq!(parse_magnitude("10\r\n"), Some(10));
    assert_eq!(parse_magnitude("99999999999999999999"), Some(i64::MAX));
    assert_eq!(parse_magnitude("-99999999999999999999"), Some(i64::MIN));
    assert_eq!(parse_magnitude("12.5"), None);
    assert_eq!(parse_magnitude(""), None);
}

use std::path::Path;

use anyhow::Context as _;

use crate::{
    events::model::{Event, parse_timestamp},
    foundation::error::{SketchError, SketchResult},
};

/// One data row of a log file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// 1-based line on which the row starts. Quoted fields may span several lines.
    pub line: u64,
    pub fields: Vec<String>,
}

/// Read comma-delimited rows with standard double-quote escaping. Rows that are entirely
/// blank are skipped; field counts are not checked here.
pub fn records(text: &str) -> SketchResult<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut out = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| SketchError::ingest(format!("malformed row: {e}")))?;
        if row.len() == 1 && row.get(0).is_some_and(|f| f.trim().is_empty()) {
            continue;
        }
        out.push(Record {
            line: row.position().map_or(0, csv::Position::line),
            fields: row.iter().map(str::to_owned).collect(),
        });
    }
    Ok(out)
}

/// Parse log text into events in file order. Any row that is not exactly
/// `timestamp,source,payload` with a valid timestamp aborts ingestion.
pub fn parse_log(text: &str) -> SketchResult<Vec<Event>> {
    records(text)?.into_iter().map(record_to_event).collect()
}

fn record_to_event(record: Record) -> SketchResult<Event> {
    let Record { line, fields } = record;
    let Ok([timestamp, source, payload]) = <[String; 3]>::try_from(fields) else {
        return Err(SketchError::ingest(format!(
            "line {line}: expected 3 fields (timestamp, source, payload)"
        )));
    };
    let timestamp = parse_timestamp(&timestamp).map_err(|e| match e {
        SketchError::Ingest(msg) => SketchError::ingest(format!("line {line}: {msg}")),
        other => other,
    })?;
    Ok(Event {
        timestamp,
        source,
        payload,
    })
}

#[tracing::instrument]
pub fn read_log(path: &Path) -> SketchResult<Vec<Event>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read event log '{}'", path.display()))?;
    let events = parse_log(&text)?;
    tracing::debug!(rows = events.len(), "event log ingested");
    Ok(events)
}

#[cfg(test)]
#[path = "../../tests/unit/events/ingest.rs"]
mod tests;

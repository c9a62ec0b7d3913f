use std::path::{Path, PathBuf};

use anyhow::Context as _;
use chrono::{NaiveDateTime, TimeDelta};

use crate::{
    events::{ingest::records, model::parse_timestamp},
    foundation::error::{SketchError, SketchResult},
};

/// Gap above which a long recording is cut into separate logs.
pub const DEFAULT_MAX_GAP_MINUTES: i64 = 60;

/// A contiguous run of rows with no inter-row gap above the threshold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Row fields as read from the input.
    pub rows: Vec<Vec<String>>,
}

impl Segment {
    /// `data_<start>_<end>.csv` with compact `%Y%m%d%H%M%S` stamps.
    pub fn file_name(&self) -> String {
        format!(
            "data_{}_{}.csv",
            self.start.format("%Y%m%d%H%M%S"),
            self.end.format("%Y%m%d%H%M%S")
        )
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SplitLog {
    /// Leading non-data row, repeated at the top of every segment.
    pub header: Option<Vec<String>>,
    pub segments: Vec<Segment>,
}

/// Cut a log wherever consecutive rows are more than `max_gap` apart.
///
/// Rows stay in file order. A first row whose leading field is not a timestamp is taken as a
/// header; any later row without a valid timestamp is an error.
pub fn split_by_gap(text: &str, max_gap: TimeDelta) -> SketchResult<SplitLog> {
    let mut out = SplitLog::default();
    let mut current: Option<Segment> = None;

    for (idx, record) in records(text)?.into_iter().enumerate() {
        let first = record.fields.first().map(String::as_str).unwrap_or_default();
        let timestamp = match parse_timestamp(first) {
            Ok(t) => t,
            Err(_) if idx == 0 => {
                out.header = Some(record.fields);
                continue;
            }
            Err(SketchError::Ingest(msg)) => {
                return Err(SketchError::ingest(format!("line {}: {msg}", record.line)));
            }
            Err(other) => return Err(other),
        };

        match current.as_mut() {
            Some(seg) if timestamp - seg.end <= max_gap => {
                seg.end = timestamp;
                seg.rows.push(record.fields);
            }
            _ => {
                if let Some(done) = current.take() {
                    out.segments.push(done);
                }
                current = Some(Segment {
                    start: timestamp,
                    end: timestamp,
                    rows: vec![record.fields],
                });
            }
        }
    }

    out.segments.extend(current);
    Ok(out)
}

/// Write every segment into `out_dir`, returning the written paths in segment order.
#[tracing::instrument(skip(split))]
pub fn write_segments(split: &SplitLog, out_dir: &Path) -> SketchResult<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("create output dir '{}'", out_dir.display()))?;

    let mut written = Vec::with_capacity(split.segments.len());
    for seg in &split.segments {
        let path = out_dir.join(seg.file_name());
        write_segment(&path, split.header.as_deref(), &seg.rows)
            .with_context(|| format!("write segment '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), rows = seg.rows.len(), "segment written");
        written.push(path);
    }
    Ok(written)
}

fn write_segment(
    path: &Path,
    header: Option<&[String]>,
    rows: &[Vec<String>],
) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new().flexible(true).from_path(path)?;
    if let Some(header) = header {
        writer.write_record(header)?;
    }
    for row in rows {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/events/segment.rs"]
mod tests;

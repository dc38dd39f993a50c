//! Replays a plain-text event log into a [`Session`].
//!
//! One event per line, `<timestamp> <kind>`:
//!
//! ```text
//! 2017/01/17-08:00 Start
//! 2017/01/17-13:00 Lock
//! 2017/01/17-14:00 Unlock
//! 2017-01-17T16:00:00Z Stop
//! ```
//!
//! Timestamps are either `YYYY/MM/DD-HH:MM` in local time or RFC 3339.
//! Blank lines and lines starting with `#` are skipped. Every event must
//! fall on the local date of the first one.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Local, LocalResult, NaiveDate, NaiveDateTime, TimeZone, Utc};
use oh_core::{EventKind, Session, UnknownEventKind};
use thiserror::Error;

/// Local timestamp format written by the session lock logger.
const LOCAL_FORMAT: &str = "%Y/%m/%d-%H:%M";

#[derive(Debug, Error)]
pub enum LogParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected '<timestamp> <kind>'")]
    Malformed { line: usize },
    #[error("line {line}: invalid timestamp '{value}'")]
    InvalidTimestamp { line: usize, value: String },
    #[error("line {line}: {source}")]
    UnknownKind {
        line: usize,
        source: UnknownEventKind,
    },
    #[error("line {line}: the day must begin with a start event")]
    FirstNotStart { line: usize },
    #[error("line {line}: event on {date} is outside the day started on {day}")]
    DayChanged {
        line: usize,
        day: NaiveDate,
        date: NaiveDate,
    },
    #[error("no events found in log")]
    Empty,
}

/// Reads the log at `path` and replays it.
pub fn read_session(path: &Path) -> Result<Session> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let session = parse_session(BufReader::new(file))
        .with_context(|| format!("failed to parse {}", path.display()))?;
    tracing::debug!(path = %path.display(), events = session.events().len(), "log replayed");
    Ok(session)
}

/// Replays every event in `reader` into a new session.
pub fn parse_session<R: BufRead>(reader: R) -> Result<Session, LogParseError> {
    let mut session: Option<Session> = None;
    let mut day: Option<NaiveDate> = None;

    for (index, line) in reader.lines().enumerate() {
        let line_no = index + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (timestamp, kind) = parse_line(line, line_no)?;
        let date = timestamp.with_timezone(&Local).date_naive();
        if let (Some(session), Some(day)) = (session.as_mut(), day) {
            if date != day {
                return Err(LogParseError::DayChanged {
                    line: line_no,
                    day,
                    date,
                });
            }
            match kind {
                EventKind::Start => session.start(timestamp),
                EventKind::Stop => session.stop(timestamp),
            }
        } else if kind == EventKind::Start {
            session = Some(Session::new(timestamp));
            day = Some(date);
        } else {
            return Err(LogParseError::FirstNotStart { line: line_no });
        }
    }

    session.ok_or(LogParseError::Empty)
}

fn parse_line(line: &str, line_no: usize) -> Result<(DateTime<Utc>, EventKind), LogParseError> {
    let mut fields = line.split_whitespace();
    let (Some(timestamp), Some(kind), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(LogParseError::Malformed { line: line_no });
    };

    let timestamp = parse_timestamp(timestamp).ok_or_else(|| LogParseError::InvalidTimestamp {
        line: line_no,
        value: timestamp.to_string(),
    })?;
    let kind = kind.parse::<EventKind>().map_err(|source| LogParseError::UnknownKind {
        line: line_no,
        source,
    })?;

    Ok((timestamp, kind))
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(s, LOCAL_FORMAT).ok()?;
    match Local.from_local_datetime(&naive) {
        // Ambiguous (DST fall-back): use the earlier time
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt.with_timezone(&Utc)),
        // Skipped by a DST spring-forward
        LocalResult::None => None,
    }
}

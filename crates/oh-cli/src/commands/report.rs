//! Report command for a finished working day.
//!
//! This module implements `oh report` with human-readable and JSON output.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use oh_core::Report;
use serde::Serialize;

use super::util::{format_clock, format_hm, local_timezone};
use crate::logfile::read_session;

/// JSON output structure.
#[derive(Debug, Serialize)]
pub struct ReportJson {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub timezone: String,
    pub total_ms: i64,
    pub working_ms: i64,
    pub resting_ms: i64,
}

impl ReportJson {
    pub fn new(report: &Report, timezone: String) -> Self {
        Self {
            start: report.start(),
            end: report.end(),
            timezone,
            total_ms: report.total().num_milliseconds(),
            working_ms: report.working().num_milliseconds(),
            resting_ms: report.resting().num_milliseconds(),
        }
    }
}

pub fn run<W: Write>(writer: &mut W, log_path: &Path, json: bool) -> Result<()> {
    let session = read_session(log_path)?;
    let report = session
        .report()
        .context("the working day has not ended yet, record a stop first")?;

    if json {
        let output = ReportJson::new(&report, local_timezone());
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
    } else {
        write!(writer, "{}", format_report(&report))?;
    }

    Ok(())
}

/// Renders the report for the terminal.
pub fn format_report(report: &Report) -> String {
    let mut output = String::new();
    writeln!(output, "Day started at {}", format_clock(report.start())).unwrap();
    writeln!(output, "Day ended at {}", format_clock(report.end())).unwrap();
    writeln!(output, "Total accounts:").unwrap();
    writeln!(output, "    total:   {}", format_hm(report.total())).unwrap();
    writeln!(output, "    working: {}", format_hm(report.working())).unwrap();
    writeln!(output, "    resting: {}", format_hm(report.resting())).unwrap();
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{Local, TimeZone};
    use insta::assert_snapshot;
    use oh_core::Session;

    fn local(hour: u32, minute: u32) -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(2017, 1, 17, hour, minute, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn several_pauses() -> Report {
        let mut session = Session::new(local(8, 0));
        session.stop(local(9, 0));
        session.start(local(9, 20));
        session.stop(local(13, 0));
        session.start(local(14, 0));
        session.stop(local(16, 0));
        session.start(local(16, 15));
        session.stop(local(17, 30));
        session.report().unwrap()
    }

    #[test]
    fn report_text_output() {
        assert_snapshot!(format_report(&several_pauses()), @r"
        Day started at 08:00
        Day ended at 17:30
        Total accounts:
            total:   09:30
            working: 07:55
            resting: 01:35
        ");
    }

    #[test]
    fn report_json_uses_milliseconds() {
        let output = ReportJson::new(&several_pauses(), "Europe/Madrid".to_string());
        let value = serde_json::to_value(&output).unwrap();

        assert_eq!(value["timezone"], "Europe/Madrid");
        assert_eq!(value["total_ms"], 9 * 3_600_000 + 30 * 60_000);
        assert_eq!(value["working_ms"], (7 * 60 + 55) * 60_000);
        assert_eq!(value["resting_ms"], 95 * 60_000);
    }

    #[test]
    fn run_fails_for_open_day() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("day.log");
        std::fs::write(&path, "2017/01/17-08:00 Start\n").unwrap();

        let mut output = Vec::new();
        let err = run(&mut output, &path, false).unwrap_err();

        assert!(format!("{err:#}").contains("session is incomplete"));
        assert!(output.is_empty());
    }
}

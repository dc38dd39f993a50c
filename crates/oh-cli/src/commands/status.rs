//! Status command for the working day in progress.

use std::fmt::Write as _;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use chrono::{DateTime, Datelike, Local, Utc};
use oh_core::{Balance, Report, Schedule, Session};
use serde::Serialize;

use super::util::{format_clock, format_hm, local_timezone};
use crate::logfile::read_session;

/// Whether work is currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Working,
    Stopped,
}

impl State {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Working => "working",
            Self::Stopped => "stopped",
        }
    }
}

/// Computed status data.
#[derive(Debug)]
pub struct StatusData {
    pub state: State,
    pub as_of: DateTime<Utc>,
    pub report: Report,
    pub balance: Balance,
}

/// JSON output structure.
#[derive(Debug, Serialize)]
pub struct StatusJson {
    pub state: State,
    pub as_of: DateTime<Utc>,
    pub start: DateTime<Utc>,
    pub timezone: String,
    pub worked_ms: i64,
    pub resting_ms: i64,
    pub target_ms: i64,
    pub remaining_ms: i64,
    pub expected_exit: DateTime<Utc>,
}

impl StatusJson {
    pub fn new(data: &StatusData, timezone: String) -> Self {
        Self {
            state: data.state,
            as_of: data.as_of,
            start: data.report.start(),
            timezone,
            worked_ms: data.balance.worked.num_milliseconds(),
            resting_ms: data.report.resting().num_milliseconds(),
            target_ms: data.balance.target.num_milliseconds(),
            remaining_ms: data.balance.remaining.num_milliseconds(),
            expected_exit: data.balance.expected_exit,
        }
    }
}

/// Evaluates the session at `now` against the target for the local weekday
/// the day started on.
pub fn compute_status(session: &Session, schedule: &Schedule, now: DateTime<Utc>) -> StatusData {
    let state = if session.is_open() {
        State::Working
    } else {
        State::Stopped
    };
    let report = session.snapshot(now);
    let weekday = report.start().with_timezone(&Local).weekday();
    let balance = Balance::new(&report, schedule.target_for(weekday));
    tracing::debug!(?state, %weekday, "computed status");

    StatusData {
        state,
        as_of: now,
        report,
        balance,
    }
}

pub fn run<W: Write>(
    writer: &mut W,
    log_path: &Path,
    schedule: &Schedule,
    now: DateTime<Utc>,
    json: bool,
) -> Result<()> {
    let session = read_session(log_path)?;
    let data = compute_status(&session, schedule, now);

    if json {
        let output = StatusJson::new(&data, local_timezone());
        serde_json::to_writer_pretty(&mut *writer, &output)?;
        writeln!(writer)?;
    } else {
        write!(writer, "{}", format_status(&data))?;
    }

    Ok(())
}

/// Renders the status for the terminal.
pub fn format_status(data: &StatusData) -> String {
    let balance = &data.balance;
    let mut output = String::new();
    writeln!(output, "State:          {}", data.state.as_str()).unwrap();
    writeln!(output, "Day started at: {}", format_clock(data.report.start())).unwrap();
    writeln!(output, "Worked:         {}", format_hm(balance.worked)).unwrap();
    writeln!(output, "Resting:        {}", format_hm(data.report.resting())).unwrap();
    writeln!(output, "Target:         {}", format_hm(balance.target)).unwrap();
    if balance.is_overtime() {
        writeln!(output, "Overtime:       {}", format_hm(-balance.remaining)).unwrap();
    } else {
        writeln!(output, "Remaining:      {}", format_hm(balance.remaining)).unwrap();
        writeln!(output, "Expected exit:  {}", format_clock(balance.expected_exit)).unwrap();
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{Duration, TimeZone};
    use insta::assert_snapshot;

    /// 2017-01-20 is a Friday.
    fn local(hour: u32, minute: u32) -> DateTime<Utc> {
        Local
            .with_ymd_and_hms(2017, 1, 20, hour, minute, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn status_mid_day() {
        let mut session = Session::new(local(8, 0));
        session.stop(local(10, 0));
        session.start(local(10, 45));

        let data = compute_status(&session, &Schedule::default(), local(12, 0));
        assert_eq!(data.state, State::Working);
        assert_eq!(data.balance.worked, Duration::minutes(195));

        assert_snapshot!(format_status(&data), @r"
        State:          working
        Day started at: 08:00
        Worked:         03:15
        Resting:        00:45
        Target:         06:30
        Remaining:      03:15
        Expected exit:  15:15
        ");
    }

    #[test]
    fn status_after_overtime() {
        let mut session = Session::new(local(8, 0));
        session.stop(local(15, 0));

        let data = compute_status(&session, &Schedule::default(), local(18, 0));
        assert_eq!(data.state, State::Stopped);

        assert_snapshot!(format_status(&data), @r"
        State:          stopped
        Day started at: 08:00
        Worked:         07:00
        Resting:        00:00
        Target:         06:30
        Overtime:       00:30
        ");
    }

    #[test]
    fn status_json_fields() {
        let session = Session::new(local(8, 0));
        let data = compute_status(&session, &Schedule::default(), local(9, 0));
        let value = serde_json::to_value(StatusJson::new(&data, "UTC".to_string())).unwrap();

        assert_eq!(value["state"], "working");
        assert_eq!(value["worked_ms"], 3_600_000);
        assert_eq!(value["remaining_ms"], (390 - 60) * 60_000);
    }
}

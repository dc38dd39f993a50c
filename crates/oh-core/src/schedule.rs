//! Expected working time per weekday and the balance against it.

use chrono::{DateTime, Duration, Utc, Weekday};
use serde::{Deserialize, Serialize};

use crate::report::Report;

/// Target working minutes for each day of the week.
///
/// Defaults to 8h42m Monday to Thursday, 6h30m on Friday and nothing at the
/// weekend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schedule {
    pub monday: u32,
    pub tuesday: u32,
    pub wednesday: u32,
    pub thursday: u32,
    pub friday: u32,
    pub saturday: u32,
    pub sunday: u32,
}

impl Default for Schedule {
    fn default() -> Self {
        const LONG_DAY: u32 = 8 * 60 + 42;
        Self {
            monday: LONG_DAY,
            tuesday: LONG_DAY,
            wednesday: LONG_DAY,
            thursday: LONG_DAY,
            friday: 6 * 60 + 30,
            saturday: 0,
            sunday: 0,
        }
    }
}

impl Schedule {
    #[must_use]
    pub fn target_for(&self, weekday: Weekday) -> Duration {
        let minutes = match weekday {
            Weekday::Mon => self.monday,
            Weekday::Tue => self.tuesday,
            Weekday::Wed => self.wednesday,
            Weekday::Thu => self.thursday,
            Weekday::Fri => self.friday,
            Weekday::Sat => self.saturday,
            Weekday::Sun => self.sunday,
        };
        Duration::minutes(i64::from(minutes))
    }
}

/// Worked time compared against a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balance {
    pub target: Duration,
    pub worked: Duration,
    /// Negative once the target has been exceeded.
    pub remaining: Duration,
    /// When the target is reached if no further pauses are taken.
    pub expected_exit: DateTime<Utc>,
}

impl Balance {
    #[must_use]
    pub fn new(report: &Report, target: Duration) -> Self {
        let worked = report.working();
        Self {
            target,
            worked,
            remaining: target - worked,
            expected_exit: report.start() + target + report.resting(),
        }
    }

    #[must_use]
    pub fn is_overtime(&self) -> bool {
        self.remaining < Duration::zero()
    }
}

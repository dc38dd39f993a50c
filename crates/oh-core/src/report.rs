//! Working day summary derived from an event log.

use chrono::{DateTime, Duration, Utc};

use crate::event::{Event, EventKind};

/// Summary of one working day.
///
/// Built only by reducing a complete event log, never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    total: Duration,
    working: Duration,
    resting: Duration,
}

impl Report {
    /// Reduces events into a report.
    ///
    /// Each interval between consecutive events is attributed by the kind of
    /// the event that closes it: a stop closes a working interval, a start
    /// closes a resting one. Returns `None` for an empty slice.
    pub(crate) fn reduce(events: &[Event]) -> Option<Self> {
        let start = events.first()?.timestamp();
        let end = events.last()?.timestamp();

        let (working, resting) = events.windows(2).fold(
            (Duration::zero(), Duration::zero()),
            |(working, resting), pair| {
                let gap = pair[1].timestamp() - pair[0].timestamp();
                match pair[1].kind() {
                    EventKind::Stop => (working + gap, resting),
                    EventKind::Start => (working, resting + gap),
                }
            },
        );

        let report = Self {
            start,
            end,
            total: end - start,
            working,
            resting,
        };
        tracing::debug!(
            events = events.len(),
            working_min = working.num_minutes(),
            resting_min = resting.num_minutes(),
            "reduced event log"
        );
        Some(report)
    }

    /// Timestamp of the first event of the day.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Timestamp of the last event of the day.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Elapsed time between the first and the last event.
    #[must_use]
    pub const fn total(&self) -> Duration {
        self.total
    }

    #[must_use]
    pub const fn working(&self) -> Duration {
        self.working
    }

    #[must_use]
    pub const fn resting(&self) -> Duration {
        self.resting
    }
}

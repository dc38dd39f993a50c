//! A working day as a sequence of start/stop events.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::event::{Event, EventKind, EventLog};
use crate::report::Report;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The last event is not a stop, so the day has not ended yet.
    #[error("session is incomplete: the last event at {last_event_at} is not a stop")]
    IncompleteSession { last_event_at: DateTime<Utc> },
}

/// One working day.
///
/// Timestamps are always supplied by the caller; nothing here reads the
/// clock. Calls are expected in chronological order with start and stop
/// alternating. Misuse is logged but still recorded, and the report is
/// derived from whatever was recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    log: EventLog,
}

impl Session {
    /// Creates a session whose day started at `t`.
    #[must_use]
    pub fn new(t: DateTime<Utc>) -> Self {
        let mut log = EventLog::new();
        log.append(EventKind::Start, t);
        tracing::debug!(start = %t, "session created");
        Self { log }
    }

    /// Records that work started or resumed at `t`.
    pub fn start(&mut self, t: DateTime<Utc>) {
        self.record(EventKind::Start, t);
    }

    /// Records that work stopped or paused at `t`.
    pub fn stop(&mut self, t: DateTime<Utc>) {
        self.record(EventKind::Stop, t);
    }

    fn record(&mut self, kind: EventKind, t: DateTime<Utc>) {
        if let Some(last) = self.log.last() {
            if last.kind() == kind {
                tracing::warn!(%kind, at = %t, "event repeats the previous kind");
            }
            if t < last.timestamp() {
                tracing::warn!(
                    %kind,
                    at = %t,
                    previous = %last.timestamp(),
                    "event is earlier than the previous one"
                );
            }
        }
        self.log.append(kind, t);
        tracing::debug!(%kind, at = %t, events = self.log.len(), "event recorded");
    }

    /// Derives the day's report.
    ///
    /// Fails while the day is still open (the last event is a start). The
    /// session is left untouched either way, so the caller can `stop` and
    /// ask again.
    pub fn report(&self) -> Result<Report, SessionError> {
        let last = self.last_event();
        if last.kind() != EventKind::Stop {
            return Err(SessionError::IncompleteSession {
                last_event_at: last.timestamp(),
            });
        }
        Ok(Self::reduce(self.log.events()))
    }

    /// Report of the day as it stands at `now`.
    ///
    /// An open session is reduced as if it stopped at `now`; a closed one
    /// yields the same value as [`Session::report`]. A `now` earlier than
    /// the last event is clamped to it.
    #[must_use]
    pub fn snapshot(&self, now: DateTime<Utc>) -> Report {
        let mut events = self.log.events().to_vec();
        if self.is_open() {
            let last_at = self.last_event().timestamp();
            let stop_at = if now < last_at {
                tracing::warn!(
                    at = %now,
                    previous = %last_at,
                    "snapshot is earlier than the last event, clamping"
                );
                last_at
            } else {
                now
            };
            events.push(Event::new(EventKind::Stop, stop_at));
        }
        Self::reduce(&events)
    }

    fn last_event(&self) -> &Event {
        self.log
            .last()
            .unwrap_or_else(|| unreachable!("session log is never empty"))
    }

    fn reduce(events: &[Event]) -> Report {
        Report::reduce(events).unwrap_or_else(|| unreachable!("session log is never empty"))
    }

    /// Whether the last event is a start, i.e. work is in progress.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.log
            .last()
            .is_some_and(|event| event.kind() == EventKind::Start)
    }

    /// Read-only view of the recorded events.
    #[must_use]
    pub const fn events(&self) -> &EventLog {
        &self.log
    }
}

//! Start/stop markers and the append-only log that holds them.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use thiserror::Error;

/// The kind of state transition an event marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Work begins (or resumes after a pause).
    Start,
    /// Work ends (or pauses).
    Stop,
}

impl EventKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "Start",
            Self::Stop => "Stop",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = UnknownEventKind;

    /// Parses an event kind, accepting the screen-lock names as aliases:
    /// an unlock resumes work and a lock pauses it.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "start" | "unlock" => Ok(Self::Start),
            "stop" | "lock" => Ok(Self::Stop),
            _ => Err(UnknownEventKind(s.to_string())),
        }
    }
}

/// Error type for unknown event kind strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown event kind: {0}")]
pub struct UnknownEventKind(String);

/// A timestamped marker. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    kind: EventKind,
    timestamp: DateTime<Utc>,
}

impl Event {
    #[must_use]
    pub const fn new(kind: EventKind, timestamp: DateTime<Utc>) -> Self {
        Self { kind, timestamp }
    }

    #[must_use]
    pub const fn kind(&self) -> EventKind {
        self.kind
    }

    #[must_use]
    pub const fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }
}

/// Ordered history of state transitions for one working day.
///
/// The log only appends. It does not check that kinds alternate or that
/// timestamps move forward; callers that care inspect [`EventLog::last`]
/// before appending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    #[must_use]
    pub const fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn append(&mut self, kind: EventKind, timestamp: DateTime<Utc>) {
        self.events.push(Event::new(kind, timestamp));
    }

    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    #[must_use]
    pub fn first(&self) -> Option<&Event> {
        self.events.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Event> {
        self.events.last()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Event> {
        self.events.iter()
    }
}

//! Core domain logic for office hours tracking.
//!
//! This crate contains the fundamental types and logic for:
//! - Event log: the append-only record of start/stop transitions
//! - Session: one working day and its report derivation
//! - Schedule: expected working time per weekday and the resulting balance

pub mod event;
mod report;
pub mod schedule;
pub mod session;

pub use event::{Event, EventKind, EventLog, UnknownEventKind};
pub use report::Report;
pub use schedule::{Balance, Schedule};
pub use session::{Session, SessionError};

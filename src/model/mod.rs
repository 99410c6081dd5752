//! Data models for scmlog
//!
//! This module contains backend-independent data structures describing
//! one change to one path at one revision.

mod change_kind;
mod log_entry;
mod revision;

pub use change_kind::{Action, EntryKind};
pub use log_entry::{LogEntry, LogTuple};
pub use revision::Revision;

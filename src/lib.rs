//! scmlog - version-control history as a table
//!
//! Collects change records from a VCS log and normalizes them into a
//! uniform, typed table that analysis code can consume regardless of the
//! backend (git, svn, ...) that produced them.
//!
//! This library provides:
//! - [`model`]: Log entry data model
//! - [`scm`]: Time window, progress reporting and the collection pipeline
//! - [`table`]: Columnar table built from log entries
//!
//! A backend implements [`scm::LogCollector`]; callers only use
//! [`get_log`](scm::LogCollector::get_log).

pub mod model;
pub mod scm;
pub mod table;

pub use model::LogEntry;
pub use scm::{CollectorConfig, LogCollector, ScmError};
pub use table::{Table, TableBuilder};

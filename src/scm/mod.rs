//! Log collection layer
//!
//! This module holds what every VCS backend shares: the time window,
//! progress reporting and the pipeline from raw log output to a [`Table`].
//!
//! [`Table`]: crate::table::Table

mod collector;
mod config;
pub mod constants;
mod output;
mod progress;
mod window;

pub use collector::{LogCollector, LogEntries};
pub use config::{CollectorConfig, CollectorConfigBuilder};
pub use output::{RawOutput, RawRecords};
pub use progress::{ProgressHandle, ProgressReporter, ProgressSession, ProgressStep};
pub use window::{DateBound, TimeWindow};

use thiserror::Error;

/// Errors raised by the collection layer itself
///
/// Backend decode errors are not wrapped here; they travel through
/// [`LogCollector::Error`] unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScmError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Contract violation: {0}")]
    ContractViolation(String),
}

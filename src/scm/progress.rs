//! Progress reporting during log collection
//!
//! Collection progress is measured in whole days: a log walks back from the
//! end of the time window towards `after`, so the number of days between an
//! entry's date and the window end tells how much of the window has been
//! covered. Rendering a bar is up to the [`ProgressReporter`] implementation.

use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};

use super::TimeWindow;

/// Receiver of collection progress (e.g. a terminal progress bar)
///
/// Implementations use interior mutability so one handle can be shared by a
/// collector and the caller that renders it.
pub trait ProgressReporter: Send + Sync {
    /// Collection started; `total` is the window length in days
    fn open(&self, total: u64);

    /// An entry moved progress forward
    fn update(&self, step: ProgressStep);

    /// Collection finished, successfully or not
    fn close(&self);
}

/// Shared handle to a progress reporter
pub type ProgressHandle = Arc<dyn ProgressReporter>;

/// One forward move of the progress position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressStep {
    /// Date of the entry that triggered the step (UTC)
    pub date: DateTime<Utc>,

    /// Days of the window covered so far
    pub position: u64,

    /// Days covered since the previous step
    pub advanced: u64,

    /// Window length in days
    pub total: u64,
}

impl ProgressStep {
    /// Fraction of the window covered, in `[0, 1]`
    pub fn fraction(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.position as f64 / self.total as f64
        }
    }
}

/// Scoped progress session for one collection call
///
/// Turns entry dates into [`ProgressStep`]s. The position never goes
/// backwards and never exceeds the total. [`close`](Self::close) must be
/// called on every exit path; the collector wraps the session in a scope
/// guard for that. Without a reporter every method is a no-op.
pub struct ProgressSession {
    reporter: Option<ProgressHandle>,
    end: DateTime<Utc>,
    total: u64,
    position: u64,
    closed: bool,
}

impl ProgressSession {
    /// Start a session over `window`, open-ended windows ending at `now`
    pub fn open(reporter: Option<ProgressHandle>, window: &TimeWindow, now: DateTime<Utc>) -> Self {
        let end = window.end(now);
        let total = window
            .after()
            .map(|after| whole_days(after, end))
            .unwrap_or(0);

        if let Some(reporter) = &reporter {
            reporter.open(total);
        }

        Self {
            reporter,
            end,
            total,
            position: 0,
            closed: false,
        }
    }

    /// Report the date of the entry just collected
    pub fn update(&mut self, date: Option<DateTime<FixedOffset>>) {
        if self.closed {
            return;
        }
        let (Some(reporter), Some(date)) = (&self.reporter, date) else {
            return;
        };

        let date = date.with_timezone(&Utc);
        let position = whole_days(date, self.end).min(self.total);
        if position <= self.position {
            return;
        }

        let step = ProgressStep {
            date,
            position,
            advanced: position - self.position,
            total: self.total,
        };
        self.position = position;
        tracing::trace!(position, total = self.total, "collection progress");
        reporter.update(step);
    }

    /// Finish the session; later calls do nothing
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.closed = true;
        if let Some(reporter) = &self.reporter {
            reporter.close();
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Days covered so far
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Window length in days
    pub fn total(&self) -> u64 {
        self.total
    }
}

/// Whole days from `from` to `to`, zero when `to` is not after `from`
fn whole_days(from: DateTime<Utc>, to: DateTime<Utc>) -> u64 {
    u64::try_from((to - from).num_days()).unwrap_or(0)
}

//! Collector configuration

use std::fmt;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeDelta, Utc};

use super::constants::{DEFAULT_LOOKBACK_DAYS, DEFAULT_PATH};
use super::{DateBound, ProgressHandle, ScmError, TimeWindow};

/// Validated settings shared by every collection call of a collector
///
/// Immutable once built: `path`, the time window and the reference time
/// are fixed for the lifetime of the collector.
#[derive(Clone)]
pub struct CollectorConfig {
    path: PathBuf,
    window: TimeWindow,
    now: DateTime<Utc>,
    progress_bar: Option<ProgressHandle>,
}

impl CollectorConfig {
    /// Start building a configuration
    pub fn builder() -> CollectorConfigBuilder {
        CollectorConfigBuilder::default()
    }

    /// Location of the local repository
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn window(&self) -> &TimeWindow {
        &self.window
    }

    /// Start of the window (defaulted from the look-back when not given)
    pub fn after(&self) -> Option<DateTime<Utc>> {
        self.window.after()
    }

    /// End of the window (`None` = up to the latest revision)
    pub fn before(&self) -> Option<DateTime<Utc>> {
        self.window.before()
    }

    /// Time the configuration was built at; open windows end here
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    pub fn progress_bar(&self) -> Option<&ProgressHandle> {
        self.progress_bar.as_ref()
    }
}

impl fmt::Debug for CollectorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectorConfig")
            .field("path", &self.path)
            .field("window", &self.window)
            .field("now", &self.now)
            .field("progress_bar", &self.progress_bar.is_some())
            .finish()
    }
}

/// Builder for [`CollectorConfig`]
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use scmlog::scm::CollectorConfig;
///
/// let config = CollectorConfig::builder()
///     .path("repo")
///     .after(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap())
///     .build()
///     .unwrap();
/// assert!(config.before().is_none());
/// ```
#[derive(Clone)]
pub struct CollectorConfigBuilder {
    path: PathBuf,
    after: Option<DateBound>,
    before: Option<DateBound>,
    progress_bar: Option<ProgressHandle>,
    lookback: Option<TimeDelta>,
    now: Option<DateTime<Utc>>,
}

impl Default for CollectorConfigBuilder {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_PATH),
            after: None,
            before: None,
            progress_bar: None,
            lookback: Some(TimeDelta::days(DEFAULT_LOOKBACK_DAYS)),
            now: None,
        }
    }
}

impl CollectorConfigBuilder {
    /// Location of the local repository (default `.`)
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = path.into();
        self
    }

    /// Start of the window; must be timezone-aware
    pub fn after(mut self, after: impl Into<DateBound>) -> Self {
        self.after = Some(after.into());
        self
    }

    /// End of the window; must be timezone-aware
    pub fn before(mut self, before: impl Into<DateBound>) -> Self {
        self.before = Some(before.into());
        self
    }

    /// Reporter receiving progress while entries are collected
    pub fn progress_bar(mut self, progress_bar: ProgressHandle) -> Self {
        self.progress_bar = Some(progress_bar);
        self
    }

    /// How far back `after` defaults to (default 365 days)
    ///
    /// `None` leaves `after` open when it is not given.
    pub fn lookback(mut self, lookback: Option<TimeDelta>) -> Self {
        self.lookback = lookback;
        self
    }

    /// Reference time for the defaulted `after` and open-ended windows
    ///
    /// Defaults to the wall clock at [`build`](Self::build) time.
    pub fn now(mut self, now: DateTime<Utc>) -> Self {
        self.now = Some(now);
        self
    }

    /// Validate the settings
    ///
    /// Fails with [`ScmError::InvalidArgument`] when a bound is naive or
    /// when a progress reporter is given without a resolvable `after`.
    pub fn build(self) -> Result<CollectorConfig, ScmError> {
        let before = self.before.map(|b| b.into_utc("before")).transpose()?;
        let after = self.after.map(|a| a.into_utc("after")).transpose()?;

        let now = self.now.unwrap_or_else(Utc::now);
        let after = after.or_else(|| {
            self.lookback
                .and_then(|lookback| now.checked_sub_signed(lookback))
        });

        if self.progress_bar.is_some() && after.is_none() {
            return Err(ScmError::InvalidArgument(
                "progress_bar requires 'after' parameter".to_string(),
            ));
        }

        tracing::debug!(
            path = %self.path.display(),
            ?after,
            ?before,
            progress = self.progress_bar.is_some(),
            "collector configured"
        );

        Ok(CollectorConfig {
            path: self.path,
            window: TimeWindow::new(after, before),
            now,
            progress_bar: self.progress_bar,
        })
    }
}

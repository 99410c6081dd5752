//! Common test utilities for integration tests.
//!
//! Provides a small tab-separated log backend and a progress reporter that
//! records what it was told.
//!
//! Note: Each integration test file compiles as a separate crate,
//! so not all helpers are used in every test file. We suppress
//! dead_code warnings at the module level.

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};
use thiserror::Error;

use scmlog::model::{Action, EntryKind, LogEntry, Revision};
use scmlog::scm::{
    CollectorConfig, LogCollector, LogEntries, ProgressReporter, ProgressStep, RawOutput,
    RawRecords, ScmError,
};
use scmlog::table::Table;

/// Separator used between fields of a test log record
pub const FIELD_SEPARATOR: char = '\t';

/// Errors of the test backend
#[derive(Error, Debug)]
pub enum TsvError {
    #[error(transparent)]
    Scm(#[from] ScmError),

    #[error("Failed to parse log record {line}: {reason}")]
    Parse { line: usize, reason: String },
}

/// Backend decoding one entry per line
///
/// Fields (separated by tab):
/// 1. revision
/// 2. author
/// 3. date (RFC 3339)
/// 4. action (A/M/D)
/// 5. path
/// 6. lines added
/// 7. lines removed
/// 8. message
pub struct TsvCollector {
    config: CollectorConfig,
    log: Vec<String>,
    decoded: AtomicUsize,
}

impl TsvCollector {
    pub fn new(config: CollectorConfig, log: Vec<String>) -> Self {
        Self {
            config,
            log,
            decoded: AtomicUsize::new(0),
        }
    }

    /// Number of records the decoder has looked at
    pub fn decoded(&self) -> usize {
        self.decoded.load(Ordering::SeqCst)
    }

    fn parse_record(line: usize, record: &str) -> Result<LogEntry, TsvError> {
        let fields: Vec<&str> = record.split(FIELD_SEPARATOR).collect();
        if fields.len() < 7 {
            return Err(TsvError::Parse {
                line,
                reason: format!("expected at least 7 fields, got {}", fields.len()),
            });
        }

        let date = DateTime::parse_from_rfc3339(fields[2]).map_err(|e| TsvError::Parse {
            line,
            reason: e.to_string(),
        })?;
        let count = |text: &str| {
            text.parse::<u64>().map_err(|e| TsvError::Parse {
                line,
                reason: e.to_string(),
            })
        };

        Ok(LogEntry {
            revision: Some(Revision::parse(fields[0])),
            author: Some(fields[1].to_string()),
            date: Some(date),
            textmods: Some(true),
            kind: Some(EntryKind::File),
            action: fields[3].parse::<Action>().ok(),
            propmods: Some(false),
            path: Some(fields[4].to_string()),
            message: Some(fields.get(7).copied().unwrap_or_default().to_string()),
            added: count(fields[5])?,
            removed: count(fields[6])?,
        })
    }
}

impl LogCollector for TsvCollector {
    type Error = TsvError;

    fn config(&self) -> &CollectorConfig {
        &self.config
    }

    fn get_log(&self) -> Result<Table, TsvError> {
        let window = self.config.window();
        // Stand-in for a log command honoring --after/--before
        let records: Vec<String> = self
            .log
            .iter()
            .filter(|record| {
                record
                    .split(FIELD_SEPARATOR)
                    .nth(2)
                    .and_then(|date| DateTime::parse_from_rfc3339(date).ok())
                    .is_none_or(|date| window.contains(&date))
            })
            .cloned()
            .collect();
        self.process_output_to_df(RawOutput::records(records))
    }

    fn get_log_entries<'a>(&'a self, records: RawRecords<'a>) -> LogEntries<'a, TsvError> {
        Box::new(records.enumerate().map(move |(line, record)| {
            self.decoded.fetch_add(1, Ordering::SeqCst);
            Self::parse_record(line + 1, &record)
        }))
    }
}

/// Build a tab-separated test record
pub fn record(
    revision: &str,
    author: &str,
    date: &str,
    action: &str,
    path: &str,
    added: u64,
    removed: u64,
) -> String {
    [
        revision.to_string(),
        author.to_string(),
        date.to_string(),
        action.to_string(),
        path.to_string(),
        added.to_string(),
        removed.to_string(),
        format!("change {}", revision),
    ]
    .join("\t")
}

pub fn utc(rfc3339: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(rfc3339)
        .expect("valid RFC 3339 date")
        .with_timezone(&Utc)
}

/// What a [`RecordingReporter`] was told, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Open(u64),
    Update(ProgressStep),
    Close,
}

/// Progress reporter that keeps every call for inspection
#[derive(Default)]
pub struct RecordingReporter {
    events: Mutex<Vec<ProgressEvent>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().expect("reporter lock").clone()
    }

    pub fn open_count(&self) -> usize {
        self.count(|event| matches!(event, ProgressEvent::Open(_)))
    }

    pub fn close_count(&self) -> usize {
        self.count(|event| matches!(event, ProgressEvent::Close))
    }

    pub fn steps(&self) -> Vec<ProgressStep> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ProgressEvent::Update(step) => Some(step),
                _ => None,
            })
            .collect()
    }

    fn count(&self, predicate: impl Fn(&ProgressEvent) -> bool) -> usize {
        self.events().iter().filter(|event| predicate(event)).count()
    }
}

impl ProgressReporter for RecordingReporter {
    fn open(&self, total: u64) {
        self.events
            .lock()
            .expect("reporter lock")
            .push(ProgressEvent::Open(total));
    }

    fn update(&self, step: ProgressStep) {
        self.events
            .lock()
            .expect("reporter lock")
            .push(ProgressEvent::Update(step));
    }

    fn close(&self) {
        self.events
            .lock()
            .expect("reporter lock")
            .push(ProgressEvent::Close);
    }
}

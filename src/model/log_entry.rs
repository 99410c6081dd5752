//! Log entry data model

use chrono::{DateTime, FixedOffset};

use super::{Action, EntryKind, Revision};

/// Field values of a [`LogEntry`] in declaration order
///
/// `(revision, author, date, textmods, kind, action, propmods, path,
/// message, added, removed)`
pub type LogTuple = (
    Option<Revision>,
    Option<String>,
    Option<DateTime<FixedOffset>>,
    Option<bool>,
    Option<EntryKind>,
    Option<Action>,
    Option<bool>,
    Option<String>,
    Option<String>,
    u64,
    u64,
);

/// One change to one path at one revision
///
/// Backends build one entry per decoded log record and never touch it again.
/// Every field except the line counts is optional; use struct update syntax
/// with `..Default::default()` to leave fields unset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LogEntry {
    /// Revision the change belongs to
    pub revision: Option<Revision>,

    /// Author of the revision
    pub author: Option<String>,

    /// Commit date, with the offset reported by the backend
    pub date: Option<DateTime<FixedOffset>>,

    /// Was the content of the path modified?
    pub textmods: Option<bool>,

    /// File, directory or other
    pub kind: Option<EntryKind>,

    /// Added, modified, deleted or other
    pub action: Option<Action>,

    /// Were properties (metadata) of the path modified?
    pub propmods: Option<bool>,

    /// Repository-relative path
    pub path: Option<String>,

    /// Commit message (may be empty)
    pub message: Option<String>,

    /// Lines added
    pub added: u64,

    /// Lines removed
    pub removed: u64,
}

impl LogEntry {
    /// Sum of lines added and lines removed
    pub fn changed(&self) -> u64 {
        self.added.saturating_add(self.removed)
    }

    /// Field values in declaration order
    pub fn as_tuple(&self) -> LogTuple {
        self.clone().into_tuple()
    }

    /// Consume the entry into its field values in declaration order
    pub fn into_tuple(self) -> LogTuple {
        (
            self.revision,
            self.author,
            self.date,
            self.textmods,
            self.kind,
            self.action,
            self.propmods,
            self.path,
            self.message,
            self.added,
            self.removed,
        )
    }
}

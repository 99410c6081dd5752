//! Columnar table of log entries
//!
//! A [`Table`] holds one row per [`LogEntry`](crate::model::LogEntry) and one
//! typed column per entry field, in field declaration order. Tables are
//! produced by [`TableBuilder`] and are read-only apart from re-sorting.

mod builder;
mod render;

pub use builder::TableBuilder;

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::model::{Action, EntryKind, LogTuple, Revision};

/// Column of a log table, in schema order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Revision,
    Author,
    Date,
    Textmods,
    Kind,
    Action,
    Propmods,
    Path,
    Message,
    Added,
    Removed,
}

/// Value type stored in a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Backend revision token
    Revision,
    /// Free text
    String,
    /// Timezone-aware timestamp, normalized to UTC
    Timestamp,
    /// Yes/no flag (text or property modified)
    Bool,
    /// Small closed set of values (kind, action)
    Category,
    /// Non-negative line count
    UInt,
}

impl Column {
    /// All columns in schema order
    pub const ALL: [Column; 11] = [
        Column::Revision,
        Column::Author,
        Column::Date,
        Column::Textmods,
        Column::Kind,
        Column::Action,
        Column::Propmods,
        Column::Path,
        Column::Message,
        Column::Added,
        Column::Removed,
    ];

    /// Column header
    pub fn name(self) -> &'static str {
        match self {
            Column::Revision => "revision",
            Column::Author => "author",
            Column::Date => "date",
            Column::Textmods => "textmods",
            Column::Kind => "kind",
            Column::Action => "action",
            Column::Propmods => "propmods",
            Column::Path => "path",
            Column::Message => "message",
            Column::Added => "added",
            Column::Removed => "removed",
        }
    }

    /// Type of the values stored in this column
    pub fn column_type(self) -> ColumnType {
        match self {
            Column::Revision => ColumnType::Revision,
            Column::Author | Column::Path | Column::Message => ColumnType::String,
            Column::Date => ColumnType::Timestamp,
            Column::Textmods | Column::Propmods => ColumnType::Bool,
            Column::Kind | Column::Action => ColumnType::Category,
            Column::Added | Column::Removed => ColumnType::UInt,
        }
    }
}

/// Typed, columnar collection of log entries
///
/// Row order is the order entries were collected in. Every column has
/// exactly [`Table::len`] values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    revision: Vec<Option<Revision>>,
    author: Vec<Option<String>>,
    date: Vec<Option<DateTime<Utc>>>,
    textmods: Vec<Option<bool>>,
    kind: Vec<Option<EntryKind>>,
    action: Vec<Option<Action>>,
    propmods: Vec<Option<bool>>,
    path: Vec<Option<String>>,
    message: Vec<Option<String>>,
    added: Vec<u64>,
    removed: Vec<u64>,
}

impl Table {
    /// Number of rows
    pub fn len(&self) -> usize {
        self.revision.len()
    }

    /// Whether the table has no rows
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Table schema, in column order
    pub fn columns(&self) -> &'static [Column] {
        &Column::ALL
    }

    /// Column headers, in column order
    pub fn column_names(&self) -> Vec<&'static str> {
        Column::ALL.iter().map(|column| column.name()).collect()
    }

    /// Revision of each row
    pub fn revisions(&self) -> &[Option<Revision>] {
        &self.revision
    }

    /// Commit authors
    pub fn authors(&self) -> &[Option<String>] {
        &self.author
    }

    /// Commit dates, normalized to UTC
    pub fn dates(&self) -> &[Option<DateTime<Utc>>] {
        &self.date
    }

    /// Whether each row changed file contents
    pub fn textmods(&self) -> &[Option<bool>] {
        &self.textmods
    }

    /// Kind of each changed path (file or directory)
    pub fn kinds(&self) -> &[Option<EntryKind>] {
        &self.kind
    }

    /// Action applied to each changed path
    pub fn actions(&self) -> &[Option<Action>] {
        &self.action
    }

    /// Whether each row changed path properties
    pub fn propmods(&self) -> &[Option<bool>] {
        &self.propmods
    }

    /// Changed path of each row
    pub fn paths(&self) -> &[Option<String>] {
        &self.path
    }

    /// Commit messages
    pub fn messages(&self) -> &[Option<String>] {
        &self.message
    }

    /// Lines added per row
    pub fn added(&self) -> &[u64] {
        &self.added
    }

    /// Lines removed per row
    pub fn removed(&self) -> &[u64] {
        &self.removed
    }

    /// Materialized `added + removed` column
    pub fn changed(&self) -> Vec<u64> {
        self.added
            .iter()
            .zip(&self.removed)
            .map(|(added, removed)| added.saturating_add(*removed))
            .collect()
    }

    /// Read back one row as entry field values
    ///
    /// The date comes back expressed in UTC; it is the same instant as the
    /// date of the entry the row was built from.
    pub fn row(&self, index: usize) -> Option<LogTuple> {
        if index >= self.len() {
            return None;
        }

        Some((
            self.revision[index].clone(),
            self.author[index].clone(),
            self.date[index].map(|date| date.fixed_offset()),
            self.textmods[index],
            self.kind[index].clone(),
            self.action[index].clone(),
            self.propmods[index],
            self.path[index].clone(),
            self.message[index].clone(),
            self.added[index],
            self.removed[index],
        ))
    }

    /// Iterate over all rows in order
    pub fn rows(&self) -> impl Iterator<Item = LogTuple> + '_ {
        (0..self.len()).filter_map(move |index| self.row(index))
    }

    /// Stable sort of all rows by date, oldest first; undated rows go last
    pub fn sort_by_date(&mut self) {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by(|&a, &b| match (&self.date[a], &self.date[b]) {
            (Some(x), Some(y)) => x.cmp(y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        });

        self.revision = permute(&self.revision, &order);
        self.author = permute(&self.author, &order);
        self.date = permute(&self.date, &order);
        self.textmods = permute(&self.textmods, &order);
        self.kind = permute(&self.kind, &order);
        self.action = permute(&self.action, &order);
        self.propmods = permute(&self.propmods, &order);
        self.path = permute(&self.path, &order);
        self.message = permute(&self.message, &order);
        self.added = permute(&self.added, &order);
        self.removed = permute(&self.removed, &order);
    }
}

fn permute<T: Clone>(column: &[T], order: &[usize]) -> Vec<T> {
    order.iter().map(|&index| column[index].clone()).collect()
}

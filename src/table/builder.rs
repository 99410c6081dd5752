//! Log entries to table conversion

use chrono::{DateTime, FixedOffset, Utc};

use super::Table;
use crate::model::LogEntry;

/// Builds a [`Table`] out of decoded log entries
pub struct TableBuilder;

impl TableBuilder {
    /// Convert log entries into a table
    ///
    /// The input is drained completely. Rows keep the input order and nothing
    /// is dropped or deduplicated. Once all rows are assembled the date
    /// column is normalized to UTC. Empty input gives an empty table that
    /// still carries the full schema.
    pub fn build<I>(entries: I) -> Table
    where
        I: IntoIterator<Item = LogEntry>,
    {
        let entries = entries.into_iter();
        let mut table = Table::with_capacity(entries.size_hint().0);
        let mut dates = Vec::with_capacity(entries.size_hint().0);

        for entry in entries {
            let (
                revision,
                author,
                date,
                textmods,
                kind,
                action,
                propmods,
                path,
                message,
                added,
                removed,
            ) = entry.into_tuple();

            table.revision.push(revision);
            table.author.push(author);
            dates.push(date);
            table.textmods.push(textmods);
            table.kind.push(kind);
            table.action.push(action);
            table.propmods.push(propmods);
            table.path.push(path);
            table.message.push(message);
            table.added.push(added);
            table.removed.push(removed);
        }

        table.date = normalize_dates(dates);
        table
    }
}

impl FromIterator<LogEntry> for Table {
    fn from_iter<I: IntoIterator<Item = LogEntry>>(iter: I) -> Self {
        TableBuilder::build(iter)
    }
}

impl Table {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            revision: Vec::with_capacity(capacity),
            author: Vec::with_capacity(capacity),
            date: Vec::with_capacity(capacity),
            textmods: Vec::with_capacity(capacity),
            kind: Vec::with_capacity(capacity),
            action: Vec::with_capacity(capacity),
            propmods: Vec::with_capacity(capacity),
            path: Vec::with_capacity(capacity),
            message: Vec::with_capacity(capacity),
            added: Vec::with_capacity(capacity),
            removed: Vec::with_capacity(capacity),
        }
    }
}

/// Express every date in UTC (same instant, different offset)
fn normalize_dates(dates: Vec<Option<DateTime<FixedOffset>>>) -> Vec<Option<DateTime<Utc>>> {
    dates
        .into_iter()
        .map(|date| date.map(|date| date.with_timezone(&Utc)))
        .collect()
}

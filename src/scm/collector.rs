//! Backend-independent log collection pipeline

use super::{CollectorConfig, ProgressSession, RawOutput, RawRecords, ScmError};
use crate::model::LogEntry;
use crate::table::{Table, TableBuilder};

/// Lazy, single-pass sequence of decoded log entries
pub type LogEntries<'a, E> = Box<dyn Iterator<Item = Result<LogEntry, E>> + 'a>;

/// Collects the log of one repository into a [`Table`]
///
/// A backend (git, svn, ...) implements [`get_log`](Self::get_log), which
/// runs its log command restricted to the configured window, and
/// [`get_log_entries`](Self::get_log_entries), which decodes that
/// command's records. Both then meet in
/// [`process_output_to_df`](Self::process_output_to_df).
pub trait LogCollector {
    /// Backend error; decode failures surface as this type, unchanged
    type Error: From<ScmError>;

    /// Settings this collector was built with
    fn config(&self) -> &CollectorConfig;

    /// Run the backend's log command and return its entries as a table
    fn get_log(&self) -> Result<Table, Self::Error>;

    /// Decode raw records into log entries, lazily
    fn get_log_entries<'a>(&'a self, records: RawRecords<'a>) -> LogEntries<'a, Self::Error>;

    /// Turn raw command output into a table
    ///
    /// Opens a progress session, drains [`get_log_entries`] while feeding
    /// each entry's date to the session, closes the session, then builds
    /// the table. The session is closed on every exit path. If decoding
    /// fails the collected entries are dropped and the decoder's error is
    /// returned as is.
    ///
    /// Passing [`RawOutput::Text`] is a programming error in the backend
    /// and fails with [`ScmError::ContractViolation`] before anything is
    /// decoded.
    ///
    /// [`get_log_entries`]: Self::get_log_entries
    fn process_output_to_df(&self, output: RawOutput<'_>) -> Result<Table, Self::Error> {
        let records = match output {
            RawOutput::Records(records) => records,
            RawOutput::Text(text) => {
                return Err(ScmError::ContractViolation(format!(
                    "expected an iterable of records, got a single string of {} bytes",
                    text.len()
                ))
                .into());
            }
        };

        let config = self.config();
        tracing::debug!(path = %config.path().display(), "collecting log entries");

        let session = ProgressSession::open(
            config.progress_bar().cloned(),
            config.window(),
            config.now(),
        );
        let mut session = scopeguard::guard(session, |mut session| session.close());

        let mut entries = Vec::new();
        for entry in self.get_log_entries(records) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::debug!(collected = entries.len(), "log decoding failed");
                    return Err(err);
                }
            };
            session.update(entry.date);
            entries.push(entry);
        }
        drop(session);

        tracing::debug!(entries = entries.len(), "log entries collected");
        Ok(TableBuilder::build(entries))
    }
}

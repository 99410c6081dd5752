//! Raw backend output

use std::fmt;

/// Lazy sequence of raw records (usually lines) from a log command
pub type RawRecords<'a> = Box<dyn Iterator<Item = String> + 'a>;

/// Output of a VCS log command, as handed to the collector
///
/// Decoders work on discrete records. A single opaque text blob is kept
/// representable only so the collector can reject it with
/// [`ScmError::ContractViolation`](super::ScmError::ContractViolation);
/// backends that capture the whole stdout should go through
/// [`RawOutput::lines`].
pub enum RawOutput<'a> {
    /// Discrete records, consumed in a single forward pass
    Records(RawRecords<'a>),

    /// Undivided text
    Text(String),
}

impl<'a> RawOutput<'a> {
    /// Wrap any iterable of records
    pub fn records<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        I::IntoIter: 'a,
        S: Into<String> + 'a,
    {
        RawOutput::Records(Box::new(records.into_iter().map(Into::into)))
    }

    /// Split captured command output into lines
    pub fn lines(text: &'a str) -> Self {
        RawOutput::records(text.lines())
    }
}

impl fmt::Debug for RawOutput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawOutput::Records(_) => f.write_str("RawOutput::Records(..)"),
            RawOutput::Text(text) => f.debug_tuple("RawOutput::Text").field(text).finish(),
        }
    }
}

impl From<String> for RawOutput<'_> {
    fn from(text: String) -> Self {
        RawOutput::Text(text)
    }
}

impl From<&str> for RawOutput<'_> {
    fn from(text: &str) -> Self {
        RawOutput::Text(text.to_string())
    }
}

impl<'a> From<Vec<String>> for RawOutput<'a> {
    fn from(records: Vec<String>) -> Self {
        RawOutput::records(records)
    }
}

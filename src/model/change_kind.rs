//! Kind of path and action recorded for a log entry

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// What kind of filesystem object a log entry refers to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntryKind {
    /// Regular file
    File,

    /// Directory
    Directory,

    /// Anything the backend reports that is neither (symlink, submodule, ...)
    Other(String),
}

impl EntryKind {
    /// Name used in tables
    pub fn as_str(&self) -> &str {
        match self {
            EntryKind::File => "file",
            EntryKind::Directory => "dir",
            EntryKind::Other(other) => other,
        }
    }
}

impl FromStr for EntryKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "file" => EntryKind::File,
            "dir" | "directory" => EntryKind::Directory,
            _ => EntryKind::Other(s.trim().to_string()),
        })
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened to the path at this revision
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Action {
    /// Path was added
    Added,

    /// Path content or metadata was modified
    Modified,

    /// Path was deleted
    Deleted,

    /// Backend-specific action (e.g. svn `R` for replaced)
    Other(String),
}

impl Action {
    /// Get the status indicator character
    pub fn indicator(&self) -> char {
        match self {
            Action::Added => 'A',
            Action::Modified => 'M',
            Action::Deleted => 'D',
            Action::Other(other) => other
                .chars()
                .next()
                .map(|c| c.to_ascii_uppercase())
                .unwrap_or('?'),
        }
    }

    /// Name used in tables
    pub fn as_str(&self) -> &str {
        match self {
            Action::Added => "added",
            Action::Modified => "modified",
            Action::Deleted => "deleted",
            Action::Other(other) => other,
        }
    }
}

impl FromStr for Action {
    type Err = Infallible;

    /// Accepts status letters (`A`, `M`, `D`) and words, case-insensitive
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "a" | "added" | "add" => Action::Added,
            "m" | "modified" | "modify" => Action::Modified,
            "d" | "deleted" | "delete" => Action::Deleted,
            _ => Action::Other(s.trim().to_string()),
        })
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

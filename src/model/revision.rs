//! Revision identifier model

use std::fmt;

/// Backend-defined identifier of one committed change
///
/// Subversion numbers its revisions, git and jj use hashes. Both shapes are
/// ordered so tables can be sorted by revision; numbers sort before ids.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Revision {
    /// Sequential revision number (e.g. `r1234`)
    Number(u64),

    /// Opaque identifier (e.g. a commit hash)
    Id(String),
}

impl Revision {
    /// Parse a revision token as reported by a log command
    ///
    /// Canonical decimal tokens (optionally prefixed with `r`) become
    /// numbers, anything else is kept verbatim as an id. A leading zero or
    /// sign means the token is not a revision number (e.g. an abbreviated
    /// hash made of digits only), so it stays an id.
    pub fn parse(token: &str) -> Self {
        let trimmed = token.trim();
        let digits = trimmed.strip_prefix('r').unwrap_or(trimmed);
        if is_canonical_number(digits)
            && let Ok(number) = digits.parse::<u64>()
        {
            return Revision::Number(number);
        }
        Revision::Id(trimmed.to_string())
    }
}

/// Non-empty ASCII digits without a leading zero (except `0` itself)
fn is_canonical_number(digits: &str) -> bool {
    !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
        && (digits == "0" || !digits.starts_with('0'))
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Revision::Number(number) => write!(f, "{}", number),
            Revision::Id(id) => f.write_str(id),
        }
    }
}

impl From<u64> for Revision {
    fn from(number: u64) -> Self {
        Revision::Number(number)
    }
}

impl From<&str> for Revision {
    fn from(id: &str) -> Self {
        Revision::Id(id.to_string())
    }
}

impl From<String> for Revision {
    fn from(id: String) -> Self {
        Revision::Id(id)
    }
}

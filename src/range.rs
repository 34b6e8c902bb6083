//! Parsing of the `start-end` workspace range given on the command line.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// An inclusive range of workspace numbers, e.g. `1-5`.
///
/// No ordering is enforced: a range with `start > end` is valid and simply
/// yields no workspaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkspaceRange {
    pub start: i64,
    pub end: i64,
}

/// Error from parsing a [`WorkspaceRange`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    #[error("range must be in format 'n-m', got {0:?}")]
    Format(String),
    #[error("invalid start range: {0}")]
    Start(ParseIntError),
    #[error("invalid end range: {0}")]
    End(ParseIntError),
}

impl WorkspaceRange {
    pub fn new(start: i64, end: i64) -> Self {
        Self { start, end }
    }

    /// Number of workspaces the range covers, `end - start + 1`.
    ///
    /// Zero or negative when `start > end`.  Saturates at the `i64` bounds.
    pub fn len(&self) -> i64 {
        self.end.saturating_sub(self.start).saturating_add(1)
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    /// Workspace numbers in ascending order.
    pub fn iter(&self) -> std::ops::RangeInclusive<i64> {
        self.start..=self.end
    }
}

impl FromStr for WorkspaceRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('-').collect();
        if parts.len() != 2 {
            return Err(RangeError::Format(s.to_string()));
        }
        let start = parts[0].parse().map_err(RangeError::Start)?;
        let end = parts[1].parse().map_err(RangeError::End)?;
        Ok(Self { start, end })
    }
}

impl fmt::Display for WorkspaceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

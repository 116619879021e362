//! How a month that has never been saved gets its first rows

use std::fmt;

use serde::{Deserialize, Serialize};

/// Starting content for a month with no stored document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthSeed {
    /// No rows at all
    Empty,
    /// One zero row per default category
    #[default]
    Defaults,
    /// The previous month projected onto the default categories
    #[serde(rename = "previous")]
    ProjectPrevious,
    /// Every row of the previous month, custom ones included
    #[serde(rename = "copy")]
    CopyPrevious,
}

impl MonthSeed {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Defaults => "defaults",
            Self::ProjectPrevious => "previous",
            Self::CopyPrevious => "copy",
        }
    }
}

impl fmt::Display for MonthSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

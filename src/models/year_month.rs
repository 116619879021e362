//! Calendar month keys
//!
//! A budget is stored per user and per calendar month, keyed by a "YYYY-MM"
//! string.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A calendar month (e.g., "2025-01")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Earliest year a four-digit key can hold
    pub const MIN_YEAR: i32 = 1;
    /// Latest year a four-digit key can hold
    pub const MAX_YEAR: i32 = 9999;

    /// Create a year-month, validating the year and month numbers
    pub fn new(year: i32, month: u32) -> Result<Self, YearMonthParseError> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(YearMonthParseError::InvalidYear(year));
        }
        if !(1..=12).contains(&month) {
            return Err(YearMonthParseError::InvalidMonth(month));
        }
        Ok(Self { year, month })
    }

    /// The month containing the given date, clamped to years 0001..=9999
    pub fn from_date(date: NaiveDate) -> Self {
        match date.year() {
            y if y < Self::MIN_YEAR => Self { year: Self::MIN_YEAR, month: 1 },
            y if y > Self::MAX_YEAR => Self { year: Self::MAX_YEAR, month: 12 },
            year => Self {
                year,
                month: date.month(),
            },
        }
    }

    /// The current local month
    pub fn current() -> Self {
        Self::from_date(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Get the next month; 9999-12 is its own successor
    pub fn next(&self) -> Self {
        if self.month == 12 && self.year == Self::MAX_YEAR {
            *self
        } else if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Get the previous month; 0001-01 is its own predecessor
    pub fn prev(&self) -> Self {
        if self.month == 1 && self.year == Self::MIN_YEAR {
            *self
        } else if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Parse a "YYYY-MM" string
    pub fn parse(s: &str) -> Result<Self, YearMonthParseError> {
        let s = s.trim();
        let invalid = || YearMonthParseError::InvalidFormat(s.to_string());

        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        if year.len() != 4 || month.len() != 2 {
            return Err(invalid());
        }

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        Self::new(year, month)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = YearMonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = YearMonthParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}

/// Error type for year-month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearMonthParseError {
    InvalidFormat(String),
    InvalidYear(i32),
    InvalidMonth(u32),
}

impl fmt::Display for YearMonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearMonthParseError::InvalidFormat(s) => {
                write!(f, "Invalid month format (expected YYYY-MM): {}", s)
            }
            YearMonthParseError::InvalidYear(y) => {
                write!(f, "Invalid month: year {} is outside 0001..=9999", y)
            }
            YearMonthParseError::InvalidMonth(m) => write!(f, "Invalid month: {}", m),
        }
    }
}

impl std::error::Error for YearMonthParseError {}

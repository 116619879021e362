//! Custom error types for Presupuesto
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::money::MoneyParseError;
use crate::models::section::Section;
use crate::models::year_month::YearMonthParseError;

/// The main error type for Presupuesto operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// A row or sub-item position that does not exist in its list
    #[error("Index {index} out of range for {target} ({len} entries)")]
    OutOfRange {
        target: String,
        index: usize,
        len: usize,
    },

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid user input (month keys, amounts, user ids, positions)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl BudgetError {
    /// Create an out-of-range error for a row position in a section
    pub fn row_out_of_range(section: Section, index: usize, len: usize) -> Self {
        Self::OutOfRange {
            target: section.to_string(),
            index,
            len,
        }
    }

    /// Create an out-of-range error for a sub-item position inside a row
    pub fn sub_item_out_of_range(section: Section, row: usize, index: usize, len: usize) -> Self {
        Self::OutOfRange {
            target: format!("breakdown of {} row {}", section, row),
            index,
            len,
        }
    }

    /// Check if this is an out-of-range error
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<MoneyParseError> for BudgetError {
    fn from(err: MoneyParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<YearMonthParseError> for BudgetError {
    fn from(err: YearMonthParseError) -> Self {
        Self::Validation(err.to_string())
    }
}

/// Result type alias for Presupuesto operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_row_out_of_range() {
        let err = BudgetError::row_out_of_range(Section::Expenses, 99, 3);
        assert_eq!(
            err.to_string(),
            "Index 99 out of range for expenses (3 entries)"
        );
        assert!(err.is_out_of_range());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_sub_item_out_of_range() {
        let err = BudgetError::sub_item_out_of_range(Section::Incomes, 1, 4, 2);
        assert_eq!(
            err.to_string(),
            "Index 4 out of range for breakdown of incomes row 1 (2 entries)"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BudgetError = io_err.into();
        assert!(matches!(err, BudgetError::Io(_)));
    }

    #[test]
    fn test_from_parse_errors() {
        let err: BudgetError = MoneyParseError::InvalidFormat("abc".into()).into();
        assert!(err.is_validation());

        let err: BudgetError = YearMonthParseError::InvalidMonth(13).into();
        assert!(err.is_validation());
    }
}

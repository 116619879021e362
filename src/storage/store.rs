//! The persistence seam
//!
//! A month is stored as one JSON document per `(user, year-month)` key. Stores
//! hand back the document as found, in its lenient raw shape; normalizing it
//! is the caller's business.

use std::fmt;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetMonth, RawBudgetMonth, YearMonth};

/// Identity of one stored month
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MonthKey {
    pub user_id: String,
    pub year_month: YearMonth,
}

impl MonthKey {
    pub fn new(user_id: impl Into<String>, year_month: YearMonth) -> Self {
        Self {
            user_id: user_id.into(),
            year_month,
        }
    }

    /// The same user's previous calendar month
    pub fn prev(&self) -> Self {
        Self::new(self.user_id.clone(), self.year_month.prev())
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.user_id, self.year_month)
    }
}

/// Where months are read from and written to
pub trait BudgetStore {
    /// The stored document for `key`, or `None` if nothing was ever saved
    fn load(&self, key: &MonthKey) -> BudgetResult<Option<RawBudgetMonth>>;

    /// Merge `month` into the document at `key`, stamping `createdAt` with
    /// `written_at`.
    ///
    /// Top-level fields the month writes replace the stored ones; anything
    /// else already in the document is kept.
    fn save(&self, key: &MonthKey, month: &BudgetMonth, written_at: DateTime<Utc>)
        -> BudgetResult<()>;

    /// Every year-month stored for `user_id`, oldest first
    fn list_months(&self, user_id: &str) -> BudgetResult<Vec<YearMonth>>;
}

/// Reject user ids that are empty or could escape their directory
pub fn validate_user_id(user_id: &str) -> BudgetResult<()> {
    let trimmed = user_id.trim();
    if trimmed.is_empty() {
        return Err(BudgetError::Validation("User id cannot be empty".into()));
    }
    if user_id.contains(['/', '\\']) || user_id.contains("..") {
        return Err(BudgetError::Validation(format!(
            "User id '{}' must not contain path separators or '..'",
            user_id
        )));
    }
    Ok(())
}

/// Upsert `month` into an existing stored document
pub(crate) fn merge_document(
    existing: Option<Value>,
    month: &BudgetMonth,
    written_at: DateTime<Utc>,
) -> BudgetResult<Value> {
    let written = serde_json::to_value(month.with_created_at(written_at))?;

    let mut merged = match existing {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };
    if let Value::Object(fields) = written {
        merged.extend(fields);
    }

    Ok(Value::Object(merged))
}

/// Read a stored document into its raw shape
///
/// Anything other than a JSON object can't be a month at all.
pub(crate) fn raw_from_value(key: &MonthKey, value: Value) -> BudgetResult<RawBudgetMonth> {
    if !value.is_object() {
        return Err(BudgetError::Storage(format!(
            "Stored month {} is not a JSON object",
            key
        )));
    }
    Ok(serde_json::from_value(value)?)
}

//! Month documents as JSON files
//!
//! Layout: `<data_dir>/users/<user_id>/budgets/<YYYY-MM>.json`, one file per
//! month, each written atomically.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::{debug, info};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetMonth, RawBudgetMonth, YearMonth};

use super::file_io::{read_json_optional, write_json_atomic};
use super::store::{merge_document, raw_from_value, validate_user_id, BudgetStore, MonthKey};

/// File-backed month store
#[derive(Debug, Clone)]
pub struct JsonBudgetStore {
    data_dir: PathBuf,
}

impl JsonBudgetStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Directory holding every month of one user
    pub fn budgets_dir(&self, user_id: &str) -> BudgetResult<PathBuf> {
        validate_user_id(user_id)?;
        Ok(self
            .data_dir
            .join("users")
            .join(user_id)
            .join("budgets"))
    }

    /// File holding one month
    pub fn month_file(&self, key: &MonthKey) -> BudgetResult<PathBuf> {
        Ok(self
            .budgets_dir(&key.user_id)?
            .join(format!("{}.json", key.year_month)))
    }
}

impl BudgetStore for JsonBudgetStore {
    fn load(&self, key: &MonthKey) -> BudgetResult<Option<RawBudgetMonth>> {
        let path = self.month_file(key)?;
        debug!(month = %key, path = %path.display(), "reading month");

        read_json_optional::<Value, _>(&path)?
            .map(|value| raw_from_value(key, value))
            .transpose()
    }

    fn save(
        &self,
        key: &MonthKey,
        month: &BudgetMonth,
        written_at: DateTime<Utc>,
    ) -> BudgetResult<()> {
        let path = self.month_file(key)?;
        let existing = read_json_optional::<Value, _>(&path)?;
        let document = merge_document(existing, month, written_at)?;

        write_json_atomic(&path, &document)?;
        info!(month = %key, path = %path.display(), "month written");
        Ok(())
    }

    fn list_months(&self, user_id: &str) -> BudgetResult<Vec<YearMonth>> {
        let dir = self.budgets_dir(user_id)?;
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let entries = std::fs::read_dir(&dir).map_err(|e| {
            BudgetError::Storage(format!("Failed to read {}: {}", dir.display(), e))
        })?;

        let mut months = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let parsed = path
                .file_stem()
                .and_then(|stem| stem.to_str())
                .and_then(|stem| YearMonth::parse(stem).ok());
            match parsed {
                Some(year_month) => months.push(year_month),
                None => debug!(path = %path.display(), "skipping non-month file"),
            }
        }

        months.sort();
        Ok(months)
    }
}

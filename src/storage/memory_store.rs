//! In-memory month store for tests and embedding

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetMonth, RawBudgetMonth, YearMonth};

use super::store::{merge_document, raw_from_value, BudgetStore, MonthKey};

/// Month documents kept as JSON values, with the same merge rules as on disk
#[derive(Debug, Default)]
pub struct MemoryBudgetStore {
    documents: RwLock<HashMap<MonthKey, Value>>,
}

impl MemoryBudgetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a document in place as-is, e.g. a legacy or hand-edited one
    pub fn insert_document(&self, key: MonthKey, document: Value) -> BudgetResult<()> {
        let mut documents = self.documents.write().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        documents.insert(key, document);
        Ok(())
    }

    /// The document stored at `key`, exactly as held
    pub fn document(&self, key: &MonthKey) -> BudgetResult<Option<Value>> {
        let documents = self.documents.read().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(documents.get(key).cloned())
    }
}

impl BudgetStore for MemoryBudgetStore {
    fn load(&self, key: &MonthKey) -> BudgetResult<Option<RawBudgetMonth>> {
        self.document(key)?
            .map(|value| raw_from_value(key, value))
            .transpose()
    }

    fn save(
        &self,
        key: &MonthKey,
        month: &BudgetMonth,
        written_at: DateTime<Utc>,
    ) -> BudgetResult<()> {
        let mut documents = self.documents.write().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        let merged = merge_document(documents.get(key).cloned(), month, written_at)?;
        documents.insert(key.clone(), merged);
        Ok(())
    }

    fn list_months(&self, user_id: &str) -> BudgetResult<Vec<YearMonth>> {
        let documents = self.documents.read().map_err(|e| {
            BudgetError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut months: Vec<YearMonth> = documents
            .keys()
            .filter(|key| key.user_id == user_id)
            .map(|key| key.year_month)
            .collect();
        months.sort();
        Ok(months)
    }
}

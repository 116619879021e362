//! The two row lists of a month

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BudgetError;

/// Which list of a month a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Incomes,
    Expenses,
}

impl Section {
    pub fn all() -> &'static [Self] {
        &[Self::Incomes, Self::Expenses]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Incomes => "incomes",
            Self::Expenses => "expenses",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "incomes" => Ok(Self::Incomes),
            "expense" | "expenses" => Ok(Self::Expenses),
            other => Err(BudgetError::Validation(format!(
                "Unknown section '{}' (expected incomes or expenses)",
                other
            ))),
        }
    }
}

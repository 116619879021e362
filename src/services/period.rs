//! Month navigation
//!
//! Resolves the month names users type (`2025-01`, `current`, `last`) against
//! a fixed "today".

use crate::error::{BudgetError, BudgetResult};
use crate::models::YearMonth;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Service for resolving and describing months
#[derive(Debug, Clone, Copy)]
pub struct PeriodService {
    today: YearMonth,
}

impl PeriodService {
    /// Resolve relative to the current local month
    pub fn new() -> Self {
        Self::at(YearMonth::current())
    }

    /// Resolve relative to a given month
    pub fn at(today: YearMonth) -> Self {
        Self { today }
    }

    pub fn current_month(&self) -> YearMonth {
        self.today
    }

    pub fn is_current(&self, month: &YearMonth) -> bool {
        *month == self.today
    }

    /// Parse a month string or fall back to the current month
    pub fn parse_or_current(&self, input: Option<&str>) -> BudgetResult<YearMonth> {
        match input {
            Some(s) => self.parse(s),
            None => Ok(self.today),
        }
    }

    /// Parse `YYYY-MM` or one of the relative names
    ///
    /// - `current`, `now`, `this`
    /// - `last`, `previous`, `prev`
    /// - `next`
    pub fn parse(&self, input: &str) -> BudgetResult<YearMonth> {
        let s = input.trim().to_lowercase();

        match s.as_str() {
            "current" | "now" | "this" => Ok(self.today),
            "last" | "previous" | "prev" => Ok(self.today.prev()),
            "next" => Ok(self.today.next()),
            _ => YearMonth::parse(&s).map_err(|e| {
                BudgetError::Validation(format!("Invalid month '{}': {}", input.trim(), e))
            }),
        }
    }

    /// e.g. "January 2025"
    pub fn format_friendly(&self, month: &YearMonth) -> String {
        let name = MONTH_NAMES
            .get(month.month() as usize - 1)
            .copied()
            .unwrap_or("?");
        format!("{} {}", name, month.year())
    }
}

impl Default for PeriodService {
    fn default() -> Self {
        Self::new()
    }
}

//! The month aggregate
//!
//! A `BudgetMonth` is the unit that gets edited and persisted: income rows,
//! expense rows, the totals last computed for them and the time of the last
//! save. Rows are shared between snapshots through `Arc` and never mutated in
//! place, so a month returned by an edit is independent of the one it was
//! derived from while only the edited path is copied.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::document::RawBudgetMonth;
use super::money::Money;
use super::row::Row;
use super::section::Section;

/// Income, expense and remaining totals for a month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MonthTotals {
    pub income: Money,
    pub expense: Money,
    pub remaining: Money,
}

impl MonthTotals {
    /// Create totals, deriving the remaining amount
    pub fn new(income: Money, expense: Money) -> Self {
        Self {
            income,
            expense,
            remaining: income - expense,
        }
    }
}

/// One user's budget for one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawBudgetMonth")]
pub struct BudgetMonth {
    pub(crate) incomes: Vec<Arc<Row>>,
    pub(crate) expenses: Vec<Arc<Row>>,
    pub(crate) totals: MonthTotals,

    #[serde(
        rename = "createdAt",
        serialize_with = "chrono::serde::ts_milliseconds_option::serialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub(crate) created_at: Option<DateTime<Utc>>,
}

impl BudgetMonth {
    /// Create a month from its rows, computing totals
    pub fn new(incomes: Vec<Row>, expenses: Vec<Row>) -> Self {
        Self::from_parts(incomes, expenses, MonthTotals::default(), None).with_computed_totals()
    }

    /// Create a month with the given totals as-is, without recomputing them
    pub fn from_parts(
        incomes: Vec<Row>,
        expenses: Vec<Row>,
        totals: MonthTotals,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            incomes: incomes.into_iter().map(Arc::new).collect(),
            expenses: expenses.into_iter().map(Arc::new).collect(),
            totals,
            created_at,
        }
    }

    pub fn incomes(&self) -> &[Arc<Row>] {
        &self.incomes
    }

    pub fn expenses(&self) -> &[Arc<Row>] {
        &self.expenses
    }

    /// The rows of one section
    pub fn rows(&self, section: Section) -> &[Arc<Row>] {
        match section {
            Section::Incomes => &self.incomes,
            Section::Expenses => &self.expenses,
        }
    }

    /// A single row, if `index` is a valid position in `section`
    pub fn row(&self, section: Section, index: usize) -> Option<&Row> {
        self.rows(section).get(index).map(Arc::as_ref)
    }

    /// The totals as last computed or as loaded from storage
    pub fn totals(&self) -> &MonthTotals {
        &self.totals
    }

    /// When this month was last written to storage
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    pub fn is_empty(&self) -> bool {
        self.incomes.is_empty() && self.expenses.is_empty()
    }

    /// Return a copy stamped with a write time
    pub fn with_created_at(&self, created_at: DateTime<Utc>) -> Self {
        Self {
            created_at: Some(created_at),
            ..self.clone()
        }
    }

    /// Return a copy whose totals are computed from its rows
    pub fn with_computed_totals(&self) -> Self {
        Self {
            totals: crate::budget::aggregate::compute_totals(self),
            ..self.clone()
        }
    }

    /// Whether the stored totals agree with the rows
    pub fn totals_are_current(&self) -> bool {
        self.totals == crate::budget::aggregate::compute_totals(self)
    }

    pub(crate) fn rows_mut(&mut self, section: Section) -> &mut Vec<Arc<Row>> {
        match section {
            Section::Incomes => &mut self.incomes,
            Section::Expenses => &mut self.expenses,
        }
    }
}

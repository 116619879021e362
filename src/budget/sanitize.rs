//! Shape normalization
//!
//! Turns a stored document into the canonical month: every label is a string,
//! every amount a number, and "no breakdown" and "empty breakdown" are the
//! same thing. Totals are passed through as found. Making them agree with the
//! rows is `aggregate`'s job, not this module's.

use crate::models::{
    BudgetMonth, MonthTotals, RawBudgetMonth, RawRow, RawSubItem, RawTotals, Row, SubItem,
};

/// Default an absent label to "" and an absent amount to zero
pub fn sanitize_sub_item(raw: &RawSubItem) -> SubItem {
    SubItem {
        label: raw.label.clone().unwrap_or_default(),
        amount: raw.amount.unwrap_or_default(),
    }
}

/// Normalize a stored row; an absent or empty breakdown makes a flat row
pub fn sanitize_row(raw: &RawRow) -> Row {
    let items = raw
        .breakdown
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(sanitize_sub_item)
        .collect();

    Row::from_parts(
        raw.label.clone().unwrap_or_default(),
        raw.amount.unwrap_or_default(),
        items,
    )
}

/// Default each missing total to zero
pub fn sanitize_totals(raw: Option<&RawTotals>) -> MonthTotals {
    raw.map(|t| MonthTotals {
        income: t.income.unwrap_or_default(),
        expense: t.expense.unwrap_or_default(),
        remaining: t.remaining.unwrap_or_default(),
    })
    .unwrap_or_default()
}

/// Normalize a stored month document without recomputing its totals
pub fn sanitize_budget(raw: &RawBudgetMonth) -> BudgetMonth {
    let rows = |list: &Option<Vec<RawRow>>| -> Vec<Row> {
        list.as_deref()
            .unwrap_or_default()
            .iter()
            .map(sanitize_row)
            .collect()
    };

    BudgetMonth::from_parts(
        rows(&raw.incomes),
        rows(&raw.expenses),
        sanitize_totals(raw.totals.as_ref()),
        raw.created_at,
    )
}

/// Normalize an in-memory month the same way a stored one would be
pub fn sanitize_month(month: &BudgetMonth) -> BudgetMonth {
    sanitize_budget(&RawBudgetMonth::from(month))
}

impl From<RawSubItem> for SubItem {
    fn from(raw: RawSubItem) -> Self {
        sanitize_sub_item(&raw)
    }
}

impl From<RawRow> for Row {
    fn from(raw: RawRow) -> Self {
        sanitize_row(&raw)
    }
}

impl From<RawBudgetMonth> for BudgetMonth {
    fn from(raw: RawBudgetMonth) -> Self {
        sanitize_budget(&raw)
    }
}

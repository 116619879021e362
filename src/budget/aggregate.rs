//! Totals
//!
//! Totals are always derived from the rows themselves, never kept as a running
//! figure, so the numbers shown can't drift from the lines they summarize.

use crate::models::{BudgetMonth, Money, MonthTotals, Row, RowValue};

/// The amount a row contributes to its section total.
///
/// A row with at least one sub-item is worth the sum of its sub-items; its
/// stored amount is ignored. Any other row is worth its stored amount.
pub fn effective_value(row: &Row) -> Money {
    match &row.value {
        RowValue::Decomposed { items, .. } if !items.is_empty() => {
            items.iter().map(|item| item.amount).sum()
        }
        RowValue::Decomposed { amount, .. } | RowValue::Flat { amount } => *amount,
    }
}

/// Sum of the effective values of a list of rows
pub fn section_total<R: AsRef<Row>>(rows: &[R]) -> Money {
    rows.iter().map(|row| effective_value(row.as_ref())).sum()
}

/// Income, expense and remaining totals computed from a month's rows
pub fn compute_totals(month: &BudgetMonth) -> MonthTotals {
    MonthTotals::new(
        section_total(month.incomes()),
        section_total(month.expenses()),
    )
}

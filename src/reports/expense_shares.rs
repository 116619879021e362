//! Expense Shares
//!
//! How a month's spending splits across its expense rows.

use crate::models::{BudgetMonth, Money};

/// One expense row's slice of the month's total expense
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseShare {
    /// Row label
    pub label: String,
    /// Effective value of the row
    pub amount: Money,
    /// Percentage of total expense (0-100)
    pub percent: f64,
}

/// Shares of every expense row with a positive effective value, in row order.
///
/// Percentages are taken over the month's computed expense total, so they sum
/// to more than 100 when other rows are negative. With a total that is not
/// positive every percentage is 0.
pub fn expense_shares(month: &BudgetMonth) -> Vec<ExpenseShare> {
    let total = month.with_computed_totals().totals().expense;

    month
        .expenses()
        .iter()
        .filter_map(|row| {
            let amount = row.effective_value();
            if !amount.is_positive() {
                return None;
            }

            let percent = if total.is_positive() {
                (amount.cents() as f64 / total.cents() as f64) * 100.0
            } else {
                0.0
            };

            Some(ExpenseShare {
                label: row.label.clone(),
                amount,
                percent,
            })
        })
        .collect()
}

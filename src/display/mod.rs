//! Display formatting for terminal output
//!
//! Month tables, totals and expense-share bars.

pub mod month;
pub mod report;

pub use month::{format_month, format_section, format_totals};
pub use report::{format_bar, format_expense_shares, format_percentage, separator};

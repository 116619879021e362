//! Reports module for Presupuesto
//!
//! Read-only figures derived from a month, for display.

pub mod expense_shares;

pub use expense_shares::{expense_shares, ExpenseShare};

//! Core data models for Presupuesto
//!
//! This module contains the data structures of a monthly budget: money
//! amounts, line items and their breakdowns, the month aggregate, month keys
//! and the lenient shapes used to read stored documents.

pub mod category;
pub mod document;
pub mod money;
pub mod month;
pub mod row;
pub mod section;
pub mod seed;
pub mod year_month;

pub use category::DefaultCategories;
pub use document::{RawBudgetMonth, RawRow, RawSubItem, RawTotals};
pub use money::Money;
pub use month::{BudgetMonth, MonthTotals};
pub use row::{Row, RowPatch, RowValue, SubItem, SubItemPatch};
pub use section::Section;
pub use seed::MonthSeed;
pub use year_month::YearMonth;

//! Service layer for Presupuesto
//!
//! Ties the pure budget core to a store: loading and normalizing, seeding new
//! months, saving with fresh totals, and resolving month names.

pub mod month;
pub mod period;

pub use month::MonthService;
pub use period::PeriodService;

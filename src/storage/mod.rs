//! Storage layer for Presupuesto
//!
//! A month store trait plus two implementations: JSON files with atomic
//! writes, and an in-memory map.

pub mod file_io;
pub mod json_store;
pub mod memory_store;
pub mod store;

pub use file_io::{read_json_optional, write_json_atomic};
pub use json_store::JsonBudgetStore;
pub use memory_store::MemoryBudgetStore;
pub use store::{validate_user_id, BudgetStore, MonthKey};

//! Presupuesto - monthly budgets from the terminal
//!
//! A month holds income and expense rows. A row is either a flat amount or a
//! breakdown of sub-items, in which case it is worth their sum. Totals are
//! always derived from the rows, stored documents are normalized on the way
//! in, and a new month can start from the default categories or from the
//! month before it.
//!
//! # Architecture
//!
//! - `models`: money, rows, months, month keys and stored-document shapes
//! - `budget`: the pure core (totals, normalization, projection, edits)
//! - `reports`: figures derived from a month
//! - `storage`: the month store trait and its JSON-file and in-memory stores
//! - `services`: loading, seeding and saving months through a store
//! - `config`: paths and user settings
//! - `display` and `cli`: the terminal front end
//!
//! # Example
//!
//! ```rust,ignore
//! use presupuesto::models::{Money, Row, Section};
//! use presupuesto::services::MonthService;
//! use presupuesto::storage::{MemoryBudgetStore, MonthKey};
//!
//! let service = MonthService::new(MemoryBudgetStore::new());
//! let key = MonthKey::new("local", "2025-01".parse()?);
//! let month = service.open(&key, Default::default(), &Default::default())?;
//! let month = month.add_row(Section::Expenses, Row::flat("Luz", Money::from_cents(4500)));
//! service.save(&key, &month)?;
//! ```

pub mod budget;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};

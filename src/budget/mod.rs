//! Budget core
//!
//! Pure, synchronous rules over a month held in memory: how totals are
//! derived, how a stored document is normalized, how a month is seeded from the
//! default categories and how it is edited. Nothing here logs or touches
//! storage.

pub mod aggregate;
pub mod edit;
pub mod projection;
pub mod sanitize;

pub use aggregate::{compute_totals, effective_value, section_total};
pub use projection::project_to_defaults;
pub use sanitize::{sanitize_budget, sanitize_month, sanitize_row, sanitize_sub_item};

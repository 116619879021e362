//! Default category registry
//!
//! The ordered income and expense labels a new month is seeded with. They come
//! from configuration, not from user data.

use serde::{Deserialize, Serialize};

use super::month::BudgetMonth;
use super::section::Section;

const DEFAULT_INCOMES: &[&str] = &["Nómina", "Ingresos adicionales"];

const DEFAULT_EXPENSES: &[&str] = &[
    "Vivienda",
    "Alimentación",
    "Transporte",
    "Gimnasio",
    "Tarjeta crédito",
    "Suscripciones",
];

/// Ordered default labels per section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefaultCategories {
    #[serde(default)]
    pub incomes: Vec<String>,

    #[serde(default)]
    pub expenses: Vec<String>,
}

impl DefaultCategories {
    pub fn new(incomes: Vec<String>, expenses: Vec<String>) -> Self {
        Self { incomes, expenses }
    }

    /// The labels for one section, in seeding order
    pub fn labels(&self, section: Section) -> &[String] {
        match section {
            Section::Incomes => &self.incomes,
            Section::Expenses => &self.expenses,
        }
    }

    /// A month with every default category at zero
    pub fn template(&self) -> BudgetMonth {
        crate::budget::projection::project_to_defaults(&BudgetMonth::default(), self)
    }
}

impl Default for DefaultCategories {
    fn default() -> Self {
        Self {
            incomes: DEFAULT_INCOMES.iter().map(|s| s.to_string()).collect(),
            expenses: DEFAULT_EXPENSES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_default_lists() {
        let defaults = DefaultCategories::default();
        assert_eq!(defaults.labels(Section::Incomes), ["Nómina", "Ingresos adicionales"]);
        assert_eq!(defaults.labels(Section::Expenses).len(), 6);
        assert_eq!(defaults.labels(Section::Expenses)[0], "Vivienda");
    }

    #[test]
    fn test_template_is_all_zero() {
        let month = DefaultCategories::default().template();
        assert_eq!(month.incomes().len(), 2);
        assert_eq!(month.expenses().len(), 6);
        assert!(month
            .incomes()
            .iter()
            .chain(month.expenses())
            .all(|r| r.amount() == Money::zero() && !r.is_decomposed()));
        assert_eq!(month.totals().remaining, Money::zero());
    }

    #[test]
    fn test_missing_lists_deserialize_empty() {
        let defaults: DefaultCategories =
            serde_json::from_str(r#"{"expenses": ["Luz"]}"#).unwrap();
        assert!(defaults.incomes.is_empty());
        assert_eq!(defaults.expenses, vec!["Luz".to_string()]);
    }
}

//! Seeding a month from the default categories
//!
//! Projection rebuilds a month around the default category list: each default
//! label keeps whatever a row with the same label had in the source month, and
//! everything else in the source is dropped. It resets to the template rather
//! than merging into it.

use crate::models::{BudgetMonth, DefaultCategories, Money, Row, Section};

fn pick_by_defaults(source: &BudgetMonth, section: Section, labels: &[String]) -> Vec<Row> {
    let rows = source.rows(section);

    labels
        .iter()
        .map(|label| {
            rows.iter()
                .find(|row| &row.label == label)
                .map(|found| Row::from_parts(label.clone(), found.amount(), found.breakdown().to_vec()))
                .unwrap_or_else(|| Row::flat(label.clone(), Money::zero()))
        })
        .collect()
}

/// Project `previous` onto the default categories.
///
/// Output rows follow the default list order exactly. For each default label
/// the first source row with exactly that label donates its amount and
/// breakdown; a label with no match gets a zero flat row. Totals are computed.
pub fn project_to_defaults(previous: &BudgetMonth, defaults: &DefaultCategories) -> BudgetMonth {
    BudgetMonth::new(
        pick_by_defaults(previous, Section::Incomes, defaults.labels(Section::Incomes)),
        pick_by_defaults(previous, Section::Expenses, defaults.labels(Section::Expenses)),
    )
}

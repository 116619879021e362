//! Month display formatting
//!
//! Formats a month as one table per section, followed by its totals.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::{BudgetMonth, MonthTotals, Row, Section};

#[derive(Tabled)]
struct RowLine {
    #[tabled(rename = "#")]
    position: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

fn row_lines(index: usize, row: &Row, currency: &str) -> Vec<RowLine> {
    let position = index + 1;
    let mut lines = vec![RowLine {
        position: position.to_string(),
        label: row.label.clone(),
        amount: row.effective_value().format_with_symbol(currency),
    }];

    for (sub_index, item) in row.breakdown().iter().enumerate() {
        lines.push(RowLine {
            position: format!("{}.{}", position, sub_index + 1),
            label: format!("  {}", item.label),
            amount: item.amount.format_with_symbol(currency),
        });
    }

    lines
}

/// Format one section as a table, with breakdown items under their row
pub fn format_section(month: &BudgetMonth, section: Section, currency: &str) -> String {
    let rows = month.rows(section);
    if rows.is_empty() {
        return format!("No {}.", section);
    }

    let lines: Vec<RowLine> = rows
        .iter()
        .enumerate()
        .flat_map(|(index, row)| row_lines(index, row, currency))
        .collect();

    let mut table = Table::new(lines);
    table
        .with(Style::sharp())
        .modify(Columns::new(2..), Alignment::right());
    table.to_string()
}

/// Format the income, expense and remaining figures
pub fn format_totals(totals: &MonthTotals, currency: &str) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "{:<12}{:>14}\n",
        "Income:",
        totals.income.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "{:<12}{:>14}\n",
        "Expense:",
        totals.expense.format_with_symbol(currency)
    ));
    output.push_str(&format!(
        "{:<12}{:>14}",
        "Remaining:",
        totals.remaining.format_with_symbol(currency)
    ));
    if totals.remaining.is_negative() {
        output.push_str("  (over budget)");
    }
    output.push('\n');
    output
}

/// Format a whole month: both sections, then totals
pub fn format_month(month: &BudgetMonth, currency: &str) -> String {
    let mut output = String::new();
    for section in Section::all() {
        output.push_str(&format!("{}\n", capitalize(section.as_str())));
        output.push_str(&format_section(month, *section, currency));
        output.push_str("\n\n");
    }
    output.push_str(&format_totals(month.totals(), currency));
    output
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, SubItem};

    fn eur(cents: i64) -> Money {
        Money::from_cents(cents)
    }

    fn sample() -> BudgetMonth {
        BudgetMonth::new(
            vec![Row::flat("Nómina", eur(200000))],
            vec![
                Row::flat("Vivienda", eur(80000)),
                Row::from_parts(
                    "Alimentación",
                    eur(1),
                    vec![
                        SubItem::new("Pollo", eur(2000)),
                        SubItem::new("Mercadona", eur(5550)),
                    ],
                ),
            ],
        )
    }

    #[test]
    fn test_section_shows_effective_values_and_items() {
        let out = format_section(&sample(), Section::Expenses, "€");
        assert!(out.contains("Vivienda"));
        assert!(out.contains("€800.00"));
        assert!(out.contains("€75.50"));
        assert!(!out.contains("€0.01"));
        assert!(out.contains("2.1"));
        assert!(out.contains("Mercadona"));
    }

    #[test]
    fn test_empty_section() {
        let out = format_section(&BudgetMonth::default(), Section::Incomes, "€");
        assert_eq!(out, "No incomes.");
    }

    #[test]
    fn test_totals() {
        let out = format_totals(sample().totals(), "€");
        assert!(out.contains("Income:"));
        assert!(out.contains("€2000.00"));
        assert!(out.contains("€1124.50"));
        assert!(!out.contains("over budget"));

        let over = MonthTotals::new(eur(100), eur(300));
        assert!(format_totals(&over, "$").contains("-$2.00  (over budget)"));
    }

    #[test]
    fn test_format_month_has_both_sections() {
        let out = format_month(&sample(), "€");
        assert!(out.starts_with("Incomes\n"));
        assert!(out.contains("Expenses\n"));
        assert!(out.contains("Remaining:"));
    }
}

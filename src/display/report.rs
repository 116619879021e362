//! Report formatting utilities for terminal output

use crate::reports::ExpenseShare;

const BAR_WIDTH: usize = 20;

/// Format a percentage with appropriate precision
pub fn format_percentage(pct: f64) -> String {
    if pct < 0.1 && pct > 0.0 {
        format!("{:.2}%", pct)
    } else if pct < 10.0 {
        format!("{:.1}%", pct)
    } else {
        format!("{:.0}%", pct)
    }
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return " ".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a separator line
pub fn separator(width: usize) -> String {
    "─".repeat(width)
}

/// One line per expense share: label, amount, bar scaled to 100%, percentage
pub fn format_expense_shares(shares: &[ExpenseShare], currency: &str) -> String {
    if shares.is_empty() {
        return "No expenses to chart.".to_string();
    }

    let label_width = shares
        .iter()
        .map(|s| s.label.chars().count())
        .max()
        .unwrap_or(0)
        .max(5);

    let mut output = String::new();
    for share in shares {
        output.push_str(&format!(
            "{:<label_width$}  {:>12}  {}  {:>6}\n",
            share.label,
            share.amount.format_with_symbol(currency),
            format_bar(share.percent, 100.0, BAR_WIDTH),
            format_percentage(share.percent),
            label_width = label_width,
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(0.05), "0.05%");
        assert_eq!(format_percentage(7.3), "7.3%");
        assert_eq!(format_percentage(62.4), "62%");
        assert_eq!(format_percentage(0.0), "0.0%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50.0, 100.0, 10), "█████░░░░░");
        assert_eq!(format_bar(150.0, 100.0, 4), "████");
        assert_eq!(format_bar(0.0, 100.0, 3), "   ");
    }

    #[test]
    fn test_format_expense_shares() {
        let shares = vec![
            ExpenseShare {
                label: "Vivienda".into(),
                amount: Money::from_cents(75000),
                percent: 75.0,
            },
            ExpenseShare {
                label: "Gimnasio".into(),
                amount: Money::from_cents(25000),
                percent: 25.0,
            },
        ];
        let out = format_expense_shares(&shares, "€");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Vivienda"));
        assert!(lines[0].contains("€750.00"));
        assert!(lines[0].ends_with("75%"));
        assert!(lines[1].contains("█████░"));
    }

    #[test]
    fn test_no_shares() {
        assert_eq!(format_expense_shares(&[], "€"), "No expenses to chart.");
    }
}

//! Month CLI commands
//!
//! Show, list and create months, and add, edit or remove their rows.

use clap::Subcommand;

use super::{parse_amount, position_to_index, CliContext, SeedSource};
use crate::display::{format_expense_shares, format_month, separator};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{MonthSeed, Row, RowPatch, Section};
use crate::reports::expense_shares;

/// Month subcommands
#[derive(Subcommand)]
pub enum MonthCommands {
    /// Show a month's rows, totals and expense shares
    Show {
        /// Month ("2025-01", "current", "last")
        month: Option<String>,
    },

    /// List the months saved for the user
    List,

    /// Create and save a month
    New {
        /// Month ("2025-01", "current", "last")
        month: Option<String>,
        /// What the month starts with (defaults to the configured seed)
        #[arg(short, long, value_enum)]
        from: Option<SeedSource>,
    },

    /// Add a row to a section
    Add {
        /// Section ("incomes" or "expenses")
        section: Section,
        /// Row label
        label: String,
        /// Amount (e.g., "800" or "12,50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Change a row's label or amount
    Edit {
        /// Section ("incomes" or "expenses")
        section: Section,
        /// Row position, starting at 1
        position: usize,
        /// New label
        #[arg(short, long)]
        label: Option<String>,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
        /// Month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Remove a row
    Remove {
        /// Section ("incomes" or "expenses")
        section: Section,
        /// Row position, starting at 1
        position: usize,
        /// Month
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a month command
pub fn handle_month_command(ctx: &CliContext<'_>, cmd: MonthCommands) -> BudgetResult<()> {
    let currency = ctx.settings.currency_symbol.as_str();

    match cmd {
        MonthCommands::Show { month } => {
            let key = ctx.resolve(month.as_deref())?;
            let (month, stored) = match ctx.service.load(&key)? {
                Some(month) => (month, true),
                None => (ctx.open_for_edit(&key)?, false),
            };
            // Stored totals may predate the rows; display derives them.
            let month = month.with_computed_totals();

            println!("Budget: {}", ctx.friendly(&key));
            if !stored {
                println!(
                    "(not saved yet; showing what '{}' would start with)",
                    ctx.settings.default_seed
                );
            }
            println!("{}", separator(40));
            print!("{}", format_month(&month, currency));
            println!();
            println!("Expense shares");
            print!("{}", format_expense_shares(&expense_shares(&month), currency));
            println!();
        }

        MonthCommands::List => {
            let months = ctx.service.list(&ctx.user_id)?;
            if months.is_empty() {
                println!("No months saved for '{}'.", ctx.user_id);
            } else {
                println!("Months saved for '{}':", ctx.user_id);
                for month in months {
                    let marker = if ctx.periods.is_current(&month) {
                        " <- current"
                    } else {
                        ""
                    };
                    println!(
                        "  {} ({}){}",
                        month,
                        ctx.periods.format_friendly(&month),
                        marker
                    );
                }
            }
        }

        MonthCommands::New { month, from } => {
            let key = ctx.resolve(month.as_deref())?;
            if ctx.service.exists(&key)? {
                return Err(BudgetError::Validation(format!(
                    "{} already exists",
                    ctx.friendly(&key)
                )));
            }

            let seed = from.map(MonthSeed::from).unwrap_or(ctx.settings.default_seed);
            let seeded = ctx
                .service
                .seed(&key, seed, &ctx.settings.default_categories)?;

            println!(
                "Created {} from '{}' ({} incomes, {} expenses)",
                ctx.friendly(&key),
                seed,
                seeded.incomes().len(),
                seeded.expenses().len()
            );
            ctx.commit(&key, &seeded)?;
        }

        MonthCommands::Add {
            section,
            label,
            amount,
            month,
        } => {
            let key = ctx.resolve(month.as_deref())?;
            let amount = parse_amount(&amount)?;
            let current = ctx.open_for_edit(&key)?;

            let next = current.add_row(section, Row::flat(label.clone(), amount));
            println!(
                "Added '{}' to {} for {} at position {}",
                label,
                section,
                ctx.friendly(&key),
                next.rows(section).len()
            );
            ctx.commit(&key, &next)?;
        }

        MonthCommands::Edit {
            section,
            position,
            label,
            amount,
            month,
        } => {
            let key = ctx.resolve(month.as_deref())?;
            let index = position_to_index(position, "Row")?;

            let mut patch = RowPatch::default();
            if let Some(label) = label {
                patch = patch.with_label(label);
            }
            if let Some(amount) = amount {
                patch = patch.with_amount(parse_amount(&amount)?);
            }
            if patch.is_empty() {
                return Err(BudgetError::Validation(
                    "Nothing to change: pass --label and/or --amount".into(),
                ));
            }

            let current = ctx.open_for_edit(&key)?;
            let next = current.update_row(section, index, patch)?;
            if let Some(row) = next.row(section, index) {
                if row.is_decomposed() {
                    println!(
                        "Note: '{}' has a breakdown, so its total comes from the breakdown",
                        row.label
                    );
                }
                println!("Updated {} row {}: '{}'", section, position, row.label);
            }
            ctx.commit(&key, &next)?;
        }

        MonthCommands::Remove {
            section,
            position,
            month,
        } => {
            let key = ctx.resolve(month.as_deref())?;
            let index = position_to_index(position, "Row")?;
            let current = ctx.open_for_edit(&key)?;

            let label = current
                .row(section, index)
                .map(|row| row.label.clone())
                .unwrap_or_default();
            let next = current.remove_row(section, index)?;
            println!("Removed '{}' from {}", label, section);
            ctx.commit(&key, &next)?;
        }
    }

    Ok(())
}

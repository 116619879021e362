//! Breakdown CLI commands
//!
//! Sub-items of a row. Once a row has any, its value is their sum.

use clap::Subcommand;

use super::{parse_amount, position_to_index, CliContext};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Section, SubItem, SubItemPatch};

/// Breakdown subcommands
#[derive(Subcommand)]
pub enum BreakdownCommands {
    /// Add a sub-item to a row
    Add {
        /// Section ("incomes" or "expenses")
        section: Section,
        /// Row position, starting at 1
        position: usize,
        /// Sub-item label
        label: String,
        /// Amount
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Month
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Change a sub-item's label or amount
    Edit {
        /// Section ("incomes" or "expenses")
        section: Section,
        /// Row position, starting at 1
        position: usize,
        /// Sub-item position, starting at 1
        item: usize,
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

    /// Remove a sub-item
    Remove {
        /// Section ("incomes" or "expenses")
        section: Section,
        /// Row position, starting at 1
        position: usize,
        /// Sub-item position, starting at 1
        item: usize,
        /// Month
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Handle a breakdown command
pub fn handle_breakdown_command(ctx: &CliContext<'_>, cmd: BreakdownCommands) -> BudgetResult<()> {
    match cmd {
        BreakdownCommands::Add {
            section,
            position,
            label,
            amount,
            month,
        } => {
            let key = ctx.resolve(month.as_deref())?;
            let index = position_to_index(position, "Row")?;
            let amount = parse_amount(&amount)?;
            let current = ctx.open_for_edit(&key)?;

            let next = current.add_sub_item(section, index, SubItem::new(label.clone(), amount))?;
            report_row(&next, section, index, &format!("Added '{}'", label));
            ctx.commit(&key, &next)?;
        }

        BreakdownCommands::Edit {
            section,
            position,
            item,
            label,
            amount,
            month,
        } => {
            let key = ctx.resolve(month.as_deref())?;
            let index = position_to_index(position, "Row")?;
            let sub_index = position_to_index(item, "Item")?;

            let mut patch = SubItemPatch::default();
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
            let next = current.update_sub_item(section, index, sub_index, patch)?;
            report_row(&next, section, index, &format!("Updated item {}", item));
            ctx.commit(&key, &next)?;
        }

        BreakdownCommands::Remove {
            section,
            position,
            item,
            month,
        } => {
            let key = ctx.resolve(month.as_deref())?;
            let index = position_to_index(position, "Row")?;
            let sub_index = position_to_index(item, "Item")?;
            let current = ctx.open_for_edit(&key)?;

            let next = current.remove_sub_item(section, index, sub_index)?;
            report_row(&next, section, index, &format!("Removed item {}", item));
            ctx.commit(&key, &next)?;
        }
    }

    Ok(())
}

fn report_row(month: &crate::models::BudgetMonth, section: Section, index: usize, action: &str) {
    if let Some(row) = month.row(section, index) {
        println!(
            "{} in '{}' ({} items, worth {})",
            action,
            row.label,
            row.breakdown().len(),
            row.effective_value()
        );
    }
}

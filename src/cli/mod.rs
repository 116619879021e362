//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod breakdown;
pub mod month;

pub use breakdown::{handle_breakdown_command, BreakdownCommands};
pub use month::{handle_month_command, MonthCommands};

use clap::ValueEnum;

use crate::config::settings::Settings;
use crate::display::format_totals;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{BudgetMonth, Money, MonthSeed, YearMonth};
use crate::services::{MonthService, PeriodService};
use crate::storage::{JsonBudgetStore, MonthKey};

/// Where a new month's rows come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SeedSource {
    /// No rows
    Empty,
    /// Default categories at zero
    Defaults,
    /// Previous month projected onto the default categories
    Previous,
    /// Full copy of the previous month
    Copy,
}

impl From<SeedSource> for MonthSeed {
    fn from(source: SeedSource) -> Self {
        match source {
            SeedSource::Empty => MonthSeed::Empty,
            SeedSource::Defaults => MonthSeed::Defaults,
            SeedSource::Previous => MonthSeed::ProjectPrevious,
            SeedSource::Copy => MonthSeed::CopyPrevious,
        }
    }
}

/// Everything a command handler needs
pub struct CliContext<'a> {
    pub service: &'a MonthService<JsonBudgetStore>,
    pub settings: &'a Settings,
    pub periods: PeriodService,
    pub user_id: String,
}

impl<'a> CliContext<'a> {
    pub fn key(&self, month: YearMonth) -> MonthKey {
        MonthKey::new(self.user_id.clone(), month)
    }

    /// Resolve an optional month argument against today
    pub fn resolve(&self, month: Option<&str>) -> BudgetResult<MonthKey> {
        Ok(self.key(self.periods.parse_or_current(month)?))
    }

    /// The month to edit: stored, or seeded with the configured default
    pub fn open_for_edit(&self, key: &MonthKey) -> BudgetResult<BudgetMonth> {
        self.service.open(
            key,
            self.settings.default_seed,
            &self.settings.default_categories,
        )
    }

    /// Save an edited month and print the new totals
    pub fn commit(&self, key: &MonthKey, month: &BudgetMonth) -> BudgetResult<BudgetMonth> {
        let saved = self.service.save(key, month)?;
        print!("{}", format_totals(saved.totals(), &self.settings.currency_symbol));
        Ok(saved)
    }

    pub fn friendly(&self, key: &MonthKey) -> String {
        self.periods.format_friendly(&key.year_month)
    }
}

/// Turn a 1-based position typed by the user into an index
pub fn position_to_index(position: usize, what: &str) -> BudgetResult<usize> {
    position
        .checked_sub(1)
        .ok_or_else(|| BudgetError::Validation(format!("{} positions start at 1", what)))
}

/// Parse an amount typed by the user
pub fn parse_amount(input: &str) -> BudgetResult<Money> {
    Money::parse(input)
        .map_err(|e| BudgetError::Validation(format!("Invalid amount '{}': {}", input, e)))
}

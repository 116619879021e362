//! Month service
//!
//! Loading, seeding and saving months through an injected store. Every month
//! handed out has been normalized, and every month written has fresh totals.

use chrono::{SubsecRound, Utc};
use tracing::{debug, info, warn};

use crate::budget::{project_to_defaults, sanitize_budget, sanitize_month};
use crate::error::BudgetResult;
use crate::models::{BudgetMonth, DefaultCategories, MonthSeed, YearMonth};
use crate::storage::{BudgetStore, MonthKey};

/// Service for month persistence and seeding
pub struct MonthService<S> {
    store: S,
}

impl<S: BudgetStore> MonthService<S> {
    /// Create a month service over `store`
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// The stored month at `key`, normalized, or `None` if it was never saved
    ///
    /// Stored totals are returned as found, even when they disagree with the
    /// rows.
    pub fn load(&self, key: &MonthKey) -> BudgetResult<Option<BudgetMonth>> {
        let Some(raw) = self.store.load(key)? else {
            debug!(month = %key, "no stored month");
            return Ok(None);
        };

        if !raw.is_canonical() {
            warn!(month = %key, "stored month needed normalization");
        }

        let month = sanitize_budget(&raw);
        if !month.totals_are_current() {
            warn!(month = %key, "stored totals disagree with rows");
        }
        debug!(month = %key, "month loaded");
        Ok(Some(month))
    }

    /// Whether anything has been saved at `key`
    pub fn exists(&self, key: &MonthKey) -> BudgetResult<bool> {
        Ok(self.store.load(key)?.is_some())
    }

    /// The stored month at `key`, or a fresh one built according to `seed`.
    ///
    /// A seeded month is not written; call [`MonthService::save`] to keep it.
    pub fn open(
        &self,
        key: &MonthKey,
        seed: MonthSeed,
        defaults: &DefaultCategories,
    ) -> BudgetResult<BudgetMonth> {
        if let Some(month) = self.load(key)? {
            return Ok(month);
        }
        self.seed(key, seed, defaults)
    }

    /// Build a fresh month for `key` without looking at what is stored there
    pub fn seed(
        &self,
        key: &MonthKey,
        seed: MonthSeed,
        defaults: &DefaultCategories,
    ) -> BudgetResult<BudgetMonth> {
        let month = match seed {
            MonthSeed::Empty => BudgetMonth::default(),
            MonthSeed::Defaults => defaults.template(),
            MonthSeed::ProjectPrevious => match self.load(&key.prev())? {
                Some(previous) => project_to_defaults(&previous, defaults),
                None => {
                    debug!(month = %key, "no previous month, using defaults");
                    defaults.template()
                }
            },
            MonthSeed::CopyPrevious => match self.load(&key.prev())? {
                Some(previous) => previous.duplicate(),
                None => {
                    debug!(month = %key, "no previous month, starting empty");
                    BudgetMonth::default()
                }
            },
        };

        info!(month = %key, seed = %seed, "month seeded");
        Ok(month)
    }

    /// Recompute, normalize, timestamp and store `month` at `key`.
    ///
    /// Returns the month exactly as it now stands in the store. If the store
    /// fails its error is returned unchanged and nothing else happens.
    pub fn save(&self, key: &MonthKey, month: &BudgetMonth) -> BudgetResult<BudgetMonth> {
        let prepared = sanitize_month(&month.with_computed_totals());
        // Stored timestamps only keep milliseconds
        let written_at = Utc::now().trunc_subsecs(3);

        self.store.save(key, &prepared, written_at)?;
        info!(
            month = %key,
            income = %prepared.totals().income,
            expense = %prepared.totals().expense,
            "month saved"
        );

        Ok(prepared.with_created_at(written_at))
    }

    /// Every month stored for `user_id`, oldest first
    pub fn list(&self, user_id: &str) -> BudgetResult<Vec<YearMonth>> {
        self.store.list_months(user_id)
    }
}

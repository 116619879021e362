//! User settings for Presupuesto
//!
//! Who the budgets belong to, how amounts are shown, and what a brand new
//! month starts with.

use serde::{Deserialize, Serialize};

use super::paths::PresupuestoPaths;
use crate::error::BudgetError;
use crate::models::{DefaultCategories, MonthSeed};

/// User settings for Presupuesto
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Owner of the stored months
    #[serde(default = "default_user_id")]
    pub user_id: String,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// What a month with no stored document starts with
    #[serde(default)]
    pub default_seed: MonthSeed,

    /// Category names every new month is built around
    #[serde(default)]
    pub default_categories: DefaultCategories,
}

fn default_schema_version() -> u32 {
    1
}

fn default_user_id() -> String {
    "local".to_string()
}

fn default_currency() -> String {
    "€".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            user_id: default_user_id(),
            currency_symbol: default_currency(),
            default_seed: MonthSeed::default(),
            default_categories: DefaultCategories::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or defaults if the file doesn't exist yet
    pub fn load_or_create(paths: &PresupuestoPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &PresupuestoPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        crate::storage::file_io::write_atomic(&paths.settings_file(), contents.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.user_id, "local");
        assert_eq!(settings.currency_symbol, "€");
        assert_eq!(settings.default_seed, MonthSeed::Defaults);
        assert_eq!(settings.default_categories.expenses.len(), 6);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PresupuestoPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.user_id = "ana".into();
        settings.default_seed = MonthSeed::ProjectPrevious;
        settings.default_categories = DefaultCategories::new(vec!["Nómina".into()], vec![]);
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"user_id": "ana"}"#).unwrap();
        assert_eq!(settings.user_id, "ana");
        assert_eq!(settings.schema_version, 1);
        assert_eq!(settings.default_categories, DefaultCategories::default());
    }

    #[test]
    fn test_load_without_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PresupuestoPaths::with_base_dir(temp_dir.path().to_path_buf());
        assert_eq!(Settings::load_or_create(&paths).unwrap(), Settings::default());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_corrupt_settings_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = PresupuestoPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ nope").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, BudgetError::Config(_)));
    }
}

//! User settings for the budget tracker
//!
//! Currency, theme and how many categories the breakdown reports show.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::reports::categories::{DEFAULT_TOP_EARNING_CATEGORIES, DEFAULT_TOP_EXPENSE_CATEGORIES};

/// Display theme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// ISO currency code used for display
    #[serde(default = "default_currency")]
    pub currency: String,

    #[serde(default)]
    pub theme: Theme,

    /// Number of categories shown in the spending breakdown
    #[serde(default = "default_top_expense_categories")]
    pub top_expense_categories: usize,

    /// Number of categories shown in the earnings breakdown
    #[serde(default = "default_top_earning_categories")]
    pub top_earning_categories: usize,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_top_expense_categories() -> usize {
    DEFAULT_TOP_EXPENSE_CATEGORIES
}

fn default_top_earning_categories() -> usize {
    DEFAULT_TOP_EARNING_CATEGORIES
}

/// Settings changes requested by the user; `None` keeps the current value
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub currency: Option<String>,
    pub theme: Option<Theme>,
    pub top_expense_categories: Option<usize>,
    pub top_earning_categories: Option<usize>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.currency.is_none()
            && self.theme.is_none()
            && self.top_expense_categories.is_none()
            && self.top_earning_categories.is_none()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency: default_currency(),
            theme: Theme::default(),
            top_expense_categories: default_top_expense_categories(),
            top_earning_categories: default_top_earning_categories(),
        }
    }
}

impl Settings {
    /// Symbol used when formatting amounts in the configured currency
    ///
    /// Unknown codes fall back to the code itself followed by a space.
    pub fn currency_symbol(&self) -> String {
        match self.currency.to_ascii_uppercase().as_str() {
            "USD" | "CAD" | "AUD" | "NZD" | "MXN" => "$".to_string(),
            "EUR" => "€".to_string(),
            "GBP" => "£".to_string(),
            "JPY" | "CNY" => "¥".to_string(),
            "INR" => "₹".to_string(),
            "CHF" => "CHF ".to_string(),
            other => format!("{} ", other),
        }
    }

    /// Apply `update` after validating every field
    ///
    /// Currency codes are three ASCII letters, stored upper-case. Category caps
    /// must be at least 1. Nothing changes when any field is invalid.
    pub fn apply(&mut self, update: SettingsUpdate) -> Result<(), BudgetError> {
        if update.is_empty() {
            return Err(BudgetError::Validation(
                "Nothing to update: pass at least one setting".into(),
            ));
        }

        let currency = update
            .currency
            .map(|code| {
                let code = code.trim();
                if code.len() == 3 && code.chars().all(|c| c.is_ascii_alphabetic()) {
                    Ok(code.to_ascii_uppercase())
                } else {
                    Err(BudgetError::Validation(format!(
                        "Invalid currency code '{}': expected three letters such as USD",
                        code
                    )))
                }
            })
            .transpose()?;

        for (label, cap) in [
            ("top expense categories", update.top_expense_categories),
            ("top earning categories", update.top_earning_categories),
        ] {
            if cap == Some(0) {
                return Err(BudgetError::Validation(format!(
                    "Number of {} must be at least 1",
                    label
                )));
            }
        }

        if let Some(currency) = currency {
            self.currency = currency;
        }
        if let Some(theme) = update.theme {
            self.theme = theme;
        }
        if let Some(cap) = update.top_expense_categories {
            self.top_expense_categories = cap;
        }
        if let Some(cap) = update.top_earning_categories {
            self.top_earning_categories = cap;
        }
        Ok(())
    }

    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                BudgetError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Persisting is left to `init`
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

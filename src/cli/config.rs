//! Configuration CLI commands

use clap::Subcommand;
use tracing::info;

use crate::config::{BudgetPaths, Settings, SettingsUpdate, Theme};
use crate::error::BudgetResult;

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration and paths
    Show,

    /// Change one or more settings
    Set {
        /// ISO currency code, e.g. EUR
        #[arg(long)]
        currency: Option<String>,
        /// Display theme
        #[arg(long, value_enum)]
        theme: Option<Theme>,
        /// Number of expense categories in breakdowns
        #[arg(long)]
        top_expenses: Option<usize>,
        /// Number of earning categories in breakdowns
        #[arg(long)]
        top_earnings: Option<usize>,
    },
}

/// Handle a config command; no subcommand shows the configuration
pub fn handle_config_command(
    paths: &BudgetPaths,
    mut settings: Settings,
    cmd: Option<ConfigCommands>,
) -> BudgetResult<()> {
    match cmd.unwrap_or(ConfigCommands::Show) {
        ConfigCommands::Show => {
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Data file:        {}", paths.document_file().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!();
            print!("{}", format_settings(&settings));
        }

        ConfigCommands::Set {
            currency,
            theme,
            top_expenses,
            top_earnings,
        } => {
            settings.apply(SettingsUpdate {
                currency,
                theme,
                top_expense_categories: top_expenses,
                top_earning_categories: top_earnings,
            })?;
            settings.save(paths)?;

            info!(
                currency = %settings.currency,
                theme = %settings.theme,
                "updated settings"
            );
            println!("Settings saved to: {}", paths.settings_file().display());
            print!("{}", format_settings(&settings));
        }
    }

    Ok(())
}

fn format_settings(settings: &Settings) -> String {
    format!(
        "Settings:\n  Currency: {} ({})\n  Theme: {}\n  Top expense categories: {}\n  Top earning categories: {}\n",
        settings.currency,
        settings.currency_symbol().trim_end(),
        settings.theme,
        settings.top_expense_categories,
        settings.top_earning_categories
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_persists_settings() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let cmd = ConfigCommands::Set {
            currency: Some("eur".into()),
            theme: Some(Theme::Dark),
            top_expenses: None,
            top_earnings: Some(4),
        };
        handle_config_command(&paths, Settings::default(), Some(cmd)).unwrap();

        let saved = Settings::load_or_create(&paths).unwrap();
        assert_eq!(saved.currency, "EUR");
        assert_eq!(saved.theme, Theme::Dark);
        assert_eq!(saved.top_earning_categories, 4);
        assert_eq!(saved.top_expense_categories, 5);
    }

    #[test]
    fn test_invalid_set_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let cmd = ConfigCommands::Set {
            currency: None,
            theme: None,
            top_expenses: Some(0),
            top_earnings: None,
        };
        let err = handle_config_command(&paths, Settings::default(), Some(cmd)).unwrap_err();
        assert!(err.is_validation());
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_format_settings() {
        let output = format_settings(&Settings::default());
        assert!(output.contains("Currency: USD ($)"));
        assert!(output.contains("Theme: light"));
    }
}

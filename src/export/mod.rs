//! Export module for the budget tracker
//!
//! Writes a page report in one of three formats:
//! - CSV: flattened rows for spreadsheets
//! - JSON: machine-readable, with schema version
//! - YAML: human-readable, with a comment header

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_report_csv;
pub use json::{export_report_json, ReportExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_report_yaml;

use clap::ValueEnum;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use crate::error::BudgetResult;
use crate::reports::PageReport;

/// Supported export formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Pretty JSON with schema version
    Json,
    /// Human-readable YAML
    Yaml,
    /// Flattened rows for spreadsheets
    Csv,
}

impl ExportFormat {
    /// File extension for the format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            other => Err(format!(
                "Unknown export format '{}'. Use json, yaml, or csv",
                other
            )),
        }
    }
}

/// Write `report` to `writer` in `format`
pub fn export_report<W: Write>(
    report: &PageReport,
    format: ExportFormat,
    writer: &mut W,
) -> BudgetResult<()> {
    match format {
        ExportFormat::Json => export_report_json(report, writer),
        ExportFormat::Yaml => export_report_yaml(report, writer),
        ExportFormat::Csv => export_report_csv(report, writer),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::models::{BudgetPage, Category, CategoryId, CategoryType, Money, Transaction};
    use chrono::{NaiveDate, TimeZone, Utc};

    /// One page with a $2400 paycheck and $300 of groceries on Tue 2025-10-14
    pub(crate) fn sample_report() -> PageReport {
        let food = Category::with_id("food", "Food", "#4ECDC4", CategoryType::Expense);
        let salary = Category::with_id("pay", "Salary", "#96CEB4", CategoryType::Earning);

        let at = Utc.with_ymd_and_hms(2025, 10, 14, 9, 0, 0).unwrap();
        let mut page = BudgetPage::new("Household");
        page.earnings.push(
            Transaction::recorded_at(Money::from_dollars(2400), "Paycheck", at)
                .with_category(CategoryId::from("pay")),
        );
        page.expenses.push(
            Transaction::recorded_at(Money::from_dollars(300), "Groceries", at)
                .with_category(CategoryId::from("food")),
        );

        PageReport::generate(
            &page,
            &[food, salary],
            &Settings::default(),
            0,
            NaiveDate::from_ymd_opt(2025, 10, 15).unwrap(),
        )
        .unwrap()
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("JSON".parse::<ExportFormat>().unwrap(), ExportFormat::Json);
        assert_eq!("yml".parse::<ExportFormat>().unwrap(), ExportFormat::Yaml);
        assert_eq!("csv".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("xml".parse::<ExportFormat>().is_err());
    }

    #[test]
    fn test_export_dispatch() {
        let report = sample_report();
        for format in [ExportFormat::Json, ExportFormat::Yaml, ExportFormat::Csv] {
            let mut buffer = Vec::new();
            export_report(&report, format, &mut buffer).unwrap();
            assert!(!buffer.is_empty(), "{} export was empty", format);
        }
    }
}

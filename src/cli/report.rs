//! Report CLI commands
//!
//! Summary, category breakdown, weekly chart and export of a budget page.

use chrono::NaiveDate;
use clap::Subcommand;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::display::{
    format_category_breakdown, format_page_report, format_summary, format_weekly_chart,
};
use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_report, ExportFormat};
use crate::models::CategoryType;
use crate::reports::{self, CategoryBreakdown, PageReport};
use crate::services::PageService;
use crate::storage::Storage;

/// Report subcommands
#[derive(Subcommand)]
pub enum ReportCommands {
    /// Full dashboard: summary, top categories and the weekly chart
    Show {
        /// Page name or ID
        page: String,
        /// Weeks from the current one for the weekly chart
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        offset: i32,
        /// Treat this date (YYYY-MM-DD) as today
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Totals, daily budget and projected savings
    Summary {
        /// Page name or ID
        page: String,
    },

    /// Top categories by total
    Categories {
        /// Page name or ID
        page: String,
        /// Only show one type (earning or expense)
        #[arg(short = 't', long = "type")]
        kind: Option<CategoryType>,
        /// Number of categories to show (defaults to the configured caps)
        #[arg(short = 'n', long)]
        top: Option<usize>,
    },

    /// Day-by-day earnings and expenses for one week
    Week {
        /// Page name or ID
        page: String,
        /// Weeks from the current one (-1 = last week, 1 = next week)
        #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
        offset: i32,
        /// Treat this date (YYYY-MM-DD) as today
        #[arg(long)]
        today: Option<NaiveDate>,
    },

    /// Export the full report of a page
    Export {
        /// Page name or ID
        page: String,
        /// Export format
        #[arg(short, long, value_enum, default_value = "json")]
        format: ExportFormat,
        /// Output file path (defaults to the exports directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Weeks from the current one for the weekly series
        #[arg(long, default_value = "0", allow_hyphen_values = true)]
        offset: i32,
        /// Treat this date (YYYY-MM-DD) as today
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

/// Handle a report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> BudgetResult<()> {
    let service = PageService::new(storage);
    let symbol = settings.currency_symbol();

    match cmd {
        ReportCommands::Show {
            page,
            offset,
            today,
        } => {
            let today = today.unwrap_or_else(reports::today);
            let report = service.report(&page, settings, offset, today)?;
            print!("{}", format_page_report(&report, &symbol));
        }

        ReportCommands::Summary { page } => {
            let report = service.report(&page, settings, 0, reports::today())?;
            println!("Budget Summary: {}", report.page_name);
            println!();
            print!("{}", format_summary(&report.summary, &symbol));
        }

        ReportCommands::Categories { page, kind, top } => {
            let page = service.get(&page)?;
            let doc = storage.document.snapshot()?;

            let kinds = match kind {
                Some(kind) => vec![kind],
                None => vec![CategoryType::Expense, CategoryType::Earning],
            };
            for (i, kind) in kinds.into_iter().enumerate() {
                let limit = top.unwrap_or(match kind {
                    CategoryType::Expense => settings.top_expense_categories,
                    CategoryType::Earning => settings.top_earning_categories,
                });
                let breakdown = CategoryBreakdown::generate(
                    page.transactions(kind),
                    &doc.categories,
                    kind,
                    limit,
                );
                if i > 0 {
                    println!();
                }
                print!("{}", format_category_breakdown(&breakdown, &symbol));
            }
        }

        ReportCommands::Week {
            page,
            offset,
            today,
        } => {
            let today = today.unwrap_or_else(reports::today);
            let report = service.report(&page, settings, offset, today)?;
            print!("{}", format_weekly_chart(&report.week, &symbol));
        }

        ReportCommands::Export {
            page,
            format,
            output,
            offset,
            today,
        } => {
            let today = today.unwrap_or_else(reports::today);
            let report = service.report(&page, settings, offset, today)?;
            let output =
                output.unwrap_or_else(|| default_export_path(storage, &report, format));
            write_export(&report, format, &output)?;
            println!("Report exported to: {}", output.display());
        }
    }

    Ok(())
}

/// `<exports dir>/<page>-<date>.<ext>`, with the page name made file-safe
fn default_export_path(storage: &Storage, report: &PageReport, format: ExportFormat) -> PathBuf {
    let stem: String = report
        .page_name
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' { c.to_ascii_lowercase() } else { '_' })
        .collect();
    storage.paths().export_dir().join(format!(
        "{}-{}.{}",
        stem,
        report.generated_for.format("%Y-%m-%d"),
        format.extension()
    ))
}

fn write_export(report: &PageReport, format: ExportFormat, output: &Path) -> BudgetResult<()> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            BudgetError::Export(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let file = File::create(output).map_err(|e| {
        BudgetError::Export(format!(
            "Failed to create file {}: {}",
            output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);
    export_report(report, format, &mut writer)?;
    writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

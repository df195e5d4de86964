//! CSV Export functionality
//!
//! Flattens a page report into one spreadsheet-friendly table. Every row
//! carries a `section` column (`summary`, `expense_category`,
//! `earning_category`, `day`) and leaves the columns that do not apply to
//! it empty. Amounts are plain decimals without a currency symbol.

use serde::Serialize;
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::models::Money;
use crate::reports::{CategoryBreakdown, PageReport};

#[derive(Debug, Default, Serialize)]
struct ReportRow {
    section: &'static str,
    name: String,
    date: Option<String>,
    earnings: Option<String>,
    expenses: Option<String>,
    amount: Option<String>,
    count: Option<usize>,
    percentage: Option<String>,
}

fn decimal(amount: Money) -> String {
    amount.format_with_symbol("")
}

fn summary_row(name: &str, amount: Money) -> ReportRow {
    ReportRow {
        section: "summary",
        name: name.to_string(),
        amount: Some(decimal(amount)),
        ..ReportRow::default()
    }
}

fn category_rows(section: &'static str, breakdown: &CategoryBreakdown) -> Vec<ReportRow> {
    breakdown
        .entries
        .iter()
        .map(|entry| ReportRow {
            section,
            name: entry.category.name.clone(),
            amount: Some(decimal(entry.total)),
            count: Some(entry.count),
            percentage: Some(format!("{:.2}", entry.percentage)),
            ..ReportRow::default()
        })
        .collect()
}

/// Export a page report to CSV
pub fn export_report_csv<W: Write>(report: &PageReport, writer: &mut W) -> BudgetResult<()> {
    let summary = &report.summary;
    let mut rows = vec![
        summary_row("total_earnings", summary.total_earnings),
        summary_row("total_expenses", summary.total_expenses),
        summary_row("net_income", summary.net_income),
        summary_row("max_daily_budget", summary.max_daily_budget),
        summary_row("projected_savings", summary.projected_savings),
    ];
    rows.extend(category_rows("expense_category", &report.top_expenses));
    rows.extend(category_rows("earning_category", &report.top_earnings));
    rows.extend(report.week.days.iter().map(|day| ReportRow {
        section: "day",
        name: day.day_name.clone(),
        date: Some(day.date.format("%Y-%m-%d").to_string()),
        earnings: Some(decimal(day.earnings)),
        expenses: Some(decimal(day.expenses)),
        amount: Some(decimal(day.net)),
        ..ReportRow::default()
    }));

    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in &rows {
        csv_writer
            .serialize(row)
            .map_err(|e| BudgetError::Export(e.to_string()))?;
    }
    csv_writer
        .flush()
        .map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

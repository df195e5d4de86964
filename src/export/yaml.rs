//! YAML Export functionality
//!
//! Same document as the JSON export, prefixed with a comment header for
//! people reading the file.

use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::export::json::ReportExport;
use crate::reports::PageReport;

/// Export a page report to YAML
pub fn export_report_yaml<W: Write>(report: &PageReport, writer: &mut W) -> BudgetResult<()> {
    let export = ReportExport::new(report.clone());
    let io_err = |e: std::io::Error| BudgetError::Export(e.to_string());

    writeln!(writer, "# Budget Report: {}", report.page_name).map_err(io_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(io_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(io_err)?;
    writeln!(writer, "#").map_err(io_err)?;
    writeln!(writer, "# Amounts are in cents.").map_err(io_err)?;
    writeln!(writer).map_err(io_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

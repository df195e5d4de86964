//! JSON Export functionality
//!
//! Exports a page report to JSON with schema versioning. Amounts are
//! serialized as integer cents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{BudgetError, BudgetResult};
use crate::reports::PageReport;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// A page report wrapped with export metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub report: PageReport,
}

impl ReportExport {
    pub fn new(report: PageReport) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            report,
        }
    }
}

/// Export a page report as pretty-printed JSON
pub fn export_report_json<W: Write>(report: &PageReport, writer: &mut W) -> BudgetResult<()> {
    let export = ReportExport::new(report.clone());

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| BudgetError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetError::Export(e.to_string()))?;

    Ok(())
}

// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::rows_to_export;
use crate::models::OutputRow;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of assembled timecard rows.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        rows: &[OutputRow],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        if rows.is_empty() {
            warning("⚠️  No timecard rows for the selected period.");
            return Ok(());
        }

        ensure_writable(path, force)?;
        tracing::debug!(
            format = format.as_str(),
            rows = rows.len(),
            path = %path.display(),
            "exporting timecard"
        );

        let export_rows = rows_to_export(rows);
        match format {
            ExportFormat::Csv => export_csv(&export_rows, path),
            ExportFormat::Json => export_json(&export_rows, path),
        }
    }
}

// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::xlsx::export_xlsx;
use crate::models::HourlyRow;
use std::path::Path;

/// Logica di alto livello per l'export delle righe orarie.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `rows` to `path` in the requested format.
    ///
    /// An empty row set still produces a file with the header line only.
    pub fn export(
        rows: &[HourlyRow],
        format: ExportFormat,
        path: &Path,
        sheet_name: &str,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        match format {
            ExportFormat::Xlsx => export_xlsx(rows, path, sheet_name)?,
            ExportFormat::Csv => export_csv(rows, path)?,
            ExportFormat::Json => export_json(rows, path)?,
        }

        Ok(())
    }
}

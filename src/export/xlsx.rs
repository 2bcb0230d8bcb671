// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::HourlyRow;
use crate::models::hourly_row::get_headers;
use crate::ui::messages::info;
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

/// Formato testo di Excel: nessuna conversione automatica a numero/data.
const TEXT_NUM_FORMAT: &str = "@";

/// Export XLSX: header + one line per row, every cell stored as text.
pub(crate) fn export_xlsx(rows: &[HourlyRow], path: &Path, sheet_name: &str) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = build_workbook(rows, sheet_name)?;
    workbook.save(path).map_err(to_export_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

/// Build the workbook in memory, used by the file export and by tests.
pub(crate) fn build_workbook(rows: &[HourlyRow], sheet_name: &str) -> AppResult<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name).map_err(to_export_error)?;

    let text = Format::new().set_num_format(TEXT_NUM_FORMAT);

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();
    let mut col_widths: Vec<usize> = headers.iter().map(|h| h.width()).collect();

    for (col, header) in headers.iter().enumerate() {
        write_text(worksheet, 0, col as u16, header, &text)?;
    }

    // ---------------------------
    // Righe
    // ---------------------------
    for (idx, row) in rows.iter().enumerate() {
        let r = (idx + 1) as u32;
        for (col, value) in row.to_cells().into_iter().enumerate() {
            write_text(worksheet, r, col as u16, value, &text)?;
            col_widths[col] = col_widths[col].max(value.width());
        }
    }

    // ---------------------------
    // Column widths
    // ---------------------------
    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    Ok(workbook)
}

fn write_text(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &str,
    fmt: &Format,
) -> AppResult<()> {
    worksheet
        .write_string_with_format(row, col, value, fmt)
        .map_err(to_export_error)?;
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

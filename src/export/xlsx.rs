// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::excel_date::{DATE_NUM_FORMAT, TIME_NUM_FORMAT, date_serial, time_serial};
use crate::export::model::{get_headers, record_to_row};
use crate::export::RecordExport;
use crate::models::record::{DATE_FMT, TIME_FMT};
use crate::ui::messages::info;
use chrono::{NaiveDate, NaiveTime};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const SHEET_NAME: &str = "Attendance";

// column indexes, see `get_headers`
const COL_ID: u16 = 0;
const COL_DATE: u16 = 3;
const COL_TIME: u16 = 4;

/// Export XLSX with styling and auto-sized columns.
pub(crate) fn export_xlsx(records: &[RecordExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME).map_err(to_export_error)?;

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_export_error)?;
    }

    worksheet.set_freeze_panes(1, 0).map_err(to_export_error)?;

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);

    // ---------------------------
    // Rows
    // ---------------------------
    for (row_index, rec) in records.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let band_color = if row_index % 2 == 0 { band1 } else { band2 };

        for (col, value) in record_to_row(rec).iter().enumerate() {
            write_cell(worksheet, row, col as u16, value, band_color)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_export_error)?;
    }

    workbook.save(path).map_err(to_export_error)?;

    Ok(())
}

/// Write one cell; id is numeric, date/time become Excel serials, the rest is text.
fn write_cell(worksheet: &mut Worksheet, row: u32, col: u16, s: &str, bg: Color) -> AppResult<()> {
    let base = Format::new()
        .set_background_color(bg)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let serial = match col {
        COL_DATE => NaiveDate::parse_from_str(s, DATE_FMT)
            .ok()
            .and_then(date_serial)
            .map(|v| (v, DATE_NUM_FORMAT)),
        COL_TIME => NaiveTime::parse_from_str(s, TIME_FMT)
            .ok()
            .map(|t| (time_serial(t), TIME_NUM_FORMAT)),
        _ => None,
    };

    if let Some((value, num_format)) = serial {
        worksheet
            .write_with_format(row, col, value, &base.set_num_format(num_format))
            .map_err(to_export_error)?;
        return Ok(());
    }

    if col == COL_ID
        && let Ok(num) = s.parse::<f64>()
    {
        worksheet
            .write_with_format(row, col, num, &base.set_align(FormatAlign::Right))
            .map_err(to_export_error)?;
        return Ok(());
    }

    worksheet
        .write_with_format(row, col, s, &base)
        .map_err(to_export_error)?;
    Ok(())
}

fn to_export_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

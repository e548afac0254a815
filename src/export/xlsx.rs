//! Workbook export: one sheet per ledger table, reproducing the shared
//! workbook the ledger format descends from.

use crate::errors::{AppError, AppResult};
use crate::export::{LedgerDump, notify_export_success};
use rust_xlsxwriter::{Color, Format, FormatBorder, FormatPattern, Workbook, Worksheet};
use std::io;
use std::path::Path;
use unicode_width::UnicodeWidthStr;

pub fn write_workbook(path: &Path, dump: &LedgerDump) -> AppResult<()> {
    let mut workbook = Workbook::new();

    write_sheet(
        workbook.add_worksheet().set_name("Available").map_err(to_app_error)?,
        &["UserId", "EL", "SL", "CL", "TL", "Admin ID", "JoinDate"],
        dump.balances
            .iter()
            .map(|b| {
                vec![
                    b.user_id.to_string(),
                    b.el.to_string(),
                    b.sl.to_string(),
                    b.cl.to_string(),
                    b.tl.to_string(),
                    b.admin_id.to_string(),
                    b.join_date
                        .map(|d| d.format("%Y-%m-%d").to_string())
                        .unwrap_or_default(),
                ]
            })
            .collect(),
    )?;

    write_sheet(
        workbook.add_worksheet().set_name("Used").map_err(to_app_error)?,
        &["UserId", "Leave_Date", "LeaveType", "Duration"],
        dump.used
            .iter()
            .map(|u| {
                vec![
                    u.user_id.to_string(),
                    u.leave_date_str(),
                    u.leave_type.to_db_str().to_string(),
                    u.duration.to_db_str().to_string(),
                ]
            })
            .collect(),
    )?;

    write_sheet(
        workbook.add_worksheet().set_name("Hierarchy").map_err(to_app_error)?,
        &[
            "Admin ID",
            "UserId",
            "Leave_Date",
            "Status",
            "LeaveType",
            "Reason",
            "AppliedDate",
            "Duration",
        ],
        dump.requests
            .iter()
            .map(|r| {
                vec![
                    r.admin_id.to_string(),
                    r.user_id.to_string(),
                    r.leave_date_str(),
                    r.status.to_db_str().to_string(),
                    r.leave_type.to_db_str().to_string(),
                    r.reason.clone(),
                    r.applied_at_str(),
                    r.duration.to_db_str().to_string(),
                ]
            })
            .collect(),
    )?;

    write_sheet(
        workbook.add_worksheet().set_name("ChatHistory").map_err(to_app_error)?,
        &["UserID", "Role", "Message", "Timestamp"],
        dump.chat
            .iter()
            .map(|m| {
                vec![
                    m.user_id.to_string(),
                    m.role.to_db_str().to_string(),
                    m.message.clone(),
                    m.ts_str(),
                ]
            })
            .collect(),
    )?;

    let path_str = path
        .to_str()
        .ok_or_else(|| AppError::from(io::Error::other("invalid path")))?;
    workbook.save(path_str).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn write_sheet(
    worksheet: &mut Worksheet,
    headers: &[&str],
    rows: Vec<Vec<String>>,
) -> AppResult<()> {
    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }
    worksheet.set_freeze_panes(1, 0).ok();

    for (row_index, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            worksheet
                .write((row_index + 1) as u32, col as u16, value.as_str())
                .map_err(to_app_error)?;
            col_widths[col] = col_widths[col].max(UnicodeWidthStr::width(value.as_str()));
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }

    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}

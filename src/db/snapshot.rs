//! Whole-table snapshots.
//!
//! The ledger mutates through read-modify-write over complete in-memory
//! copies of each table, persisted back with delete-and-reinsert inside
//! one transaction. This mirrors how a shared workbook behaves: the last
//! writer to persist a table wins.

use crate::errors::AppError;
use crate::models::{Balance, ChatMessage, Duration, LeaveRequest, LeaveStatus, LeaveType, Role, UsedLeave};
use crate::utils::date::{parse_leave_date, parse_timestamp};
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};

fn bad_cell(field: &str, value: &str) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(
        0,
        rusqlite::types::Type::Text,
        Box::new(AppError::Other(format!("bad {field}: {value}"))),
    )
}

// ---------------------------
// available
// ---------------------------

fn map_balance(row: &Row) -> Result<Balance> {
    let join_raw: String = row.get("join_date")?;
    let join_date = NaiveDate::parse_from_str(&join_raw, "%Y-%m-%d").ok();
    Ok(Balance {
        user_id: row.get("user_id")?,
        el: row.get("el")?,
        sl: row.get("sl")?,
        cl: row.get("cl")?,
        tl: row.get("tl")?,
        admin_id: row.get("admin_id")?,
        join_date,
    })
}

pub fn load_balances(conn: &Connection) -> Result<Vec<Balance>> {
    let mut stmt = conn.prepare(
        "SELECT user_id, el, sl, cl, tl, admin_id, join_date FROM available ORDER BY user_id",
    )?;
    let rows = stmt.query_map([], map_balance)?;
    rows.collect()
}

pub fn save_balances(conn: &Connection, table: &[Balance]) -> Result<()> {
    conn.execute("DELETE FROM available", [])?;
    let mut stmt = conn.prepare(
        "INSERT INTO available (user_id, el, sl, cl, tl, admin_id, join_date)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
    )?;
    for b in table {
        stmt.execute(params![
            b.user_id,
            b.el,
            b.sl,
            b.cl,
            b.tl,
            b.admin_id,
            b.join_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        ])?;
    }
    Ok(())
}

// ---------------------------
// hierarchy
// ---------------------------

fn map_request(row: &Row) -> Result<LeaveRequest> {
    let date_raw: String = row.get("leave_date")?;
    let leave_date = parse_leave_date(&date_raw).ok_or_else(|| bad_cell("leave_date", &date_raw))?;

    let status_raw: String = row.get("status")?;
    let status =
        LeaveStatus::from_db_str(&status_raw).ok_or_else(|| bad_cell("status", &status_raw))?;

    let type_raw: String = row.get("leave_type")?;
    let leave_type =
        LeaveType::from_db_str(&type_raw).ok_or_else(|| bad_cell("leave_type", &type_raw))?;

    let applied_raw: String = row.get("applied_at")?;
    let applied_at =
        parse_timestamp(&applied_raw).ok_or_else(|| bad_cell("applied_at", &applied_raw))?;

    let duration_raw: String = row.get("duration")?;
    let duration =
        Duration::from_db_str(&duration_raw).ok_or_else(|| bad_cell("duration", &duration_raw))?;

    Ok(LeaveRequest {
        admin_id: row.get("admin_id")?,
        user_id: row.get("user_id")?,
        leave_date,
        status,
        leave_type,
        reason: row.get("reason")?,
        applied_at,
        duration,
    })
}

pub fn load_requests(conn: &Connection) -> Result<Vec<LeaveRequest>> {
    let mut stmt = conn.prepare(
        "SELECT admin_id, user_id, leave_date, status, leave_type, reason, applied_at, duration
         FROM hierarchy ORDER BY applied_at, rowid",
    )?;
    let rows = stmt.query_map([], map_request)?;
    rows.collect()
}

pub fn save_requests(conn: &Connection, table: &[LeaveRequest]) -> Result<()> {
    conn.execute("DELETE FROM hierarchy", [])?;
    let mut stmt = conn.prepare(
        "INSERT INTO hierarchy (admin_id, user_id, leave_date, status, leave_type, reason, applied_at, duration)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )?;
    for r in table {
        stmt.execute(params![
            r.admin_id,
            r.user_id,
            r.leave_date_str(),
            r.status.to_db_str(),
            r.leave_type.to_db_str(),
            r.reason,
            r.applied_at_str(),
            r.duration.to_db_str(),
        ])?;
    }
    Ok(())
}

// ---------------------------
// used
// ---------------------------

fn map_used(row: &Row) -> Result<UsedLeave> {
    let date_raw: String = row.get("leave_date")?;
    let leave_date = parse_leave_date(&date_raw).ok_or_else(|| bad_cell("leave_date", &date_raw))?;

    let type_raw: String = row.get("leave_type")?;
    let leave_type =
        LeaveType::from_db_str(&type_raw).ok_or_else(|| bad_cell("leave_type", &type_raw))?;

    let duration_raw: String = row.get("duration")?;
    let duration =
        Duration::from_db_str(&duration_raw).ok_or_else(|| bad_cell("duration", &duration_raw))?;

    Ok(UsedLeave {
        user_id: row.get("user_id")?,
        leave_date,
        leave_type,
        duration,
    })
}

pub fn load_used(conn: &Connection) -> Result<Vec<UsedLeave>> {
    let mut stmt = conn
        .prepare("SELECT user_id, leave_date, leave_type, duration FROM used ORDER BY leave_date")?;
    let rows = stmt.query_map([], map_used)?;
    rows.collect()
}

pub fn save_used(conn: &Connection, table: &[UsedLeave]) -> Result<()> {
    conn.execute("DELETE FROM used", [])?;
    let mut stmt = conn.prepare(
        "INSERT INTO used (user_id, leave_date, leave_type, duration) VALUES (?1, ?2, ?3, ?4)",
    )?;
    for u in table {
        stmt.execute(params![
            u.user_id,
            u.leave_date_str(),
            u.leave_type.to_db_str(),
            u.duration.to_db_str(),
        ])?;
    }
    Ok(())
}

// ---------------------------
// chat_history
// ---------------------------

fn map_chat(row: &Row) -> Result<ChatMessage> {
    let role_raw: String = row.get("role")?;
    let role = Role::from_db_str(&role_raw).ok_or_else(|| bad_cell("role", &role_raw))?;

    let ts_raw: String = row.get("ts")?;
    let ts = parse_timestamp(&ts_raw).ok_or_else(|| bad_cell("ts", &ts_raw))?;

    Ok(ChatMessage {
        user_id: row.get("user_id")?,
        role,
        message: row.get("message")?,
        ts,
    })
}

pub fn load_chat(conn: &Connection) -> Result<Vec<ChatMessage>> {
    let mut stmt =
        conn.prepare("SELECT user_id, role, message, ts FROM chat_history ORDER BY rowid")?;
    let rows = stmt.query_map([], map_chat)?;
    rows.collect()
}

pub fn save_chat(conn: &Connection, table: &[ChatMessage]) -> Result<()> {
    conn.execute("DELETE FROM chat_history", [])?;
    let mut stmt = conn.prepare(
        "INSERT INTO chat_history (user_id, role, message, ts) VALUES (?1, ?2, ?3, ?4)",
    )?;
    for m in table {
        stmt.execute(params![
            m.user_id,
            m.role.to_db_str(),
            m.message,
            m.ts_str(),
        ])?;
    }
    Ok(())
}

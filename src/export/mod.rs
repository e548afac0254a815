mod csv;
mod json;
mod xlsx;

use crate::db::ledger::Ledger;
use crate::errors::AppResult;
use crate::models::{Balance, ChatMessage, LeaveRequest, UsedLeave};
use crate::ui::messages::success;
use clap::ValueEnum;
use serde::Serialize;
use std::path::Path;

pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Snapshot of the whole ledger, the unit of every export.
#[derive(Debug, Serialize)]
pub struct LedgerDump {
    pub balances: Vec<Balance>,
    pub requests: Vec<LeaveRequest>,
    pub used: Vec<UsedLeave>,
    pub chat: Vec<ChatMessage>,
}

impl LedgerDump {
    pub fn collect(ledger: &mut Ledger) -> AppResult<Self> {
        Ok(Self {
            balances: ledger.all_balances()?,
            requests: ledger.all_requests()?,
            used: ledger.all_used()?,
            chat: ledger.all_chat()?,
        })
    }
}

pub fn export(ledger: &mut Ledger, format: &ExportFormat, path: &Path) -> AppResult<()> {
    let dump = LedgerDump::collect(ledger)?;
    match format {
        ExportFormat::Csv => csv::write_csv(path, &dump),
        ExportFormat::Json => json::write_json(path, &dump),
        ExportFormat::Xlsx => xlsx::write_workbook(path, &dump),
    }
}

use crate::errors::{AppError, AppResult};
use crate::export::{LedgerDump, notify_export_success};
use std::path::Path;

/// Write all four tables as one pretty-printed JSON document.
pub fn write_json(path: &Path, dump: &LedgerDump) -> AppResult<()> {
    let json = serde_json::to_string_pretty(dump).map_err(|e| AppError::Export(e.to_string()))?;
    std::fs::write(path, json)?;
    notify_export_success("JSON", path);
    Ok(())
}

use crate::errors::{AppError, AppResult};
use crate::export::{LedgerDump, notify_export_success};
use csv::Writer;
use std::path::Path;

/// Write the requests table as CSV, one row per leave day.
pub fn write_csv(path: &Path, dump: &LedgerDump) -> AppResult<()> {
    let mut wtr = Writer::from_path(path).map_err(|e| AppError::Export(e.to_string()))?;

    wtr.write_record([
        "Admin ID",
        "UserId",
        "Leave_Date",
        "Status",
        "LeaveType",
        "Reason",
        "AppliedDate",
        "Duration",
    ])
    .map_err(|e| AppError::Export(e.to_string()))?;

    for r in &dump.requests {
        wtr.write_record(&[
            r.admin_id.to_string(),
            r.user_id.to_string(),
            r.leave_date_str(),
            r.status.to_db_str().to_string(),
            r.leave_type.to_db_str().to_string(),
            r.reason.clone(),
            r.applied_at_str(),
            r.duration.to_db_str().to_string(),
        ])
        .map_err(|e| AppError::Export(e.to_string()))?;
    }

    wtr.flush()?;
    notify_export_success("CSV", path);
    Ok(())
}

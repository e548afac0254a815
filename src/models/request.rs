use super::{duration::Duration, leave_type::LeaveType, status::LeaveStatus};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One row of the `hierarchy` table: a leave request awaiting or past an
/// administrator decision. Identity is (user_id, leave_date) while the row
/// is not Rejected.
#[derive(Debug, Clone, Serialize)]
pub struct LeaveRequest {
    pub admin_id: i64,            // ⇔ hierarchy.admin_id
    pub user_id: i64,             // ⇔ hierarchy.user_id
    pub leave_date: NaiveDate,    // ⇔ hierarchy.leave_date (TEXT "YYYY-MM-DD 00:00:00")
    pub status: LeaveStatus,      // ⇔ hierarchy.status
    pub leave_type: LeaveType,    // ⇔ hierarchy.leave_type
    pub reason: String,           // ⇔ hierarchy.reason
    pub applied_at: NaiveDateTime, // ⇔ hierarchy.applied_at (TEXT "YYYY-MM-DD HH:MM:SS")
    pub duration: Duration,       // ⇔ hierarchy.duration
}

impl LeaveRequest {
    pub fn leave_date_str(&self) -> String {
        self.leave_date.format("%Y-%m-%d 00:00:00").to_string()
    }

    pub fn applied_at_str(&self) -> String {
        self.applied_at.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

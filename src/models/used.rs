use super::{duration::Duration, leave_type::LeaveType};
use chrono::NaiveDate;
use serde::Serialize;

/// One row of the `used` table: an approved leave day. Append-only.
#[derive(Debug, Clone, Serialize)]
pub struct UsedLeave {
    pub user_id: i64,
    pub leave_date: NaiveDate, // TEXT "YYYY-MM-DD 00:00:00"
    pub leave_type: LeaveType,
    pub duration: Duration,
}

impl UsedLeave {
    pub fn leave_date_str(&self) -> String {
        self.leave_date.format("%Y-%m-%d 00:00:00").to_string()
    }
}

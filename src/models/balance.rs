use super::leave_type::LeaveType;
use chrono::NaiveDate;
use serde::Serialize;

/// One row of the `available` table: per-user leave counters.
#[derive(Debug, Clone, Serialize)]
pub struct Balance {
    pub user_id: i64,   // ⇔ available.user_id (INTEGER, unique)
    pub el: i64,        // ⇔ available.el
    pub sl: i64,        // ⇔ available.sl
    pub cl: i64,        // ⇔ available.cl
    pub tl: i64,        // ⇔ available.tl (always el + sl + cl)
    pub admin_id: i64,  // ⇔ available.admin_id
    pub join_date: Option<NaiveDate>, // ⇔ available.join_date (TEXT "YYYY-MM-DD")
}

impl Balance {
    pub fn get(&self, lt: LeaveType) -> i64 {
        match lt {
            LeaveType::Earned => self.el,
            LeaveType::Sick => self.sl,
            LeaveType::Casual => self.cl,
        }
    }

    /// Deduct `days` from one counter, recomputing the total.
    /// Returns false (and leaves the record untouched) if the counter
    /// would go negative.
    pub fn deduct(&mut self, lt: LeaveType, days: i64) -> bool {
        let counter = match lt {
            LeaveType::Earned => &mut self.el,
            LeaveType::Sick => &mut self.sl,
            LeaveType::Casual => &mut self.cl,
        };
        if *counter < days {
            return false;
        }
        *counter -= days;
        self.recompute_total();
        true
    }

    /// Invariant: tl == el + sl + cl after every mutation.
    pub fn recompute_total(&mut self) {
        self.tl = self.el + self.sl + self.cl;
    }
}

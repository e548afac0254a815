//! Pure rule evaluation over a parsed leave request.
//!
//! Every check works on values handed in by the caller (dates, balance,
//! already-taken dates); nothing here touches storage, so the whole engine
//! is unit-testable with plain data.

use crate::config::Config;
use crate::models::{Balance, LeaveType};
use crate::policy::rules::LeaveRules;
use crate::utils::date::{display_date, is_weekend};
use chrono::NaiveDate;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    Weekend(NaiveDate),
    PublicHoliday(NaiveDate),
    SickLeaveFuture(NaiveDate),
    SickLeaveTooOld { date: NaiveDate, days_ago: i64 },
    OutsideWindow { leave_type: LeaveType, date: NaiveDate, days: i64, window: i64 },
    MinDuration { required: u32, got: usize },
    MaxDuration { allowed: u32, got: usize },
    InsufficientBalance { leave_type: LeaveType, available: i64, required: i64 },
    DateConflict(NaiveDate),
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Weekend(d) => write!(
                f,
                "❌ Cannot apply leave on weekends: {} ({})",
                display_date(*d),
                d.format("%A")
            ),
            Violation::PublicHoliday(d) => {
                write!(f, "❌ Public holidays not allowed: {}", display_date(*d))
            }
            Violation::SickLeaveFuture(d) => write!(
                f,
                "❌ SL Date Restriction: Sick Leave cannot be applied for future dates ({})",
                display_date(*d)
            ),
            Violation::SickLeaveTooOld { date, days_ago } => write!(
                f,
                "❌ SL Date Restriction: {} is {} days in the past (maximum 15 days before today)",
                display_date(*date),
                days_ago
            ),
            Violation::OutsideWindow { leave_type, date, days, window } => write!(
                f,
                "❌ Date Range Restriction: {} cannot be applied for {} ({} days {}; allowed within ±{} days of today)",
                leave_type.code(),
                display_date(*date),
                days.abs(),
                if *days > 0 { "ahead" } else { "ago" },
                window
            ),
            Violation::MinDuration { required, got } => write!(
                f,
                "❌ EL Minimum Duration Violation: Earned Leave requires at least {} consecutive days, your request: {} day{}",
                required,
                got,
                if *got == 1 { "" } else { "s" }
            ),
            Violation::MaxDuration { allowed, got } => write!(
                f,
                "❌ CL Maximum Duration Violation: Casual Leave allows maximum {} consecutive days, your request: {} days",
                allowed, got
            ),
            Violation::InsufficientBalance { leave_type, available, required } => write!(
                f,
                "❌ Insufficient {} balance. Available: {} days, Required: {} days",
                leave_type.code(),
                available,
                required
            ),
            Violation::DateConflict(d) => write!(
                f,
                "❌ Date conflict: You already have leave on {}",
                display_date(*d)
            ),
        }
    }
}

/// Evaluate every rule category and concatenate the results. An empty
/// return value means the request may be committed. The overlap scan
/// stops at the first conflicting date.
pub fn validate(
    leave_type: LeaveType,
    dates: &[NaiveDate],
    balance: &Balance,
    taken: &HashSet<NaiveDate>,
    reference: NaiveDate,
    rules: &LeaveRules,
    config: &Config,
) -> Vec<Violation> {
    let mut violations = Vec::new();
    let type_rules = rules.for_type(leave_type);

    // 1. Working-day membership.
    for &d in dates {
        if is_weekend(d) {
            violations.push(Violation::Weekend(d));
        }
        if config.is_public_holiday(d) {
            violations.push(Violation::PublicHoliday(d));
        }
    }

    // 2. SL window: past/today only, bounded in the past.
    if leave_type == LeaveType::Sick {
        let past_window = type_rules.past_window_days.unwrap_or(15);
        for &d in dates {
            if d > reference {
                violations.push(Violation::SickLeaveFuture(d));
            } else {
                let days_ago = (reference - d).num_days();
                if days_ago > past_window {
                    violations.push(Violation::SickLeaveTooOld { date: d, days_ago });
                }
            }
        }
    }

    // 3. EL/CL symmetric window around the reference date.
    if let Some(window) = type_rules.window_days {
        for &d in dates {
            let days = (d - reference).num_days();
            if days.abs() > window {
                violations.push(Violation::OutsideWindow {
                    leave_type,
                    date: d,
                    days,
                    window,
                });
            }
        }
    }

    // 4. EL minimum span.
    if let Some(min) = type_rules.min_days
        && dates.len() < min as usize
    {
        violations.push(Violation::MinDuration {
            required: min,
            got: dates.len(),
        });
    }

    // 5. CL maximum span.
    if let Some(max) = type_rules.max_consecutive
        && dates.len() > max as usize
    {
        violations.push(Violation::MaxDuration {
            allowed: max,
            got: dates.len(),
        });
    }

    // 6. Balance sufficiency.
    let required = dates.len() as i64;
    let available = balance.get(leave_type);
    if available < required {
        violations.push(Violation::InsufficientBalance {
            leave_type,
            available,
            required,
        });
    }

    // 7. Overlap with existing requests/history; first hit aborts the scan.
    for &d in dates {
        if taken.contains(&d) {
            violations.push(Violation::DateConflict(d));
            break;
        }
    }

    violations
}

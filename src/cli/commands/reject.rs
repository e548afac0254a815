use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::LeaveStatus;
use crate::ui::messages::{success, warning};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Reject {
        admin_id,
        user_id,
        date,
    } = cmd
    else {
        unreachable!()
    };

    let mut ledger = open_ledger(cfg)?;
    let leave_date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::InvalidDate(date.clone()))?;

    let owned = ledger
        .pending_for_admin(*admin_id)?
        .iter()
        .any(|r| r.user_id == *user_id && r.leave_date == leave_date);
    if !owned {
        warning(format!(
            "No pending request for user {} on {} under admin {}",
            user_id, date, admin_id
        ));
        return Ok(());
    }

    ledger.update_status(*user_id, leave_date, LeaveStatus::Rejected)?;
    success(format!("Rejected leave for user {} on {}", user_id, date));
    Ok(())
}

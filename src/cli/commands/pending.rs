use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Pending { admin_id } = cmd else {
        unreachable!()
    };

    let mut ledger = open_ledger(cfg)?;
    let pending = ledger.pending_for_admin(*admin_id)?;

    if pending.is_empty() {
        info(format!("No pending requests for admin {}", admin_id));
        return Ok(());
    }

    let mut table = Table::new(vec!["User", "Date", "Type", "Reason", "Applied", "Duration"]);
    for r in &pending {
        table.add_row(vec![
            r.user_id.to_string(),
            r.leave_date.format("%Y-%m-%d").to_string(),
            r.leave_type.code().to_string(),
            r.reason.clone(),
            r.applied_at_str(),
            r.duration.to_db_str().to_string(),
        ]);
    }
    print!("{}", table.render());
    Ok(())
}

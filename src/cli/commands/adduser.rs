use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::Balance;
use crate::ui::messages::success;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Adduser {
        user_id,
        admin_id,
        el,
        sl,
        cl,
    } = cmd
    else {
        unreachable!()
    };

    let mut ledger = open_ledger(cfg)?;
    let mut balance = Balance {
        user_id: *user_id,
        el: el.unwrap_or(cfg.rules.el.max_per_year as i64),
        sl: sl.unwrap_or(cfg.rules.sl.max_per_year as i64),
        cl: cl.unwrap_or(cfg.rules.cl.max_per_year as i64),
        tl: 0,
        admin_id: *admin_id,
        join_date: Some(date::today()),
    };
    balance.recompute_total();
    let total = balance.tl;
    ledger.put_balance(balance)?;

    success(format!(
        "User {} provisioned under admin {} ({} leave days)",
        user_id, admin_id, total
    ));
    Ok(())
}

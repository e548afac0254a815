use crate::chat::LeaveBot;
use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;

/// One-shot message, reply on stdout. Useful for scripting and tests;
/// multi-turn flows work through the persisted continuation path.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Send { user_id, message } = cmd else {
        unreachable!()
    };

    let ledger = open_ledger(cfg)?;
    let mut bot = LeaveBot::new(ledger, cfg.clone());
    let text = message.join(" ");
    let reply = bot.process_message(*user_id, &text);
    println!("{}", reply);
    Ok(())
}

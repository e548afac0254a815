use crate::chat::LeaveBot;
use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{bot_reply, info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::History { user_id, clear } = cmd else {
        unreachable!()
    };

    let ledger = open_ledger(cfg)?;
    let mut bot = LeaveBot::new(ledger, cfg.clone());

    if *clear {
        if bot.clear_chat_history(*user_id) {
            success(format!("Chat history cleared for user {}", user_id));
        } else {
            info("Nothing to clear");
        }
        return Ok(());
    }

    let pairs = bot.chat_history(*user_id)?;
    if pairs.is_empty() {
        info(format!("No chat history for user {}", user_id));
        return Ok(());
    }
    for (user_msg, assistant_msg) in pairs {
        println!("you> {}", user_msg);
        bot_reply(&assistant_msg);
        println!();
    }
    Ok(())
}

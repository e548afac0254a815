use crate::chat::LeaveBot;
use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{bot_reply, info};
use std::io::{self, BufRead, Write};

/// Interactive REPL over the chatbot. The per-user message serialization
/// the session machine relies on holds by construction here: one user,
/// one line at a time.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Chat { user_id } = cmd else {
        unreachable!()
    };

    let ledger = open_ledger(cfg)?;
    let mut bot = LeaveBot::new(ledger, cfg.clone());

    info(format!(
        "Chatting as user {}. Type 'exit' to leave.",
        user_id
    ));

    let stdin = io::stdin();
    loop {
        print!("you> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
            bot.end_session(*user_id);
            break;
        }
        let reply = bot.process_message(*user_id, line);
        bot_reply(&reply);
    }
    Ok(())
}

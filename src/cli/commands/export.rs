use crate::cli::commands::open_ledger;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export;
use std::path::PathBuf;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Export { format, output } = cmd else {
        unreachable!()
    };

    let mut ledger = open_ledger(cfg)?;
    let path = match output {
        Some(p) => PathBuf::from(p),
        None => PathBuf::from(format!("leavedesk_export.{}", format.as_str())),
    };
    export::export(&mut ledger, format, &path)
}

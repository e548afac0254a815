use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::{Ledger, RetryPolicy};
use crate::errors::AppResult;

pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.db.clone(), cli.test)?;

    // Opening creates the schema.
    let cfg = if let Some(db) = &cli.db {
        Config {
            database: db.clone(),
            ..Config::load()
        }
    } else {
        Config::load()
    };
    Ledger::open(&cfg.database, RetryPolicy::from_config(&cfg))?;
    Ok(())
}

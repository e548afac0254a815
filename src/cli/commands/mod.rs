pub mod adduser;
pub mod approve;
pub mod chat;
pub mod export;
pub mod history;
pub mod init;
pub mod pending;
pub mod reject;
pub mod send;

use crate::config::Config;
use crate::db::{Ledger, RetryPolicy};
use crate::errors::AppResult;

/// Open the ledger configured for this invocation.
pub(crate) fn open_ledger(cfg: &Config) -> AppResult<Ledger> {
    Ledger::open(&cfg.database, RetryPolicy::from_config(cfg))
}

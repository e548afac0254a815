//! Bounded retry for writes against a store held by another writer.
//!
//! SQLite reports a concurrent exclusive holder as BUSY/LOCKED; everything
//! else is a real fault and is returned immediately. Exhaustion surfaces
//! as a transient-storage error, distinct from any policy failure.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use rusqlite::ErrorCode;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Duration) -> Self {
        Self {
            max_attempts,
            backoff,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self {
            max_attempts: cfg.retry_max_attempts.max(1),
            backoff: Duration::from_millis(cfg.retry_backoff_ms),
        }
    }

    pub fn run<T, F>(&self, mut op: F) -> AppResult<T>
    where
        F: FnMut() -> AppResult<T>,
    {
        let mut attempt = 0;
        loop {
            attempt += 1;
            match op() {
                Err(e) if is_contention(&e) => {
                    if attempt >= self.max_attempts {
                        return Err(AppError::StorageContention(self.max_attempts));
                    }
                    std::thread::sleep(self.backoff);
                }
                other => return other,
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            backoff: Duration::from_millis(1000),
        }
    }
}

fn is_contention(e: &AppError) -> bool {
    match e {
        AppError::Db(rusqlite::Error::SqliteFailure(err, _)) => matches!(
            err.code,
            ErrorCode::DatabaseBusy | ErrorCode::DatabaseLocked
        ),
        _ => false,
    }
}

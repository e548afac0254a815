//! SQLite connection wrapper (lightweight for single-process usage).

use rusqlite::{Connection, Result};
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        // Fail fast on contention; the retry policy owns the waiting.
        conn.busy_timeout(std::time::Duration::from_millis(0))?;
        Ok(Self { conn })
    }
}

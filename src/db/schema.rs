use rusqlite::{Connection, Result};

/// Ensure the four ledger tables exist. Idempotent; called before every
/// ledger operation so a dropped or missing table is recreated empty
/// instead of failing the chat session.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS available (
            user_id    INTEGER NOT NULL UNIQUE,
            el         INTEGER NOT NULL DEFAULT 0,
            sl         INTEGER NOT NULL DEFAULT 0,
            cl         INTEGER NOT NULL DEFAULT 0,
            tl         INTEGER NOT NULL DEFAULT 0,
            admin_id   INTEGER NOT NULL,
            join_date  TEXT DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS hierarchy (
            admin_id   INTEGER NOT NULL,
            user_id    INTEGER NOT NULL,
            leave_date TEXT NOT NULL,
            status     TEXT NOT NULL CHECK(status IN ('Pending','Approved','Rejected')),
            leave_type TEXT NOT NULL CHECK(leave_type IN ('EL','SL','CL')),
            reason     TEXT NOT NULL DEFAULT '',
            applied_at TEXT NOT NULL,
            duration   TEXT NOT NULL DEFAULT 'Full Day'
        );

        CREATE TABLE IF NOT EXISTS used (
            user_id    INTEGER NOT NULL,
            leave_date TEXT NOT NULL,
            leave_type TEXT NOT NULL CHECK(leave_type IN ('EL','SL','CL')),
            duration   TEXT NOT NULL DEFAULT 'Full Day'
        );

        CREATE TABLE IF NOT EXISTS chat_history (
            user_id  INTEGER NOT NULL,
            role     TEXT NOT NULL CHECK(role IN ('user','assistant')),
            message  TEXT NOT NULL,
            ts       TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_hierarchy_user_date ON hierarchy(user_id, leave_date);
        CREATE INDEX IF NOT EXISTS idx_chat_user ON chat_history(user_id);
        "#,
    )?;
    Ok(())
}

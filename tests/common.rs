#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use leavedesk::config::Config;
use leavedesk::db::{Ledger, RetryPolicy};
use leavedesk::models::Balance;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn ldk() -> Command {
    cargo_bin_cmd!("leavedesk")
}

/// Create a unique test DB path inside the system temp dir and remove any
/// existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_leavedesk.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Config for library-level tests: no holidays, fast retry.
pub fn test_config(db_path: &str) -> Config {
    Config {
        database: db_path.to_string(),
        public_holidays: Vec::new(),
        retry_max_attempts: 3,
        retry_backoff_ms: 10,
        ..Config::default()
    }
}

pub fn open_test_ledger(db_path: &str) -> Ledger {
    Ledger::open(
        db_path,
        RetryPolicy::new(3, std::time::Duration::from_millis(10)),
    )
    .expect("open ledger")
}

pub fn provision(ledger: &mut Ledger, user_id: i64, admin_id: i64, el: i64, sl: i64, cl: i64) {
    ledger
        .put_balance(Balance {
            user_id,
            el,
            sl,
            cl,
            tl: 0,
            admin_id,
            join_date: None,
        })
        .expect("provision user");
}

/// The next Monday strictly after today: always a weekday, always within
/// the ±30-day application window.
pub fn next_monday() -> NaiveDate {
    let mut d = chrono::Local::now().date_naive() + Duration::days(1);
    while d.weekday() != Weekday::Mon {
        d += Duration::days(1);
    }
    d
}

/// A near-future weekday that is also not one of the default public
/// holidays, so CLI tests (which run under the default config) stay
/// deterministic year-round.
pub fn safe_future_weekday() -> NaiveDate {
    let holidays = Config::default().public_holidays;
    let mut d = next_monday();
    while holidays.contains(&d.format("%Y-%m-%d").to_string()) {
        d += Duration::days(7);
    }
    d
}

use crate::policy::rules::LeaveRules;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Persisted application settings. Everything has a default so a missing
/// or partial config file never blocks the chat session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_holidays")]
    pub public_holidays: Vec<String>,
    #[serde(default = "default_retry_attempts")]
    pub retry_max_attempts: u32,
    #[serde(default = "default_retry_backoff_ms")]
    pub retry_backoff_ms: u64,
    #[serde(default)]
    pub rules: LeaveRules,
}

fn default_retry_attempts() -> u32 {
    3
}

fn default_retry_backoff_ms() -> u64 {
    1000
}

fn default_holidays() -> Vec<String> {
    [
        "2026-01-01",
        "2026-01-26",
        "2026-03-04",
        "2026-04-03",
        "2026-05-01",
        "2026-08-15",
        "2026-10-02",
        "2026-10-20",
        "2026-11-10",
        "2026-12-25",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            public_holidays: default_holidays(),
            retry_max_attempts: default_retry_attempts(),
            retry_backoff_ms: default_retry_backoff_ms(),
            rules: LeaveRules::default(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("leavedesk")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("leavedesk.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("leavedesk.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A malformed file degrades to defaults instead of failing, so the
    /// chat session stays usable.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Config::default();
        }
        match fs::read_to_string(&path) {
            Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                crate::ui::messages::warning(format!(
                    "Malformed config file ({}), using defaults",
                    e
                ));
                Config::default()
            }),
            Err(_) => Config::default(),
        }
    }

    /// Initialize the configuration file and an empty database file.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let db_path = match custom_db {
            Some(name) => {
                let p = std::path::Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => Self::database_file(),
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            crate::ui::messages::success(format!("Config file: {:?}", Self::config_file()));
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }
        crate::ui::messages::success(format!("Database:    {:?}", db_path));

        Ok(())
    }

    pub fn is_public_holiday(&self, date: NaiveDate) -> bool {
        let s = date.format("%Y-%m-%d").to_string();
        self.public_holidays.iter().any(|h| h == &s)
    }
}

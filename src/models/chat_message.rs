use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Role::User),
            "assistant" => Some(Role::Assistant),
            _ => None,
        }
    }
}

/// One row of the `chat_history` table. Append-only, queried and cleared
/// strictly per user.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub user_id: i64,
    pub role: Role,
    pub message: String,
    pub ts: NaiveDateTime, // TEXT "YYYY-MM-DD HH:MM:SS"
}

impl ChatMessage {
    pub fn ts_str(&self) -> String {
        self.ts.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

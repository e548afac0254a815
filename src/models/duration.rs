use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Duration {
    FullDay,
    HalfDay,
}

impl Duration {
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Duration::FullDay => "Full Day",
            Duration::HalfDay => "Half Day",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "Full Day" => Some(Duration::FullDay),
            "Half Day" => Some(Duration::HalfDay),
            _ => None,
        }
    }
}

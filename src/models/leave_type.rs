use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LeaveType {
    Earned, // EL
    Sick,   // SL
    Casual, // CL
}

impl LeaveType {
    pub fn code(&self) -> &'static str {
        match self {
            LeaveType::Earned => "EL",
            LeaveType::Sick => "SL",
            LeaveType::Casual => "CL",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Earned => "Earned Leave",
            LeaveType::Sick => "Sick Leave",
            LeaveType::Casual => "Casual Leave",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.code()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "EL" => Some(LeaveType::Earned),
            "SL" => Some(LeaveType::Sick),
            "CL" => Some(LeaveType::Casual),
            _ => None,
        }
    }

    /// Helper: convert a user-typed code, any case.
    pub fn from_code(code: &str) -> Option<Self> {
        LeaveType::from_db_str(&code.to_uppercase())
    }
}

//! Per-type policy parameters.
//!
//! The numbers normally come from an HR policy document; here they are a
//! read-only configuration mapping with documented defaults, overridable
//! from the config file.

use crate::models::LeaveType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeRules {
    pub max_per_year: u32,
    pub advance_notice_days: u32,
    /// Minimum dates per application (EL only).
    #[serde(default)]
    pub min_days: Option<u32>,
    /// Maximum dates per application (CL only).
    #[serde(default)]
    pub max_consecutive: Option<u32>,
    /// Symmetric ±N-day application window around today (EL/CL).
    #[serde(default)]
    pub window_days: Option<i64>,
    /// Past-only window: today back to N days ago (SL).
    #[serde(default)]
    pub past_window_days: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HrContact {
    pub email: String,
    pub phone: String,
    pub hours: String,
}

impl Default for HrContact {
    fn default() -> Self {
        Self {
            email: "hr@company.com".to_string(),
            phone: "+1-555-0123".to_string(),
            hours: "Monday-Friday, 9 AM - 6 PM".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRules {
    pub el: TypeRules,
    pub sl: TypeRules,
    pub cl: TypeRules,
    #[serde(default)]
    pub contact: HrContact,
}

impl Default for LeaveRules {
    fn default() -> Self {
        Self {
            el: TypeRules {
                max_per_year: 12,
                advance_notice_days: 2,
                min_days: Some(3),
                max_consecutive: None,
                window_days: Some(30),
                past_window_days: None,
            },
            sl: TypeRules {
                max_per_year: 7,
                advance_notice_days: 0,
                min_days: None,
                max_consecutive: None,
                window_days: None,
                past_window_days: Some(15),
            },
            cl: TypeRules {
                max_per_year: 5,
                advance_notice_days: 1,
                min_days: None,
                max_consecutive: Some(2),
                window_days: Some(30),
                past_window_days: None,
            },
            contact: HrContact::default(),
        }
    }
}

impl LeaveRules {
    pub fn for_type(&self, lt: LeaveType) -> &TypeRules {
        match lt {
            LeaveType::Earned => &self.el,
            LeaveType::Sick => &self.sl,
            LeaveType::Casual => &self.cl,
        }
    }
}

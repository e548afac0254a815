pub mod rules;
pub mod validator;

pub use rules::{HrContact, LeaveRules, TypeRules};
pub use validator::{Violation, validate};

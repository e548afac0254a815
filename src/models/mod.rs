pub mod balance;
pub mod chat_message;
pub mod duration;
pub mod leave_type;
pub mod request;
pub mod status;
pub mod used;

pub use balance::Balance;
pub use chat_message::{ChatMessage, Role};
pub use duration::Duration;
pub use leave_type::LeaveType;
pub use request::LeaveRequest;
pub use status::LeaveStatus;
pub use used::UsedLeave;

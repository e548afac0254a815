pub mod ledger;
pub mod pool;
pub mod retry;
pub mod schema;
pub mod snapshot;

pub use ledger::Ledger;
pub use retry::RetryPolicy;

pub mod dates;
pub mod intent;

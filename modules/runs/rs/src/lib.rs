pub use predicate::Predicate;
pub use runs::{runs, DEFAULT_MIN_LENGTH};
pub use stamp::set_intervals_to_value;
pub use threshold::{runs_gte, runs_gte_u8, ByThreshold, DEFAULT_U8_MIN_LENGTH};

mod predicate;
mod runs;
mod stamp;
mod threshold;

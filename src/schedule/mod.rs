//! Schedule request grammar. Validation only: next-run computation belongs to
//! the host scheduler.

mod expression;
mod types;

pub use expression::validate_schedule;
pub use types::{ContextMode, ScheduleType};

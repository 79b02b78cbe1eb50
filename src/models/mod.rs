mod activity;
mod day_entry;

pub use activity::ActivitySession;
pub use day_entry::DayEntry;

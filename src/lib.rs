//! Step tracking core.
//!
//! Converts a hardware step-counter feed (a cumulative, monotonically
//! increasing reading that resets on reboot) into per-day step totals and
//! user-toggleable activity sessions, with the per-day history persisted in
//! SQLite.
//!
//! The host application wires three pieces together:
//! - [`Database`]: the per-day step history ([`Database::add_entry`],
//!   [`Database::get_entries`] and friends),
//! - [`StepTracker`]: raw sensor readings go into
//!   [`StepTracker::handle_event`]; day rollover and session fan-out happen
//!   inside,
//! - a [`Clock`]: [`SystemClock`] in production, [`ManualClock`] in tests.

pub mod clock;
pub mod db;
pub mod models;
pub mod tracker;
pub mod utils;

pub use clock::{Clock, ManualClock, SystemClock};
pub use db::{Database, StoreError};
pub use models::{ActivitySession, DayEntry};
pub use tracker::{ActivityTracker, StepCounter, StepTracker};

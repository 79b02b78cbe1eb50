//! The step pipeline: every raw sensor reading flows through the counter,
//! and the per-event delta fans out to all currently active sessions.

mod activities;
mod counter;

pub use activities::ActivityTracker;
pub use counter::StepCounter;

use std::sync::Arc;

use chrono::NaiveDate;

use crate::clock::Clock;
use crate::db::{Database, StoreError};
use crate::models::ActivitySession;

/// Front door for sensor events.
///
/// Takes `&mut self` on purpose: events must be processed one at a time,
/// and exclusive ownership enforces that. A host receiving sensor callbacks
/// on multiple threads wraps the tracker in a mutex.
pub struct StepTracker {
    counter: StepCounter,
    activities: ActivityTracker,
}

impl StepTracker {
    pub fn new(db: Database, clock: Arc<dyn Clock>) -> Self {
        Self {
            counter: StepCounter::new(db, clock),
            activities: ActivityTracker::new(),
        }
    }

    /// Process one raw sensor reading and return the step delta it carried.
    ///
    /// The counter handles calibration, reboot resets and day rollover; the
    /// delta is then delivered to every active session. A rollover write
    /// that fails leaves all state untouched, so feeding the next reading
    /// retries it.
    pub async fn handle_event(&mut self, raw: u64) -> Result<u32, StoreError> {
        let delta = self.counter.handle_event(raw).await?;
        self.activities.add_delta(u64::from(delta));
        Ok(delta)
    }

    /// Create the session for `id` (starting active), or flip it between
    /// active and paused.
    pub fn toggle_activity(&mut self, id: u32) {
        self.activities.toggle(id);
    }

    pub fn activity(&self, id: u32) -> Option<&ActivitySession> {
        self.activities.get(id)
    }

    pub fn activities(&self) -> impl Iterator<Item = &ActivitySession> {
        self.activities.sessions()
    }

    /// Steps accumulated since the last day rollover (or since calibration).
    pub fn todays_steps(&self) -> u32 {
        self.counter.todays_steps()
    }

    /// The calendar day currently being accumulated.
    pub fn current_day(&self) -> NaiveDate {
        self.counter.current_day()
    }
}

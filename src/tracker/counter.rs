use std::sync::Arc;

use chrono::NaiveDate;
use log::{info, warn};

use crate::clock::Clock;
use crate::db::{Database, StoreError};
use crate::utils::date::day_of;

/// Converts raw cumulative sensor readings into per-event step deltas and
/// commits the daily total to the store when the calendar day changes.
///
/// The raw reading counts steps since an arbitrary epoch (boot or sensor
/// reset), so only differences between consecutive readings carry meaning.
pub struct StepCounter {
    db: Database,
    clock: Arc<dyn Clock>,
    last_raw: Option<u64>,
    current_day: NaiveDate,
    todays_steps: u32,
}

impl StepCounter {
    pub fn new(db: Database, clock: Arc<dyn Clock>) -> Self {
        let current_day = day_of(clock.now());
        Self {
            db,
            clock,
            last_raw: None,
            current_day,
            todays_steps: 0,
        }
    }

    pub fn todays_steps(&self) -> u32 {
        self.todays_steps
    }

    pub fn current_day(&self) -> NaiveDate {
        self.current_day
    }

    /// Handle one raw sensor reading, returning the step delta it carried.
    ///
    /// The first reading only calibrates the baseline and always yields a
    /// delta of 0. A reading below the baseline means the sensor restarted
    /// counting from zero, so the reading itself is the delta.
    ///
    /// When the wall-clock day differs from the day being accumulated, the
    /// finished day is committed before any state for this event is
    /// applied. On a storage fault the counter is left exactly as it was,
    /// so the next reading retries both the commit and this event's steps.
    pub async fn handle_event(&mut self, raw: u64) -> Result<u32, StoreError> {
        let today = day_of(self.clock.now());

        let Some(last_raw) = self.last_raw else {
            self.last_raw = Some(raw);
            self.current_day = today;
            self.todays_steps = 0;
            return Ok(0);
        };

        let wide_delta = if raw >= last_raw {
            raw - last_raw
        } else {
            // Sensor rebooted and restarted from zero. Not an error.
            warn!(
                "sensor reading {raw} below baseline {last_raw}, assuming reset"
            );
            raw
        };
        let delta = u32::try_from(wide_delta).unwrap_or(u32::MAX);

        if today != self.current_day {
            // Only the day active at the previous reading gets an entry;
            // days fully slept through produce none.
            self.db
                .add_entry(self.current_day, i64::from(self.todays_steps))
                .await?;
            info!(
                "day {} closed with {} steps, now accumulating {}",
                self.current_day, self.todays_steps, today
            );
            self.todays_steps = 0;
            self.current_day = today;
        }

        self.last_raw = Some(raw);
        self.todays_steps = self.todays_steps.saturating_add(delta);
        Ok(delta)
    }
}

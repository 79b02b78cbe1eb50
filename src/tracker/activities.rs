use std::collections::BTreeMap;

use crate::models::ActivitySession;

/// Distributes step deltas across user-toggleable sessions.
///
/// Sessions know nothing about calendar days; a session keeps its total
/// across midnight and while paused. Ids come from the caller.
#[derive(Debug, Default)]
pub struct ActivityTracker {
    sessions: BTreeMap<u32, ActivitySession>,
}

impl ActivityTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the session if it does not exist (starting active), else flip
    /// it between active and paused.
    pub fn toggle(&mut self, id: u32) {
        self.sessions
            .entry(id)
            .and_modify(|session| session.active = !session.active)
            .or_insert_with(|| ActivitySession::new(id));
    }

    /// Deliver one delta to every active session.
    pub fn add_delta(&mut self, delta: u64) {
        if delta == 0 {
            return;
        }

        for session in self.sessions.values_mut().filter(|s| s.active) {
            session.steps = session.steps.saturating_add(delta);
        }
    }

    pub fn get(&self, id: u32) -> Option<&ActivitySession> {
        self.sessions.get(&id)
    }

    pub fn sessions(&self) -> impl Iterator<Item = &ActivitySession> {
        self.sessions.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_creates_then_flips() {
        let mut tracker = ActivityTracker::new();

        tracker.toggle(3);
        assert!(tracker.get(3).unwrap().active);

        tracker.toggle(3);
        assert!(!tracker.get(3).unwrap().active);

        tracker.toggle(3);
        assert!(tracker.get(3).unwrap().active);
    }

    #[test]
    fn only_active_sessions_accumulate() {
        let mut tracker = ActivityTracker::new();
        tracker.toggle(0);
        tracker.toggle(1);
        tracker.toggle(1); // paused again

        tracker.add_delta(100);
        assert_eq!(tracker.get(0).unwrap().steps, 100);
        assert_eq!(tracker.get(1).unwrap().steps, 0);

        tracker.toggle(1);
        tracker.add_delta(50);
        assert_eq!(tracker.get(0).unwrap().steps, 150);
        assert_eq!(tracker.get(1).unwrap().steps, 50);
    }

    #[test]
    fn paused_session_keeps_its_total() {
        let mut tracker = ActivityTracker::new();
        tracker.toggle(9);
        tracker.add_delta(240);

        tracker.toggle(9);
        tracker.add_delta(9999);
        assert_eq!(tracker.get(9).unwrap().steps, 240);
    }

    #[test]
    fn sessions_iterate_in_id_order() {
        let mut tracker = ActivityTracker::new();
        tracker.toggle(5);
        tracker.toggle(1);
        tracker.toggle(3);

        let ids: Vec<u32> = tracker.sessions().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 3, 5]);
    }
}

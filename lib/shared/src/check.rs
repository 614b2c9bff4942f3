use std::collections::HashMap;

pub const CHECK_REQUESTED: &str = "Check requested";
pub const CHECK_FAILED: &str = "Failed to trigger check";

/// Tracks check-trigger calls still in flight, per monitor.
///
/// A monitor's control is disabled while it has any call outstanding and
/// re-enabled once every call has settled, whatever order they settle in.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CheckTracker {
    in_flight: HashMap<String, usize>,
}

impl CheckTracker {
    pub fn begin(&mut self, monitor_id: &str) {
        *self.in_flight.entry(monitor_id.to_string()).or_default() += 1;
    }

    pub fn settle(&mut self, monitor_id: &str) {
        if let Some(count) = self.in_flight.get_mut(monitor_id) {
            *count = count.saturating_sub(1);
            if *count == 0 {
                self.in_flight.remove(monitor_id);
            }
        }
    }

    pub fn is_checking(&self, monitor_id: &str) -> bool {
        self.in_flight.contains_key(monitor_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_check_disables_then_enables() {
        let mut tracker = CheckTracker::default();

        tracker.begin("a");
        assert!(tracker.is_checking("a"));
        assert!(!tracker.is_checking("b"));

        tracker.settle("a");
        assert!(!tracker.is_checking("a"));
    }

    #[test]
    fn repeated_clicks_end_enabled() {
        let mut tracker = CheckTracker::default();
        for _ in 0..3 {
            tracker.begin("a");
        }
        assert!(tracker.is_checking("a"));

        tracker.settle("a");
        tracker.settle("a");
        assert!(tracker.is_checking("a"));

        tracker.settle("a");
        assert!(!tracker.is_checking("a"));
        assert_eq!(tracker, CheckTracker::default());
    }

    #[test]
    fn stray_settle_is_harmless() {
        let mut tracker = CheckTracker::default();
        tracker.settle("ghost");

        tracker.begin("a");
        tracker.settle("a");
        tracker.settle("a");

        assert!(!tracker.is_checking("a"));
        tracker.begin("a");
        assert!(tracker.is_checking("a"));
    }

    #[test]
    fn monitors_are_independent() {
        let mut tracker = CheckTracker::default();
        tracker.begin("a");
        tracker.begin("b");

        tracker.settle("b");

        assert!(tracker.is_checking("a"));
        assert!(!tracker.is_checking("b"));
    }
}

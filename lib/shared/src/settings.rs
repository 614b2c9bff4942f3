use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Timing knobs the dashboard runs with. Served by the server so they can be
/// tuned through the environment without rebuilding the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSettings {
    pub refresh_interval_secs: u64,
    /// Delay before reloading after a monitor was created.
    pub create_refresh_delay_ms: u64,
    /// Delay before reloading after a check was triggered.
    pub check_refresh_delay_ms: u64,
    pub notification_ms: u64,
    /// Interval requested for newly created monitors.
    pub default_check_interval: u32,
}

pub const NOTIFICATION_FADE: Duration = Duration::from_millis(300);

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            refresh_interval_secs: 60,
            create_refresh_delay_ms: 500,
            check_refresh_delay_ms: 1_000,
            notification_ms: 3_000,
            default_check_interval: 60,
        }
    }
}

impl DashboardSettings {
    pub fn refresh_interval(&self) -> Duration {
        // a zero interval would spin the refresh loop
        Duration::from_secs(self.refresh_interval_secs.max(1))
    }

    pub fn create_refresh_delay(&self) -> Duration {
        Duration::from_millis(self.create_refresh_delay_ms)
    }

    pub fn check_refresh_delay(&self) -> Duration {
        Duration::from_millis(self.check_refresh_delay_ms)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_timings() {
        let settings = DashboardSettings::default();

        assert_eq!(settings.refresh_interval(), Duration::from_secs(60));
        assert_eq!(settings.create_refresh_delay(), Duration::from_millis(500));
        assert_eq!(settings.check_refresh_delay(), Duration::from_secs(1));
        assert_eq!(settings.notification_duration(), Duration::from_secs(3));
        assert_eq!(settings.default_check_interval, 60);
    }

    #[test]
    fn zero_refresh_interval_is_clamped() {
        let settings = DashboardSettings {
            refresh_interval_secs: 0,
            ..Default::default()
        };

        assert_eq!(settings.refresh_interval(), Duration::from_secs(1));
    }
}

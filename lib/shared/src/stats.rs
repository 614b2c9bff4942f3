use crate::monitor::Monitor;
use crate::status::MonitorStatus;

/// Client-side summary of the current monitor list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonitorStats {
    pub total: usize,
    pub up: usize,
    pub down: usize,
    /// Mean latency of results that measured one, in whole milliseconds.
    pub avg_response_ms: u64,
}

impl MonitorStats {
    pub fn collect(monitors: &[Monitor]) -> Self {
        let mut stats = MonitorStats {
            total: monitors.len(),
            ..Default::default()
        };

        let mut timed = 0u64;
        let mut total_nanos = 0u128;

        for monitor in monitors {
            match monitor.status() {
                MonitorStatus::Up => stats.up += 1,
                MonitorStatus::Down => stats.down += 1,
                MonitorStatus::Unknown => {}
            }

            if let Some(nanos) = monitor
                .last_result
                .as_ref()
                .and_then(|r| r.response_time)
                .filter(|n| *n > 0)
            {
                timed += 1;
                total_nanos += u128::from(nanos);
            }
        }

        if timed > 0 {
            let avg_ms = total_nanos as f64 / timed as f64 / 1_000_000.0;
            stats.avg_response_ms = avg_ms.round() as u64;
        }

        stats
    }

    pub fn uptime_percent(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.up as f64 / self.total as f64 * 100.0
    }

    /// Uptime with one decimal, e.g. `"66.7"`.
    pub fn uptime_label(&self) -> String {
        format!("{:.1}", self.uptime_percent())
    }

    pub fn down_summary(&self) -> String {
        if self.down > 0 {
            format!("{} down", self.down)
        } else {
            "All systems operational".to_string()
        }
    }
}

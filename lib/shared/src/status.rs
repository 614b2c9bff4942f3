use serde::{Deserialize, Serialize};

use crate::monitor::MonitorResult;

/// Display classification of a monitor, derived from its last result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonitorStatus {
    Unknown,
    Up,
    Down,
}

impl MonitorStatus {
    pub fn derive(result: Option<&MonitorResult>) -> Self {
        match result {
            None => MonitorStatus::Unknown,
            Some(r) if r.is_up => MonitorStatus::Up,
            Some(_) => MonitorStatus::Down,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MonitorStatus::Unknown => "unknown",
            MonitorStatus::Up => "up",
            MonitorStatus::Down => "down",
        }
    }
}

impl std::fmt::Display for MonitorStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn result(is_up: bool, status_code: u16, error: Option<&str>) -> MonitorResult {
        MonitorResult {
            id: None,
            monitor_id: None,
            timestamp: Utc::now(),
            is_up,
            status_code,
            response_time: None,
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn no_result_is_unknown() {
        assert_eq!(MonitorStatus::derive(None), MonitorStatus::Unknown);
    }

    #[test]
    fn up_only_depends_on_is_up() {
        for (code, error) in [(200, None), (0, Some("weird")), (503, None)] {
            assert_eq!(
                MonitorStatus::derive(Some(&result(true, code, error))),
                MonitorStatus::Up
            );
        }
    }

    #[test]
    fn down_with_or_without_error() {
        // non-2xx with no transport error is still down
        assert_eq!(
            MonitorStatus::derive(Some(&result(false, 500, None))),
            MonitorStatus::Down
        );
        assert_eq!(
            MonitorStatus::derive(Some(&result(false, 0, Some("connection refused")))),
            MonitorStatus::Down
        );
    }

    #[test]
    fn display_names() {
        assert_eq!(MonitorStatus::Unknown.to_string(), "unknown");
        assert_eq!(MonitorStatus::Up.to_string(), "up");
        assert_eq!(MonitorStatus::Down.to_string(), "down");
    }
}

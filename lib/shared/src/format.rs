//! Human-readable renderings of raw result fields.

use chrono::{DateTime, Utc};

const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// Renders a probe latency given in nanoseconds.
///
/// Below one second the value is rounded half up to whole milliseconds,
/// otherwise it is shown in seconds with two decimals.
pub fn format_response_time(nanos: Option<u64>) -> String {
    let nanos = match nanos {
        None | Some(0) => return "N/A".to_string(),
        Some(n) => n,
    };

    let ms = nanos as f64 / NANOS_PER_MILLI;
    if ms < 1000.0 {
        // f64::round rounds half away from zero, which is half up for positives
        format!("{}ms", ms.round() as u64)
    } else {
        format!("{:.2}s", ms / 1000.0)
    }
}

/// Renders how long ago a probe ran, relative to `now`.
///
/// Uses a single unit (minutes, hours or days). Timestamps in the future are
/// treated as "Just now".
pub fn format_last_checked(timestamp: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(timestamp) = timestamp else {
        return "Never".to_string();
    };

    let minutes = (now - timestamp).num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }

    format!("{}d ago", hours / 24)
}

/// Strips the scheme and a single trailing slash for card titles.
pub fn format_url(url: &str) -> &str {
    let without_scheme = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"))
        .unwrap_or(url);
    without_scheme.strip_suffix('/').unwrap_or(without_scheme)
}

pub fn format_check_interval(seconds: u32) -> String {
    format!("{seconds}s")
}

/// Status code cell; `0` means no response was received.
pub fn format_status_code(code: u16) -> String {
    if code == 0 {
        "—".to_string()
    } else {
        code.to_string()
    }
}

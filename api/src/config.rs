//! Centralized configuration management.
//!
//! All environment variables are read once at startup through this module.

#[cfg(feature = "server")]
use std::{str::FromStr, time::Duration};

#[cfg(feature = "server")]
use dioxus::logger::tracing::warn;
#[cfg(feature = "server")]
use shared::DashboardSettings;

#[cfg(feature = "server")]
const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
#[cfg(feature = "server")]
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Application configuration loaded from environment variables.
#[cfg(feature = "server")]
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Uptime backend base URL (default: "http://localhost:8080")
    pub backend_url: String,
    /// Per-request timeout towards the backend, in seconds (default: 10)
    pub request_timeout_secs: u64,
    /// Timing handed to the browser dashboard
    pub dashboard: DashboardSettings,
}

#[cfg(feature = "server")]
impl AppConfig {
    pub fn from_env() -> Self {
        let defaults = DashboardSettings::default();

        Self {
            backend_url: std::env::var("UPTIME_API_URL")
                .ok()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()),
            request_timeout_secs: parse_var(
                "UPTIME_REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            ),
            dashboard: DashboardSettings {
                refresh_interval_secs: parse_var(
                    "REFRESH_INTERVAL_SECS",
                    defaults.refresh_interval_secs,
                ),
                default_check_interval: parse_var(
                    "DEFAULT_CHECK_INTERVAL_SECS",
                    defaults.default_check_interval,
                ),
                ..defaults
            },
        }
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn dashboard(&self) -> DashboardSettings {
        self.dashboard
    }
}

/// Reads a positive number from `key`, falling back to `default` when unset or invalid.
#[cfg(feature = "server")]
fn parse_var<T>(key: &str, default: T) -> T
where
    T: FromStr + PartialOrd + Default + std::fmt::Display + Copy,
{
    let Ok(raw) = std::env::var(key) else {
        return default;
    };
    match raw.trim().parse::<T>() {
        Ok(value) if value > T::default() => value,
        _ => {
            warn!("Invalid value {:?} for {}, using {}", raw, key, default);
            default
        }
    }
}

#[cfg(feature = "server")]
use std::sync::LazyLock;

/// Global application configuration singleton.
/// Loaded once at startup from environment variables.
#[cfg(feature = "server")]
pub static CONFIG: LazyLock<AppConfig> = LazyLock::new(AppConfig::from_env);

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    #[test]
    fn parse_var_falls_back_on_garbage() {
        std::env::set_var("UPTIME_TEST_GARBAGE", "soon");
        assert_eq!(parse_var("UPTIME_TEST_GARBAGE", 60u64), 60);
    }

    #[test]
    fn parse_var_rejects_zero() {
        std::env::set_var("UPTIME_TEST_ZERO", "0");
        assert_eq!(parse_var("UPTIME_TEST_ZERO", 60u32), 60);
    }

    #[test]
    fn parse_var_reads_value() {
        std::env::set_var("UPTIME_TEST_VALUE", " 15 ");
        assert_eq!(parse_var("UPTIME_TEST_VALUE", 60u64), 15);
    }

    #[test]
    fn parse_var_unset_is_default() {
        assert_eq!(parse_var("UPTIME_TEST_NEVER_SET", 7u32), 7);
    }
}

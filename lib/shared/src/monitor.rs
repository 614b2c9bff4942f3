use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::status::MonitorStatus;

/// A watched endpoint, as returned by the uptime backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Monitor {
    pub id: String,
    pub url: String,
    pub check_interval: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub last_result: Option<MonitorResult>,
}

impl Monitor {
    pub fn status(&self) -> MonitorStatus {
        MonitorStatus::derive(self.last_result.as_ref())
    }
}

/// Outcome of a single probe recorded by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonitorResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monitor_id: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub is_up: bool,
    /// `0` when no response was received.
    #[serde(default)]
    pub status_code: u16,
    /// Nanoseconds.
    #[serde(default)]
    pub response_time: Option<u64>,
    #[serde(
        default,
        deserialize_with = "deserialize_probe_error",
        skip_serializing_if = "Option::is_none"
    )]
    pub error: Option<String>,
}

impl MonitorResult {
    /// The status code, if the probe got far enough to receive one.
    pub fn received_status(&self) -> Option<u16> {
        (self.status_code != 0).then_some(self.status_code)
    }
}

// The backend writes "" rather than omitting the field.
fn deserialize_probe_error<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.filter(|e| !e.is_empty()))
}

/// Body of `POST /monitor`.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateMonitor {
    pub url: String,
    pub check_interval: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl fmt::Debug for CreateMonitor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateMonitor")
            .field("url", &self.url)
            .field("check_interval", &self.check_interval)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// What the dashboard gets back when it asks for a monitor to be created.
///
/// A rejection is data rather than an error so the form can show the backend's
/// own message and keep the password prompt open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CreateMonitorOutcome {
    Created(Monitor),
    Rejected { message: Option<String> },
}

/// Error body the backend sends with non-2xx responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

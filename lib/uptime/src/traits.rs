use async_trait::async_trait;
use shared::{CreateMonitor, Monitor};

use crate::error::Result;

/// The operations the dashboard needs from an uptime backend.
#[async_trait]
pub trait MonitorBackend: Send + Sync {
    fn name(&self) -> &'static str;

    async fn list_monitors(&self) -> Result<Vec<Monitor>>;
    async fn create_monitor(&self, request: &CreateMonitor) -> Result<Monitor>;
    /// Asks the backend to probe the monitor now. The probe itself may finish
    /// after this returns.
    async fn trigger_check(&self, monitor_id: &str) -> Result<()>;
}

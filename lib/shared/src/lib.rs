pub mod add_monitor;
pub mod check;
pub mod diagnostics;
pub mod format;
pub mod monitor;
pub mod notification;
pub mod refresh;
pub mod settings;
pub mod stats;
pub mod status;

pub use monitor::{CreateMonitor, CreateMonitorOutcome, Monitor, MonitorResult};
pub use settings::DashboardSettings;
pub use status::MonitorStatus;

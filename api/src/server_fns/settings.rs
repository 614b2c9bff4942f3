use dioxus::prelude::*;
use shared::DashboardSettings;

#[cfg(feature = "server")]
use crate::config::CONFIG;

#[get("/api/settings")]
pub async fn get_dashboard_settings() -> Result<DashboardSettings, ServerFnError> {
    Ok(CONFIG.dashboard())
}

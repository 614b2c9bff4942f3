#[cfg(feature = "server")]
use std::sync::{Arc, LazyLock};

#[cfg(feature = "server")]
use dioxus::logger::tracing::info;
#[cfg(feature = "server")]
use uptime::{MonitorBackend, UptimeClientBuilder};

#[cfg(feature = "server")]
use crate::config::CONFIG;

#[cfg(feature = "server")]
pub static BACKEND: LazyLock<Arc<dyn MonitorBackend>> = LazyLock::new(|| {
    let client = UptimeClientBuilder::new()
        .base_url(CONFIG.backend_url())
        .timeout(CONFIG.request_timeout())
        .build()
        .expect("Failed to create uptime backend client");

    info!("Using uptime backend at {}", client.base_url());
    Arc::new(client)
});

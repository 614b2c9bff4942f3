use dioxus::prelude::*;

pub mod monitor;
pub mod settings;

pub use monitor::*;
pub use settings::*;

/// Forwards the backend's status code, or 502 when it could not be reached.
#[cfg(feature = "server")]
pub fn backend_error(e: uptime::UptimeError) -> ServerFnError {
    let code = match &e {
        uptime::UptimeError::Api { status, .. } => *status,
        uptime::UptimeError::NotConfigured => 500,
        _ => 502,
    };
    ServerFnError::ServerError {
        message: e.to_string(),
        code,
        details: None,
    }
}

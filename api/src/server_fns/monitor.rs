use dioxus::logger::tracing::{info, warn};
use dioxus::prelude::*;
use shared::{CreateMonitor, CreateMonitorOutcome, Monitor};

#[cfg(feature = "server")]
use uptime::UptimeError;

#[cfg(feature = "server")]
use super::backend_error;

#[cfg(feature = "server")]
use crate::globals::BACKEND;

#[get("/api/monitors")]
pub async fn list_monitors() -> Result<Vec<Monitor>, ServerFnError> {
    BACKEND.list_monitors().await.map_err(|e| {
        warn!("Listing monitors from {} failed: {}", BACKEND.name(), e);
        backend_error(e)
    })
}

/// Rejections from the backend come back as data so the form can show them.
#[post("/api/monitors")]
pub async fn create_monitor(
    request: CreateMonitor,
) -> Result<CreateMonitorOutcome, ServerFnError> {
    creation_outcome(&request.url, BACKEND.create_monitor(&request).await)
}

/// A backend rejection becomes `Rejected` carrying its message; anything else
/// that failed is a server error.
#[cfg(feature = "server")]
fn creation_outcome(
    url: &str,
    result: uptime::Result<Monitor>,
) -> Result<CreateMonitorOutcome, ServerFnError> {
    match result {
        Ok(monitor) => {
            info!("Created monitor {} for {}", monitor.id, monitor.url);
            Ok(CreateMonitorOutcome::Created(monitor))
        }
        Err(UptimeError::Api { status, message }) => {
            warn!("Backend rejected monitor for {} ({})", url, status);
            Ok(CreateMonitorOutcome::Rejected { message })
        }
        Err(e) => {
            warn!("Creating monitor for {} failed: {}", url, e);
            Err(backend_error(e))
        }
    }
}

#[post("/api/monitors/:id/check")]
pub async fn check_monitor(id: String) -> Result<(), ServerFnError> {
    BACKEND.trigger_check(&id).await.map_err(|e| {
        warn!("Triggering check for {} failed: {}", id, e);
        backend_error(e)
    })
}

#[cfg(all(test, feature = "server"))]
mod tests {
    use super::*;

    fn monitor() -> Monitor {
        serde_json::from_value(serde_json::json!({
            "id": "m1",
            "url": "https://example.com",
            "check_interval": 60,
            "created_at": "2024-03-01T10:00:00Z",
            "updated_at": "2024-03-01T10:00:00Z",
        }))
        .unwrap()
    }

    fn decode_error() -> UptimeError {
        UptimeError::Decode(serde_json::from_str::<Monitor>("not json").unwrap_err())
    }

    fn code_of(err: ServerFnError) -> u16 {
        match err {
            ServerFnError::ServerError { code, .. } => code,
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn created_monitor_is_passed_through() {
        let outcome = creation_outcome("https://example.com", Ok(monitor())).unwrap();

        assert_eq!(outcome, CreateMonitorOutcome::Created(monitor()));
    }

    #[test]
    fn backend_rejection_keeps_its_message() {
        let result = Err(UptimeError::Api {
            status: 401,
            message: Some("Invalid password".into()),
        });

        let outcome = creation_outcome("https://example.com", result).unwrap();

        assert_eq!(
            outcome,
            CreateMonitorOutcome::Rejected {
                message: Some("Invalid password".into())
            }
        );
    }

    #[test]
    fn rejection_without_body_message() {
        let result = Err(UptimeError::Api {
            status: 400,
            message: None,
        });

        let outcome = creation_outcome("nope", result).unwrap();

        assert_eq!(outcome, CreateMonitorOutcome::Rejected { message: None });
    }

    #[test]
    fn unusable_response_is_bad_gateway() {
        let err = creation_outcome("https://example.com", Err(decode_error())).unwrap_err();

        assert_eq!(code_of(err), 502);
    }

    #[test]
    fn missing_configuration_is_internal_error() {
        let err =
            creation_outcome("https://example.com", Err(UptimeError::NotConfigured)).unwrap_err();

        assert_eq!(code_of(err), 500);
    }

    #[test]
    fn backend_error_forwards_status() {
        let err = backend_error(UptimeError::Api {
            status: 404,
            message: Some("Monitor not found".into()),
        });

        assert_eq!(code_of(err), 404);
    }

    #[test]
    fn backend_error_maps_codes() {
        assert_eq!(code_of(backend_error(decode_error())), 502);
        assert_eq!(code_of(backend_error(UptimeError::NotConfigured)), 500);
    }
}

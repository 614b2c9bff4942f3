use thiserror::Error;

pub type Result<T> = std::result::Result<T, UptimeError>;

#[derive(Debug, Error)]
pub enum UptimeError {
    #[error("uptime backend URL is not configured")]
    NotConfigured,

    #[error("invalid backend URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("backend unreachable: {0}")]
    Request(#[from] reqwest::Error),

    #[error("backend returned HTTP {status}{}", detail(.message))]
    Api {
        status: u16,
        /// The `error` field of the response body, when the backend sent one.
        message: Option<String>,
    },

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

fn detail(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

impl UptimeError {
    pub fn status(&self) -> Option<u16> {
        match self {
            UptimeError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// The message the backend itself gave for a rejected request.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            UptimeError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

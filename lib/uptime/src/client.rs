use std::{path::Path, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::{de::DeserializeOwned, Serialize};
use shared::{monitor::ApiErrorBody, CreateMonitor, Monitor};
use tracing::{debug, info, warn};
use url::Url;

use crate::{
    error::{Result, UptimeError},
    traits::MonitorBackend,
};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct UptimeClient {
    base_url: Url,
    client: Client,
}

#[derive(Default)]
pub struct UptimeClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl UptimeClientBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn base_url(mut self, url: &str) -> Self {
        let mut resolved_url = url.trim().to_string();
        if Path::new("/.dockerenv").exists() && resolved_url.contains("localhost") {
            resolved_url = resolved_url.replace("localhost", "host.docker.internal");
            info!(
                "Docker detected, using {} for uptime backend connection",
                resolved_url
            );
        }
        self.base_url = Some(resolved_url);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<UptimeClient> {
        let base_url_str = self
            .base_url
            .filter(|u| !u.is_empty())
            .ok_or(UptimeError::NotConfigured)?;
        let base_url = Url::parse(&base_url_str)?;
        if base_url.cannot_be_a_base() {
            return Err(url::ParseError::RelativeUrlWithCannotBeABaseBase.into());
        }

        let client = Client::builder()
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()?;

        Ok(UptimeClient { base_url, client })
    }
}

impl UptimeClient {
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends path segments to the base URL, keeping any path prefix it has.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| UptimeError::NotConfigured)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Sends a request and turns non-2xx responses into [`UptimeError::Api`].
    async fn send<B: Serialize>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<Response> {
        let url = self.endpoint(segments)?;
        debug!("Request: {} {}", method, url);

        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(b) = body {
            request = request.json(b);
        }
        let response = request.send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&text)
            .ok()
            .map(|body| body.error)
            .filter(|m| !m.is_empty());
        warn!("{} {} failed with {}: {:?}", method, url, status, message);

        Err(UptimeError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn make_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: Method,
        segments: &[&str],
        body: Option<&B>,
    ) -> Result<T> {
        let response = self.send(method, segments, body).await?;
        let text = response.text().await?;
        let text = if text.trim().is_empty() { "null" } else { &text };
        Ok(serde_json::from_str(text)?)
    }

    pub async fn list_monitors(&self) -> Result<Vec<Monitor>> {
        // the backend encodes an empty listing as `null`
        let monitors = self
            .make_request::<Option<Vec<Monitor>>, ()>(Method::GET, &["monitor"], None)
            .await?;
        Ok(monitors.unwrap_or_default())
    }

    pub async fn create_monitor(&self, request: &CreateMonitor) -> Result<Monitor> {
        let monitor: Monitor = self
            .make_request(Method::POST, &["monitor"], Some(request))
            .await?;
        info!("Monitor {} created for {}", monitor.id, monitor.url);
        Ok(monitor)
    }

    pub async fn trigger_check(&self, monitor_id: &str) -> Result<()> {
        self.send::<()>(Method::POST, &["monitor", monitor_id, "check"], None)
            .await?;
        debug!("Check triggered for monitor {}", monitor_id);
        Ok(())
    }
}

#[async_trait]
impl MonitorBackend for UptimeClient {
    fn name(&self) -> &'static str {
        "uptime"
    }

    async fn list_monitors(&self) -> Result<Vec<Monitor>> {
        UptimeClient::list_monitors(self).await
    }

    async fn create_monitor(&self, request: &CreateMonitor) -> Result<Monitor> {
        UptimeClient::create_monitor(self, request).await
    }

    async fn trigger_check(&self, monitor_id: &str) -> Result<()> {
        UptimeClient::trigger_check(self, monitor_id).await
    }
}

// Grafana HTTP client - reqwest implementation of GrafanaApi
use crate::application::error::{BoxError, GrafanaError};
use crate::application::grafana_api::GrafanaApi;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::Method;
use serde_json::Value;
use std::time::Instant;

/// Tracing target of the per-request access log.
pub const ACCESS_LOG_TARGET: &str = "grafana_access";

#[derive(Debug, Clone)]
pub struct GrafanaHttpClient {
    client: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl GrafanaHttpClient {
    pub fn new(base_url: String, username: String, password: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            username,
            password,
        }
    }

    async fn execute(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value, GrafanaError> {
        let verb = if method == Method::POST { "POST" } else { "GET" };
        let url = format!("{}{}", self.base_url, path);
        let payload = body.map(Value::to_string);
        let started = Instant::now();

        let result = self.round_trip(method, &url, payload.clone()).await;
        let cost_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(response) => {
                tracing::info!(
                    target: ACCESS_LOG_TARGET,
                    cost_ms,
                    %url,
                    body = payload.as_deref().unwrap_or(""),
                    %response,
                    "{verb}"
                );
                Ok(response)
            }
            Err(source) => {
                tracing::info!(
                    target: ACCESS_LOG_TARGET,
                    cost_ms,
                    %url,
                    body = payload.as_deref().unwrap_or(""),
                    error = %source,
                    "{verb}"
                );
                tracing::error!(%url, error = %source, "Grafana request failed");
                Err(GrafanaError::Request {
                    method: verb,
                    path: path.to_string(),
                    body: payload,
                    source,
                })
            }
        }
    }

    /// Sends one request and parses the body as JSON whatever the status code.
    async fn round_trip(&self, method: Method, url: &str, payload: Option<String>) -> Result<Value, BoxError> {
        let mut request = self
            .client
            .request(method.clone(), url)
            .basic_auth(&self.username, Some(&self.password))
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json");
        if method == Method::POST {
            request = request.body(payload.unwrap_or_default());
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| format!("invalid JSON response ({status}): {e}: {text}").into())
    }
}

#[async_trait]
impl GrafanaApi for GrafanaHttpClient {
    async fn get(&self, path: &str) -> Result<Value, GrafanaError> {
        self.execute(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: Option<&Value>) -> Result<Value, GrafanaError> {
        self.execute(Method::POST, path, body).await
    }
}

use async_trait::async_trait;
use reqwest::{header::CONTENT_TYPE, Client, Method};
use serde_json::Value;
use shared::error::ErrorBody;
use url::Url;

use crate::error::RequestError;

/// Request seam between the dashboard sync loop and the controller API.
#[async_trait]
pub trait ControllerApi: Send + Sync {
    /// Sends one JSON request and returns the parsed response body.
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, RequestError>;
}

pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Self {
        Self::with_http(Client::new(), base_url)
    }

    pub fn with_http(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn get(&self, path: &str) -> Result<Value, RequestError> {
        self.request(Method::GET, path, None).await
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<Value, RequestError> {
        self.request(Method::POST, path, Some(body)).await
    }
}

#[async_trait]
impl ControllerApi for ApiClient {
    async fn request(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, RequestError> {
        let url = self
            .base_url
            .join(path)
            .map_err(|err| RequestError::Transport(format!("invalid request path {path}: {err}")))?;

        let mut builder = self
            .http
            .request(method, url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(body) = body {
            builder = builder.json(&body);
        }

        let response = builder
            .send()
            .await
            .map_err(|err| RequestError::Transport(err.to_string()))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| RequestError::Transport(err.to_string()))?;

        // The body is decoded before the status is checked; an error page that
        // is not JSON surfaces as a decode failure.
        let data: Value =
            serde_json::from_slice(&bytes).map_err(|err| RequestError::Decode(err.to_string()))?;

        if !status.is_success() {
            let body = serde_json::from_value::<ErrorBody>(data).unwrap_or_default();
            return Err(RequestError::Status {
                status: status.as_u16(),
                message: body.message(),
            });
        }

        Ok(data)
    }
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;

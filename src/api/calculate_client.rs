use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;
use url::Url;

use crate::config::{ApiEndpoint, ApiSettings};
use crate::models::CalcInput;

use super::client::{ApiClient, ApiResult};
use super::error::ApiError;

/// Anything that can turn an input into the backend's JSON answer.
#[async_trait]
pub trait Calculator: Send + Sync {
    async fn calculate(&self, input: CalcInput) -> ApiResult<Value>;
}

#[derive(Debug, Serialize)]
struct CalculateRequest {
    input: CalcInput,
}

#[derive(Clone)]
pub struct CalculateClient {
    client: ApiClient,
    endpoint: ApiEndpoint,
}

impl CalculateClient {
    pub fn new(endpoint: ApiEndpoint, settings: &ApiSettings) -> ApiResult<Self> {
        Ok(Self {
            client: ApiClient::new(settings)?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    async fn send(&self, url: Url, input: CalcInput) -> ApiResult<Value> {
        let response = self
            .client
            .client()
            .post(url)
            .json(&CalculateRequest { input })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::ServerError {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_else(|_| "Unknown error".to_string()),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice::<Value>(&body).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse calculate response: {}", e))
        })
    }
}

#[async_trait]
impl Calculator for CalculateClient {
    /// POST `{"input": n}` to `<base>/calculate` and hand back the parsed body
    /// untouched. One request per call, never retried.
    async fn calculate(&self, input: CalcInput) -> ApiResult<Value> {
        let url = self.endpoint.calculate_url().clone();
        let started = Instant::now();
        tracing::debug!(%url, %input, "sending calculate request");

        let result = self.send(url, input).await;

        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => tracing::info!(%input, elapsed_ms, "calculate succeeded"),
            Err(e) => tracing::warn!(%input, elapsed_ms, error = %e, "calculate failed"),
        }

        result
    }
}

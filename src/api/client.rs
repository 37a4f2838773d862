use reqwest::Client;
use std::time::Duration;

use crate::config::ApiSettings;

use super::error::ApiError;

pub type ApiResult<T> = Result<T, ApiError>;

/// Shared HTTP transport. No retries are layered on top of reqwest.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
}

impl ApiClient {
    pub fn new(settings: &ApiSettings) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self { client })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }
}

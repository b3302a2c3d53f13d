use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    api::types::{ApiError, FetchError},
    config,
};

#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Option<String>,
}

/// Status and body text of a completed exchange.
pub(crate) struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn new_with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: Some(base_url.into()),
        }
    }

    pub(crate) async fn resolved_base_url(&self) -> String {
        let base = match &self.base_url {
            Some(base) => base.clone(),
            None => config::await_api_base_url().await,
        };
        base.trim_end_matches('/').to_string()
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.client
    }

    pub(crate) async fn execute(&self, builder: RequestBuilder) -> Result<RawResponse, FetchError> {
        let request = builder
            .build()
            .map_err(|e| FetchError::Network(e.to_string()))?;

        #[cfg(all(test, not(target_arch = "wasm32")))]
        if let Some(responder) = find_mock(request.url().as_str()) {
            let mock = responder.respond(&request)?;
            let status = StatusCode::from_u16(mock.status)
                .map_err(|e| FetchError::Network(e.to_string()))?;
            return Ok(RawResponse {
                status,
                body: mock.body,
            });
        }

        let response = self
            .client
            .execute(request)
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        Ok(RawResponse { status, body })
    }

    /// Sends the request and decodes a 2xx JSON body. Any other status is
    /// reported with the backend's error message when it sent one.
    pub(crate) async fn fetch_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, FetchError> {
        let response = self.execute(builder).await?;
        if !response.status.is_success() {
            let message = serde_json::from_str::<ApiError>(&response.body)
                .map(|e| e.error)
                .unwrap_or_else(|_| {
                    response
                        .status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                });
            return Err(FetchError::Status {
                status: response.status.as_u16(),
                message,
            });
        }
        serde_json::from_str(&response.body).map_err(|e| FetchError::Parse(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub use mock_registry::{register_mock, MockResponse, TestResponder};

#[cfg(all(test, not(target_arch = "wasm32")))]
use mock_registry::find_mock;

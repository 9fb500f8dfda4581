//! API Client
//!
//! Transport + config, plus the error convention shared by both stores:
//! a non-success response becomes `StoreError::Api` carrying the body's
//! `detail` message, or the caller's default when there is none.

use std::rc::Rc;

use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{Result, StoreError};
use crate::models::ErrorBody;
use crate::transport::{ApiRequest, ApiResponse, HttpTransport, Method};

#[derive(Clone)]
pub struct ApiClient {
    transport: Rc<dyn HttpTransport>,
    config: ApiConfig,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient").field("config", &self.config).finish_non_exhaustive()
    }
}

impl ApiClient {
    pub fn new(transport: Rc<dyn HttpTransport>, config: ApiConfig) -> Self {
        Self { transport, config }
    }

    /// Request to `endpoint` resolved against the base URL
    pub fn request(&self, method: Method, endpoint: &str) -> ApiRequest {
        ApiRequest::new(method, self.config.url(endpoint))
    }

    pub async fn send(&self, request: ApiRequest) -> Result<ApiResponse> {
        self.transport.send(request).await
    }

    /// Send and decode a success body as `T`
    pub async fn json<T: DeserializeOwned>(&self, request: ApiRequest, default_error: &str) -> Result<T> {
        let response = self.send(request).await?;
        if !response.is_success() {
            return Err(error_from_response(&response, default_error));
        }
        response.json()
    }

    /// Send and ignore the success body
    pub async fn ack(&self, request: ApiRequest, default_error: &str) -> Result<()> {
        let response = self.send(request).await?;
        if !response.is_success() {
            return Err(error_from_response(&response, default_error));
        }
        Ok(())
    }
}

/// Build the error for a non-success response
pub fn error_from_response(response: &ApiResponse, default_message: &str) -> StoreError {
    let message = serde_json::from_str::<ErrorBody>(&response.body)
        .ok()
        .and_then(|body| body.message())
        .unwrap_or_else(|| default_message.to_string());
    StoreError::api(response.status, message)
}

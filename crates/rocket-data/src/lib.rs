//! HTTP client utilities for RocketShoes.
//!
//! Provides a small builder API over `reqwest` for talking to the storefront
//! JSON services, with base-URL resolution and a fully buffered [`Response`].
//!
//! # Example
//!
//! ```rust,ignore
//! use rocket_data::FetchClient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Stock {
//!     amount: i64,
//! }
//!
//! let client = FetchClient::new().with_base_url("http://localhost:3333");
//!
//! let stock: Stock = client
//!     .get("/stock/1")
//!     .send()
//!     .await?
//!     .error_for_status()?
//!     .json()?;
//! ```

mod error;
mod request;
mod response;

pub use error::FetchError;
pub use request::RequestBuilder;
pub use response::Response;

use std::time::Duration;
use tracing::debug;

/// HTTP client for making outbound GET requests.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct FetchClient {
    http: reqwest::Client,
    base_url: Option<String>,
}

impl Default for FetchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchClient {
    /// Create a new HTTP client with no request timeout.
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: None,
        }
    }

    /// Create a client with a base URL that will be prepended to relative paths.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Apply a total timeout to every request.
    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, FetchError> {
        self.http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::RequestError(e.to_string()))?;
        Ok(self)
    }

    /// Create a GET request.
    pub fn get(&self, url: impl Into<String>) -> ClientRequestBuilder {
        let url = url.into();
        let full_url = match &self.base_url {
            Some(base) => {
                if url.starts_with("http://") || url.starts_with("https://") {
                    url
                } else {
                    format!(
                        "{}/{}",
                        base.trim_end_matches('/'),
                        url.trim_start_matches('/')
                    )
                }
            }
            None => url,
        };

        ClientRequestBuilder {
            http: self.http.clone(),
            builder: RequestBuilder::new(full_url),
        }
    }
}

/// A request builder bound to a client.
pub struct ClientRequestBuilder {
    http: reqwest::Client,
    builder: RequestBuilder,
}

impl ClientRequestBuilder {
    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.builder = self.builder.header(key, value);
        self
    }

    /// The request as it will be sent.
    pub fn request(&self) -> &RequestBuilder {
        &self.builder
    }

    /// Send the request and buffer the response.
    ///
    /// Non-2xx statuses are returned as a normal [`Response`]; use
    /// [`Response::error_for_status`] to turn them into errors.
    pub async fn send(self) -> Result<Response, FetchError> {
        let RequestBuilder { url, headers } = self.builder;

        let mut request = self.http.get(&url);
        for (key, value) in &headers {
            request = request.header(key.as_str(), value.as_str());
        }

        debug!(%url, "sending request");
        let response = request.send().await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?.to_vec();
        debug!(status, %url, bytes = body.len(), "received response");

        Ok(Response::new(status, body))
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{FetchClient, FetchError, Response};
}

//! HTTP transport for registry API communication.
//!
//! [`HttpTransport`] wraps a [`reqwest::Client`]: it attaches the fixed
//! header map to every request, selects the HTTP verb, serializes an
//! optional JSON body, and deserializes a typed JSON response. It reports
//! failures as [`TransportError`]; classification into the public error
//! taxonomy happens at the executor, not here.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::clients::target::RequestTarget;

/// HTTP verbs used by resource operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// Returns the verb name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

/// Failure raised by a single HTTP exchange.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The server responded with a non-2xx status code.
    #[error("server returned status {code}: {message}")]
    Status {
        /// The HTTP status code.
        code: u16,
        /// The response body, or the status reason when the body is empty.
        message: String,
    },

    /// The response body could not be decoded into the expected type.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The exchange itself failed at the network level.
    #[error(transparent)]
    Network(reqwest::Error),
}

/// HTTP transport for making requests to the registry API.
///
/// The header map is fixed at construction and attached to every outgoing
/// request unconditionally; there is no per-call override. The transport is
/// `Send + Sync` and may be shared across tasks.
#[derive(Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
    headers: HashMap<String, String>,
}

// Verify HttpTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpTransport>();
};

impl HttpTransport {
    /// Creates a transport that attaches `headers` to every request.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This
    /// should only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    #[must_use]
    pub fn new(headers: HashMap<String, String>) -> Self {
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .build()
            .expect("Failed to create HTTP client");
        Self { client, headers }
    }

    /// Returns the fixed header map attached to every request.
    #[must_use]
    pub const fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Issues a GET and deserializes the response body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the exchange fails, the server responds
    /// with a non-2xx status, or the body cannot be decoded as `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        target: &RequestTarget,
    ) -> Result<T, TransportError> {
        self.send(HttpMethod::Get, target, None::<&()>).await
    }

    /// Issues a POST with a JSON body and deserializes the response body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the exchange fails, the server responds
    /// with a non-2xx status, or the body cannot be decoded as `T`.
    pub async fn post<B, T>(&self, target: &RequestTarget, body: &B) -> Result<T, TransportError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(HttpMethod::Post, target, Some(body)).await
    }

    /// Issues a PUT with a JSON body and deserializes the response body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the exchange fails, the server responds
    /// with a non-2xx status, or the body cannot be decoded as `T`.
    pub async fn put<B, T>(&self, target: &RequestTarget, body: &B) -> Result<T, TransportError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.send(HttpMethod::Put, target, Some(body)).await
    }

    /// Issues a DELETE and deserializes the response body.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the exchange fails, the server responds
    /// with a non-2xx status, or the body cannot be decoded as `T`.
    pub async fn delete<T: DeserializeOwned>(
        &self,
        target: &RequestTarget,
    ) -> Result<T, TransportError> {
        self.send(HttpMethod::Delete, target, None::<&()>).await
    }

    /// Performs exactly one HTTP exchange.
    async fn send<B, T>(
        &self,
        method: HttpMethod,
        target: &RequestTarget,
        body: Option<&B>,
    ) -> Result<T, TransportError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let mut builder = match method {
            HttpMethod::Get => self.client.get(target.url()),
            HttpMethod::Post => self.client.post(target.url()),
            HttpMethod::Put => self.client.put(target.url()),
            HttpMethod::Delete => self.client.delete(target.url()),
        };

        builder = builder.header("Accept", "application/json");
        for (key, value) in &self.headers {
            builder = builder.header(key, value);
        }

        if !target.query().is_empty() {
            builder = builder.query(target.query());
        }

        if let Some(body) = body {
            builder = builder.json(body);
        }

        tracing::debug!(method = method.as_str(), url = target.url(), "sending registry request");

        let response = builder.send().await.map_err(TransportError::Network)?;
        let status = response.status();
        let text = response.text().await.map_err(TransportError::Network)?;

        if !status.is_success() {
            let message = if text.trim().is_empty() {
                status.canonical_reason().unwrap_or("unknown error").to_string()
            } else {
                text.trim().to_string()
            };
            return Err(TransportError::Status {
                code: status.as_u16(),
                message,
            });
        }

        // An empty success body reads as JSON null, so operations expecting
        // an optional value can normalize it instead of failing to decode.
        if text.trim().is_empty() {
            serde_json::from_value(serde_json::Value::Null).map_err(TransportError::Decode)
        } else {
            serde_json::from_str(&text).map_err(TransportError::Decode)
        }
    }
}

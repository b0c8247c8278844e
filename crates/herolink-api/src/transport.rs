// HTTP transport capability
//
// The protocol core never owns sockets. It hands fully-built request URLs to
// a [`Transport`] and gets back a bare HTTP status code -- response bodies
// are never read, because the protocol carries all its information in the
// status line. Tests substitute recording stubs; production uses
// [`HttpTransport`] over `reqwest`.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

/// Failure modes of a [`Transport`] implementation.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The camera could not be reached at all (TCP connect or timeout).
    #[error("could not reach the camera: {0}")]
    Connect(String),

    /// The request went out but no usable HTTP response came back.
    #[error("request failed: {0}")]
    Request(String),
}

/// Capability to perform one HTTP GET and report the status code.
pub trait Transport {
    /// Perform a GET against `url` and return the HTTP status code.
    ///
    /// One attempt per call; the client never retries.
    fn get(&mut self, url: &str) -> impl Future<Output = Result<u16, TransportError>> + Send;
}

/// Shared configuration for building the production HTTP transport.
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Per-request timeout (connect + response).
    pub timeout: Duration,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
        }
    }
}

impl TransportConfig {
    /// Build a `reqwest::Client` from this config.
    pub fn build_client(&self) -> Result<reqwest::Client, TransportError> {
        reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(concat!("herolink/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Request(format!("failed to build HTTP client: {e}")))
    }
}

/// Production transport over `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Create a transport from a [`TransportConfig`].
    pub fn new(config: &TransportConfig) -> Result<Self, TransportError> {
        Ok(Self {
            http: config.build_client()?,
        })
    }
}

impl Transport for HttpTransport {
    async fn get(&mut self, url: &str) -> Result<u16, TransportError> {
        let resp = self.http.get(url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                TransportError::Connect(e.to_string())
            } else {
                TransportError::Request(e.to_string())
            }
        })?;
        Ok(resp.status().as_u16())
    }
}

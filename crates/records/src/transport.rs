//! HTTP transport boundary
//!
//! The retrieve pipeline only needs "GET this URI, give me the status and the
//! body". [`Transport`] captures that so tests can swap in canned pages and
//! callers can wrap the real client with their own timeouts.

use std::future::Future;

use reqwest::Url;

/// Status and raw body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// The request never produced a response
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Network error: {0}")]
pub struct TransportError(pub String);

pub trait Transport {
    fn get(&self, uri: &Url) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}

/// [`Transport`] backed by a `reqwest::Client`
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn get(&self, uri: &Url) -> Result<RawResponse, TransportError> {
        let response = self
            .client
            .get(uri.clone())
            .send()
            .await
            .map_err(|e| TransportError(format!("Failed to fetch {uri}: {e}")))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError(format!("Failed to read body from {uri}: {e}")))?;

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}

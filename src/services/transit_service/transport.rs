use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use super::types::fetch_error::FetchError;

/// What the validator needs from an HTTP exchange: the status and the fully
/// decoded body.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one POST and waits for the complete, decompressed body.
    async fn post(
        &self,
        url: &str,
        headers: HeaderMap,
        body: Vec<u8>,
    ) -> Result<TransportResponse, FetchError>;
}

/// reqwest handles gzip, deflate and br itself when those features are on.
#[derive(Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post(
        &self,
        url: &str,
        headers: HeaderMap,
        body: Vec<u8>,
    ) -> Result<TransportResponse, FetchError> {
        let resp = self
            .client
            .post(url)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        let status = resp.status().as_u16();

        let body = resp.bytes().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Network(e.to_string())
            } else {
                FetchError::TransportDecode(e.to_string())
            }
        })?;

        Ok(TransportResponse {
            status,
            body: body.to_vec(),
        })
    }
}

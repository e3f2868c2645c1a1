use std::time::Duration;

use async_trait::async_trait;
use log::warn;
use notify_defs::DeliveryError;
use notify_utils::format_error_chain;

/// Any HTTP response, successful or not. Interpreting the status is up to the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends one POST. Only fails when no response was obtained at all.
    async fn post(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: String,
    ) -> Result<HttpReply, DeliveryError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    async fn post(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: String,
    ) -> Result<HttpReply, DeliveryError> {
        (**self).post(url, headers, body).await
    }
}

/// Shares one `reqwest::Client` (and its connection pool) across invocations.
#[derive(Clone, Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self, anyhow::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(ReqwestTransport { client })
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn post(
        &self,
        url: &str,
        headers: &[(&str, &str)],
        body: String,
    ) -> Result<HttpReply, DeliveryError> {
        let mut request = self.client.post(url).body(body);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        let response = request
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(format_error_chain(&e)))?;

        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                warn!("Could not read response body from {}: {}", url, e);
                String::new()
            }
        };

        Ok(HttpReply { status, body })
    }
}

//! reqwest-backed transport

use super::{Method, Transport, TransportError, TransportResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Transport that issues real HTTP requests through reqwest
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http_client: Client,
}

impl HttpTransport {
    /// Create a transport with default settings and no request timeout
    pub fn new() -> reqwest::Result<Self> {
        Self::builder(None)
    }

    /// Create a transport whose requests give up after `timeout`
    pub fn with_timeout(timeout: Duration) -> reqwest::Result<Self> {
        Self::builder(Some(timeout))
    }

    /// Wrap an already configured reqwest client
    pub fn with_client(http_client: Client) -> Self {
        Self { http_client }
    }

    fn builder(timeout: Option<Duration>) -> reqwest::Result<Self> {
        let mut builder = Client::builder().user_agent(concat!("sfrest/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http_client: builder.build()?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn perform(&self, method: Method, url: &str) -> Result<TransportResponse, TransportError> {
        let request = match method {
            Method::Get => self.http_client.get(url),
            Method::Post => self.http_client.post(url),
        };

        let response = request.header("Accept", "application/json").send().await?;

        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(TransportResponse { status, body })
    }
}

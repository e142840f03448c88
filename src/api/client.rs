//! Service Fabric REST API client

use crate::config::ClientConfig;
use crate::error::{FabricError, Result};
use crate::models::Paged;
use crate::transport::{Method, Transport, TransportResponse};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, trace};

/// API version used when the client is built with an empty one
pub const DEFAULT_API_VERSION: &str = "3.0";

/// Query parameter appended after the mandatory `api-version`.
///
/// Request builders take a list of `Option<QueryParam>`; a `None` entry adds
/// nothing to the URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct QueryParam {
    name: &'static str,
    value: String,
}

pub(crate) fn with_param(name: &'static str, value: impl Into<String>) -> Option<QueryParam> {
    Some(QueryParam {
        name,
        value: value.into(),
    })
}

/// `continue={token}`, or nothing at all for the first page
pub(crate) fn with_continue(token: Option<&str>) -> Option<QueryParam> {
    match token {
        Some(token) if !token.is_empty() => with_param("continue", token),
        _ => None,
    }
}

/// HTTP client for a Service Fabric cluster management endpoint
///
/// Holds only immutable configuration, so a single client can be shared
/// across tasks.
#[derive(Clone)]
pub struct ServiceFabricClient {
    endpoint: String,
    api_version: String,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for ServiceFabricClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceFabricClient")
            .field("endpoint", &self.endpoint)
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl ServiceFabricClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `transport` - Capability used to perform every request
    /// * `endpoint` - Cluster management endpoint (e.g., "http://localhost:19080")
    /// * `api_version` - REST API version; empty selects [`DEFAULT_API_VERSION`]
    pub fn new(
        transport: Arc<dyn Transport>,
        endpoint: impl Into<String>,
        api_version: impl Into<String>,
    ) -> Result<Self> {
        let endpoint = endpoint.into();
        let endpoint = endpoint.trim().trim_end_matches('/').to_string();
        if endpoint.is_empty() {
            return Err(FabricError::Config(
                "endpoint missing for client configuration".to_string(),
            ));
        }

        let mut api_version = api_version.into();
        if api_version.is_empty() {
            api_version = DEFAULT_API_VERSION.to_string();
        }

        Ok(Self {
            endpoint,
            api_version,
            transport,
        })
    }

    /// Create a client from a loaded configuration
    pub fn from_config(transport: Arc<dyn Transport>, config: &ClientConfig) -> Result<Self> {
        Self::new(
            transport,
            config.endpoint.clone(),
            config.api_version.clone().unwrap_or_default(),
        )
    }

    /// Get the cluster endpoint
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Get the configured API version
    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Build `{endpoint}/{base_path}?api-version={configured}&...`
    pub(crate) fn url(&self, base_path: &str, params: &[Option<QueryParam>]) -> String {
        self.url_with_version(base_path, &self.api_version, params)
    }

    /// Same as [`Self::url`] but with an explicit API version
    pub(crate) fn url_with_version(
        &self,
        base_path: &str,
        api_version: &str,
        params: &[Option<QueryParam>],
    ) -> String {
        let mut query = vec![format!("api-version={}", api_version)];
        query.extend(
            params
                .iter()
                .flatten()
                .map(|p| format!("{}={}", p.name, urlencoding::encode(&p.value))),
        );

        format!(
            "{}/{}?{}",
            self.endpoint,
            base_path.trim_start_matches('/'),
            query.join("&")
        )
    }

    /// Perform a request, mapping transport failures to connectivity errors
    async fn send(&self, method: Method, url: &str) -> Result<TransportResponse> {
        debug!(%method, url, "Sending request to Service Fabric");

        let response = self
            .transport
            .perform(method, url)
            .await
            .map_err(|source| FabricError::Connectivity {
                url: url.to_string(),
                source,
            })?;

        debug!(
            %method,
            url,
            status = response.status,
            body_len = response.body.len(),
            "Received response from Service Fabric"
        );
        Ok(response)
    }

    /// Require a 200 with a non-empty body
    fn expect_body(url: &str, response: TransportResponse) -> Result<String> {
        if response.status != 200 {
            return Err(FabricError::UpstreamStatus {
                status: response.status,
                url: url.to_string(),
            });
        }

        if response.body.is_empty() {
            return Err(FabricError::EmptyResponse {
                url: url.to_string(),
            });
        }

        Ok(response.body)
    }

    /// GET a resource and return its body
    pub(crate) async fn fetch_body(
        &self,
        base_path: &str,
        params: &[Option<QueryParam>],
    ) -> Result<String> {
        let url = self.url(base_path, params);
        let response = self.send(Method::Get, &url).await?;
        Self::expect_body(&url, response)
    }

    /// GET a URL and return whatever status the server answered with
    pub(crate) async fn fetch_status(&self, url: &str) -> Result<u16> {
        let response = self.send(Method::Get, url).await?;
        Ok(response.status)
    }

    /// POST without a payload and return the response body
    pub(crate) async fn post_body(
        &self,
        base_path: &str,
        params: &[Option<QueryParam>],
    ) -> Result<String> {
        let url = self.url(base_path, params);
        let response = self.send(Method::Post, &url).await?;
        Self::expect_body(&url, response)
    }

    /// GET a resource and deserialize its JSON body
    pub(crate) async fn fetch_json<T: DeserializeOwned>(
        &self,
        base_path: &str,
        params: &[Option<QueryParam>],
    ) -> Result<T> {
        let body = self.fetch_body(base_path, params).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Follow continuation tokens until the listing is exhausted.
    ///
    /// Items are returned in the order the pages delivered them. `params`
    /// are sent on every page after the `continue` token. There is no page
    /// cap: a server that keeps returning tokens keeps this loop running.
    pub(crate) async fn fetch_all<P>(
        &self,
        base_path: &str,
        params: &[Option<QueryParam>],
    ) -> Result<Vec<P::Item>>
    where
        P: Paged + DeserializeOwned,
    {
        let mut items = Vec::new();
        let mut token: Option<String> = None;
        let mut page_number = 0usize;

        loop {
            page_number += 1;

            let mut page_params = Vec::with_capacity(params.len() + 1);
            page_params.push(with_continue(token.as_deref()));
            page_params.extend_from_slice(params);

            let page: P = self.fetch_json(base_path, &page_params).await?;
            let (page_items, next) = page.into_parts();

            trace!(
                base_path,
                page_number,
                items = page_items.len(),
                has_more = next.is_some(),
                "Fetched page"
            );
            items.extend(page_items);

            match next {
                Some(next) => token = Some(next),
                None => break,
            }
        }

        Ok(items)
    }
}

//! Transport module for issuing raw HTTP requests
//!
//! The client never talks to the network directly; it goes through a
//! [`Transport`] so the HTTP stack can be swapped out (or scripted in tests).

mod http;
#[cfg(test)]
pub(crate) mod mock;

use async_trait::async_trait;
use std::fmt;

pub use http::HttpTransport;

/// Boxed error returned by a transport when the request could not complete.
pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// HTTP methods used by the Service Fabric REST API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
        }
    }
}

/// Status code and body of a completed request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

/// Capability to perform a request against an absolute URL.
///
/// Implementations return `Ok` for any status the server answers with;
/// `Err` is reserved for requests that never produced a response.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Perform `method` against `url` without a request body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request could not be sent or the response
    /// could not be read.
    async fn perform(&self, method: Method, url: &str) -> Result<TransportResponse, TransportError>;
}

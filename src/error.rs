//! Error types for Service Fabric client operations

use thiserror::Error;

use crate::transport::TransportError;

/// A result type using `FabricError`.
pub type Result<T> = std::result::Result<T, FabricError>;

/// Errors surfaced by the Service Fabric client.
///
/// Absence (a name that does not resolve, an extension key that is not
/// present) is never reported through this type.
#[derive(Debug, Error)]
pub enum FabricError {
    /// The client was constructed with invalid settings.
    #[error("invalid client configuration: {0}")]
    Config(String),

    /// The transport itself failed (DNS, connection refused, timeout...).
    #[error("failed to connect to Service Fabric server on {url}: {source}")]
    Connectivity {
        url: String,
        #[source]
        source: TransportError,
    },

    /// The request completed but the cluster answered with a non-200 status.
    #[error("Service Fabric responded with status {status} to request {url}")]
    UpstreamStatus { status: u16, url: String },

    /// The cluster answered 200 with nothing in the body.
    #[error("empty response body from Service Fabric for request {url}")]
    EmptyResponse { url: String },

    /// A response payload could not be decoded.
    #[error(transparent)]
    Deserialize(#[from] DecodeError),
}

/// Decoder failures, tagged by the format that failed.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("could not deserialise JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not deserialise extension's XML value: {0}")]
    Xml(#[from] quick_xml::DeError),
}

impl FabricError {
    /// The upstream status code, when the error carries one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::UpstreamStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if a JSON or XML payload failed to decode.
    #[must_use]
    pub const fn is_deserialization(&self) -> bool {
        matches!(self, Self::Deserialize(_))
    }
}

impl From<serde_json::Error> for FabricError {
    fn from(err: serde_json::Error) -> Self {
        Self::Deserialize(DecodeError::Json(err))
    }
}

impl From<quick_xml::DeError> for FabricError {
    fn from(err: quick_xml::DeError) -> Self {
        Self::Deserialize(DecodeError::Xml(err))
    }
}

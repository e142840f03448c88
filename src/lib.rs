//! sfrest - client for the Service Fabric cluster-management REST API
//!
//! Typed, read-mostly access to a cluster:
//! - Applications, services, partitions and replicas
//! - Naming service properties
//! - Service type extensions
//! - Cluster health and application/service deletion
//!
//! Every request goes through an injectable [`Transport`]; [`HttpTransport`]
//! is the reqwest-backed default.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod transport;

pub use api::{ServiceFabricClient, DEFAULT_API_VERSION};
pub use config::ClientConfig;
pub use error::{DecodeError, FabricError, Result};
pub use transport::{HttpTransport, Method, Transport, TransportError, TransportResponse};

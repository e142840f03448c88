//! API module for Service Fabric REST API interactions

mod applications;
pub(crate) mod client;
mod cluster;
mod extensions;
mod partitions;
mod properties;
mod services;

pub use client::{ServiceFabricClient, DEFAULT_API_VERSION};

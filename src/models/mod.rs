//! Data models for the Service Fabric REST API

mod application;
mod extension;
mod page;
mod partition;
mod property;
mod replica;
mod service;
mod service_type;

pub use application::{AppParameter, ApplicationItem};
pub use extension::{ExtensionLabel, ServiceExtensionLabels};
pub use page::{Page, Paged};
pub use partition::{ConfigurationEpoch, PartitionInformation, PartitionItem};
pub use property::{Metadata, PropValue, PropertiesListPage, Property, STRING_KIND};
pub use replica::{InstanceItem, ReplicaItem, ReplicaItemBase, ReplicaLike};
pub use service::ServiceItem;
pub use service_type::{KeyValuePair, ServiceType, ServiceTypeDescription};

pub type ApplicationItemsPage = Page<ApplicationItem>;
pub type ServiceItemsPage = Page<ServiceItem>;
pub type PartitionItemsPage = Page<PartitionItem>;
pub type ReplicaItemsPage = Page<ReplicaItem>;
pub type InstanceItemsPage = Page<InstanceItem>;

//! Partition and replica API

use super::ServiceFabricClient;
use crate::error::Result;
use crate::models::{
    InstanceItem, InstanceItemsPage, PartitionItem, PartitionItemsPage, ReplicaItem,
    ReplicaItemsPage,
};

impl ServiceFabricClient {
    /// Get every partition of a service
    pub async fn get_partitions(&self, service_id: &str) -> Result<Vec<PartitionItem>> {
        let path = format!("Services/{}/$/GetPartitions", service_id);
        self.fetch_all::<PartitionItemsPage>(&path, &[]).await
    }

    /// Get the replicas of a stateful service partition
    pub async fn get_replicas(&self, partition_id: &str) -> Result<Vec<ReplicaItem>> {
        let path = format!("Partitions/{}/$/GetReplicas", partition_id);
        self.fetch_all::<ReplicaItemsPage>(&path, &[]).await
    }

    /// Get the instances of a stateless service partition
    ///
    /// Served by the same endpoint as [`Self::get_replicas`]; only the id
    /// field differs.
    pub async fn get_instances(&self, partition_id: &str) -> Result<Vec<InstanceItem>> {
        let path = format!("Partitions/{}/$/GetReplicas", partition_id);
        self.fetch_all::<InstanceItemsPage>(&path, &[]).await
    }
}

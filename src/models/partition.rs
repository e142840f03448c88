//! Partition models

use serde::{Deserialize, Serialize};

/// Version pair identifying a partition's replica configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigurationEpoch {
    #[serde(rename = "ConfigurationVersion")]
    pub configuration_version: String,

    #[serde(rename = "DataLossVersion")]
    pub data_loss_version: String,
}

/// Identity and key range of a partition
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionInformation {
    #[serde(rename = "Id")]
    pub id: String,

    #[serde(rename = "ServicePartitionKind")]
    pub service_partition_kind: String,

    #[serde(rename = "LowKey")]
    pub low_key: String,

    #[serde(rename = "HighKey")]
    pub high_key: String,
}

/// Partition of a service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionItem {
    #[serde(rename = "PartitionInformation")]
    pub partition_information: PartitionInformation,

    #[serde(rename = "ServiceKind")]
    pub service_kind: String,

    #[serde(rename = "TargetReplicaSetSize")]
    pub target_replica_set_size: i64,

    #[serde(rename = "MinReplicaSetSize")]
    pub min_replica_set_size: i64,

    #[serde(rename = "CurrentConfigurationEpoch")]
    pub current_configuration_epoch: ConfigurationEpoch,

    #[serde(rename = "HealthState")]
    pub health_state: String,

    #[serde(rename = "PartitionStatus")]
    pub partition_status: String,
}

impl PartitionItem {
    /// Partition id, used to address its replicas
    pub fn id(&self) -> &str {
        &self.partition_information.id
    }
}

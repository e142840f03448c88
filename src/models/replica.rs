//! Replica and instance models
//!
//! Stateful services report replicas, stateless services report instances.
//! Both share the same base fields and differ only in the name of their id.

use serde::{Deserialize, Serialize};

/// Fields common to replicas and instances
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplicaItemBase {
    #[serde(rename = "ServiceKind")]
    pub service_kind: String,

    #[serde(rename = "Address")]
    pub address: String,

    #[serde(rename = "NodeName")]
    pub node_name: String,

    #[serde(rename = "ReplicaRole")]
    pub replica_role: String,

    #[serde(rename = "ReplicaStatus")]
    pub replica_status: String,

    #[serde(rename = "HealthState")]
    pub health_state: String,

    #[serde(rename = "LastInBuildDurationInSeconds")]
    pub last_in_build_duration_in_seconds: String,
}

/// Anything that looks like a replica: an id plus the shared base fields
pub trait ReplicaLike {
    fn replica_data(&self) -> (&str, &ReplicaItemBase);
}

/// Replica of a stateful service partition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplicaItem {
    #[serde(rename = "ReplicaId")]
    pub id: String,

    #[serde(flatten)]
    pub base: ReplicaItemBase,
}

impl ReplicaLike for ReplicaItem {
    fn replica_data(&self) -> (&str, &ReplicaItemBase) {
        (&self.id, &self.base)
    }
}

/// Instance of a stateless service partition
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InstanceItem {
    #[serde(rename = "InstanceId")]
    pub id: String,

    #[serde(flatten)]
    pub base: ReplicaItemBase,
}

impl ReplicaLike for InstanceItem {
    fn replica_data(&self) -> (&str, &ReplicaItemBase) {
        (&self.id, &self.base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node_names<R: ReplicaLike>(items: &[R]) -> Vec<String> {
        items
            .iter()
            .map(|r| r.replica_data().1.node_name.clone())
            .collect()
    }

    #[test]
    fn test_replica_deserialization() {
        let json = r#"
        {
            "ServiceKind": "Stateful",
            "ReplicaId": "131462202095463387",
            "ReplicaRole": "Primary",
            "ReplicaStatus": "Ready",
            "HealthState": "Ok",
            "Address": "{\"Endpoints\":{\"\":\"net.tcp://10.0.0.4:20001\"}}",
            "NodeName": "_Node_0",
            "LastInBuildDurationInSeconds": "1"
        }
        "#;

        let replica: ReplicaItem = serde_json::from_str(json).unwrap();
        let (id, base) = replica.replica_data();

        assert_eq!(id, "131462202095463387");
        assert_eq!(base.replica_role, "Primary");
        assert_eq!(base.service_kind, "Stateful");
        assert_eq!(base.last_in_build_duration_in_seconds, "1");
    }

    #[test]
    fn test_instance_shares_base_fields() {
        let json = r#"
        {
            "ServiceKind": "Stateless",
            "InstanceId": "131462202095463388",
            "ReplicaStatus": "Ready",
            "HealthState": "Ok",
            "NodeName": "_Node_1"
        }
        "#;

        let instance: InstanceItem = serde_json::from_str(json).unwrap();
        let (id, base) = instance.replica_data();

        assert_eq!(id, "131462202095463388");
        assert_eq!(base.replica_role, "");
        assert_eq!(node_names(&[instance.clone()]), vec!["_Node_1".to_string()]);
    }
}

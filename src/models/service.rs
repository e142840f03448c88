//! Service models

use serde::{Deserialize, Serialize};

/// Service belonging to an application
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceItem {
    #[serde(rename = "Id")]
    pub id: String,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "TypeName")]
    pub type_name: String,

    #[serde(rename = "ManifestVersion")]
    pub manifest_version: String,

    #[serde(rename = "ServiceKind")]
    pub service_kind: String,

    #[serde(rename = "ServiceStatus")]
    pub service_status: String,

    #[serde(rename = "HealthState")]
    pub health_state: String,

    #[serde(rename = "HasPersistedState")]
    pub has_persisted_state: bool,

    #[serde(rename = "IsServiceGroup")]
    pub is_service_group: bool,
}

impl ServiceItem {
    pub fn is_stateful(&self) -> bool {
        self.service_kind == "Stateful"
    }
}

//! Service type models

use super::page::null_as_default;
use serde::{Deserialize, Serialize};

/// Plain key/value pair as the REST API encodes it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValuePair {
    #[serde(rename = "Key")]
    pub key: String,

    #[serde(rename = "Value")]
    pub value: String,
}

/// Service type registered by an application type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceType {
    #[serde(rename = "ServiceTypeDescription")]
    pub service_type_description: ServiceTypeDescription,

    #[serde(rename = "ServiceManifestName")]
    pub service_manifest_name: String,

    #[serde(rename = "ServiceManifestVersion")]
    pub service_manifest_version: String,

    #[serde(rename = "IsServiceGroup")]
    pub is_service_group: bool,
}

/// Manifest description of a service type
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceTypeDescription {
    #[serde(rename = "Kind")]
    pub kind: String,

    #[serde(rename = "ServiceTypeName")]
    pub service_type_name: String,

    #[serde(rename = "IsStateful")]
    pub is_stateful: bool,

    #[serde(rename = "HasPersistedState")]
    pub has_persisted_state: bool,

    #[serde(rename = "PlacementConstraints")]
    pub placement_constraints: String,

    #[serde(rename = "Extensions", deserialize_with = "null_as_default")]
    pub extensions: Vec<KeyValuePair>,

    #[serde(rename = "LoadMetrics", deserialize_with = "null_as_default")]
    pub load_metrics: Vec<serde_json::Value>,

    #[serde(rename = "ServicePlacementPolicies", deserialize_with = "null_as_default")]
    pub service_placement_policies: Vec<serde_json::Value>,
}

impl ServiceTypeDescription {
    /// First extension whose key matches `key`, ignoring case
    pub fn extension(&self, key: &str) -> Option<&KeyValuePair> {
        self.extensions
            .iter()
            .find(|e| e.key.to_lowercase() == key.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_type_deserialization() {
        let json = r#"
        {
            "ServiceTypeDescription": {
                "Kind": "Stateless",
                "IsStateful": false,
                "ServiceTypeName": "FrontendType",
                "PlacementConstraints": "",
                "LoadMetrics": [],
                "ServicePlacementPolicies": [],
                "Extensions": [
                    { "Key": "Traefik", "Value": "<Labels><Label Key=\"a\">b</Label></Labels>" }
                ]
            },
            "ServiceManifestVersion": "1.0.0",
            "ServiceManifestName": "FrontendPkg",
            "IsServiceGroup": false
        }
        "#;

        let service_type: ServiceType = serde_json::from_str(json).unwrap();
        let description = &service_type.service_type_description;

        assert_eq!(description.service_type_name, "FrontendType");
        assert_eq!(service_type.service_manifest_name, "FrontendPkg");
        assert!(description.extension("traefik").is_some());
        assert!(description.extension("other").is_none());
    }

    #[test]
    fn test_extension_lookup_returns_first_match() {
        let description = ServiceTypeDescription {
            extensions: vec![
                KeyValuePair { key: "KEY".into(), value: "first".into() },
                KeyValuePair { key: "key".into(), value: "second".into() },
            ],
            ..Default::default()
        };

        assert_eq!(description.extension("Key").unwrap().value, "first");
    }
}

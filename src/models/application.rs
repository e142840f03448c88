//! Application models

use super::page::null_as_default;
use serde::{Deserialize, Serialize};

/// Application parameter override
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppParameter {
    #[serde(rename = "Key")]
    pub key: String,

    #[serde(rename = "Value")]
    pub value: String,
}

/// Application deployed to the cluster
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicationItem {
    #[serde(rename = "Id")]
    pub id: String,

    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "TypeName")]
    pub type_name: String,

    #[serde(rename = "TypeVersion")]
    pub type_version: String,

    #[serde(rename = "HealthState")]
    pub health_state: String,

    #[serde(rename = "Status")]
    pub status: String,

    #[serde(rename = "Parameters", deserialize_with = "null_as_default")]
    pub parameters: Vec<AppParameter>,
}

impl ApplicationItem {
    /// Look up a parameter value by key
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }
}

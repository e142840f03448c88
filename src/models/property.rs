//! Naming service property models

use super::page::{non_empty, null_as_default, Paged};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Value kind of properties whose data is a plain string
pub const STRING_KIND: &str = "String";

/// One page of `Names/{name}/$/GetProperties`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PropertiesListPage {
    #[serde(rename = "ContinuationToken")]
    pub continuation_token: String,

    #[serde(rename = "IsConsistent")]
    pub is_consistent: bool,

    #[serde(rename = "Properties", deserialize_with = "null_as_default")]
    pub properties: Vec<Property>,
}

impl Paged for PropertiesListPage {
    type Item = Property;

    fn into_parts(self) -> (Vec<Property>, Option<String>) {
        (self.properties, non_empty(Some(self.continuation_token)))
    }
}

/// Property stored under a name
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Property {
    #[serde(rename = "Name")]
    pub name: String,

    #[serde(rename = "Value")]
    pub value: PropValue,

    #[serde(rename = "Metadata")]
    pub metadata: Metadata,
}

impl Property {
    /// Whether the value is a plain string
    pub fn is_string(&self) -> bool {
        self.value.kind == STRING_KIND
    }

    /// Last modification time, if the server sent a parseable timestamp
    pub fn last_modified(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.metadata.last_modified_utc_timestamp)
            .ok()
            .map(|t| t.with_timezone(&Utc))
    }
}

/// Kind-tagged property value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PropValue {
    #[serde(rename = "Kind")]
    pub kind: String,

    #[serde(rename = "Data")]
    pub data: String,
}

/// Property bookkeeping kept by the naming service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Metadata {
    #[serde(rename = "TypeId")]
    pub type_id: String,

    #[serde(rename = "CustomTypeId")]
    pub custom_type_id: String,

    #[serde(rename = "Parent")]
    pub parent: String,

    #[serde(rename = "SizeInBytes")]
    pub size_in_bytes: i64,

    #[serde(rename = "LastModifiedUtcTimestamp")]
    pub last_modified_utc_timestamp: String,

    #[serde(rename = "SequenceNumber")]
    pub sequence_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_properties_page_deserialization() {
        let json = r#"
        {
            "ContinuationToken": "PersistentCount$1",
            "IsConsistent": true,
            "Properties": [
                {
                    "Name": "PersistentCount",
                    "Value": { "Kind": "String", "Data": "42" },
                    "Metadata": {
                        "TypeId": "String",
                        "CustomTypeId": "",
                        "Parent": "fabric:/samples/apps",
                        "SizeInBytes": 4,
                        "LastModifiedUtcTimestamp": "2017-07-17T05:01:19.049Z",
                        "SequenceNumber": "12"
                    }
                }
            ]
        }
        "#;

        let page: PropertiesListPage = serde_json::from_str(json).unwrap();
        assert!(page.is_consistent);

        let (properties, token) = page.into_parts();
        assert_eq!(token.as_deref(), Some("PersistentCount$1"));
        assert_eq!(properties.len(), 1);
        assert!(properties[0].is_string());
        assert_eq!(properties[0].metadata.size_in_bytes, 4);
        assert_eq!(properties[0].last_modified().unwrap().year(), 2017);
    }

    #[test]
    fn test_bad_timestamp_is_none() {
        let property = Property {
            metadata: Metadata {
                last_modified_utc_timestamp: "yesterday".into(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(property.last_modified().is_none());
    }
}

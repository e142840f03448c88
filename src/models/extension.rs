//! Decoded service-type extension values

use serde::Deserialize;
use std::collections::HashMap;

/// `<Labels><Label Key="...">value</Label>...</Labels>`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ServiceExtensionLabels {
    #[serde(rename = "Label", default)]
    pub labels: Vec<ExtensionLabel>,
}

/// A single `<Label Key="...">value</Label>` element
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ExtensionLabel {
    #[serde(rename = "@Key", default)]
    pub key: String,

    #[serde(rename = "$text", default)]
    pub value: String,
}

impl ServiceExtensionLabels {
    /// Flatten into a key to value map; a repeated key keeps its last value
    pub fn into_map(self) -> HashMap<String, String> {
        self.labels.into_iter().map(|l| (l.key, l.value)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_from_xml() {
        let xml = r#"<Labels xmlns="http://schemas.microsoft.com/2015/03/fabact-no-schema">
            <Label Key="traefik.frontend.rule">PathPrefix: /api</Label>
            <Label Key="traefik.enable">true</Label>
        </Labels>"#;

        let labels: ServiceExtensionLabels = quick_xml::de::from_str(xml).unwrap();

        assert_eq!(labels.labels.len(), 2);
        assert_eq!(labels.labels[0].key, "traefik.frontend.rule");
        assert_eq!(labels.labels[0].value, "PathPrefix: /api");
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let xml = r#"<Labels><Label Key="env">dev</Label><Label Key="env">prod</Label><Label Key="empty"/></Labels>"#;

        let map = quick_xml::de::from_str::<ServiceExtensionLabels>(xml)
            .unwrap()
            .into_map();

        assert_eq!(map.len(), 2);
        assert_eq!(map["env"], "prod");
        assert_eq!(map["empty"], "");
    }
}

//! Service type and extension API

use super::client::{with_param, ServiceFabricClient};
use crate::error::Result;
use crate::models::{ApplicationItem, ServiceExtensionLabels, ServiceItem, ServiceType};
use serde::de::DeserializeOwned;
use std::collections::HashMap;

impl ServiceFabricClient {
    /// Get the service types registered by an application type version
    pub async fn get_service_types(
        &self,
        app_type: &str,
        app_type_version: &str,
    ) -> Result<Vec<ServiceType>> {
        let path = format!("ApplicationTypes/{}/$/GetServiceTypes", app_type);
        self.fetch_json(&path, &[with_param("ApplicationTypeVersion", app_type_version)])
            .await
    }

    /// Decode the XML value of a service type extension
    ///
    /// The service type name must match exactly; the extension key is
    /// compared ignoring case and the first match wins. Returns `None` when
    /// no such service type or extension exists.
    pub async fn get_service_extension<T: DeserializeOwned>(
        &self,
        app_type: &str,
        app_type_version: &str,
        service_type_name: &str,
        extension_key: &str,
    ) -> Result<Option<T>> {
        let service_types = self.get_service_types(app_type, app_type_version).await?;

        let extension = service_types
            .iter()
            .map(|t| &t.service_type_description)
            .filter(|d| d.service_type_name == service_type_name)
            .find_map(|d| d.extension(extension_key));

        match extension {
            Some(extension) => Ok(Some(quick_xml::de::from_str(&extension.value)?)),
            None => Ok(None),
        }
    }

    /// Get an extension of `service`'s type as a label map
    ///
    /// The extension value is expected to be `<Labels><Label Key="..">..</Label></Labels>`.
    /// A missing extension yields an empty map.
    pub async fn get_service_extension_map(
        &self,
        service: &ServiceItem,
        app: &ApplicationItem,
        extension_key: &str,
    ) -> Result<HashMap<String, String>> {
        let labels = self
            .get_service_extension::<ServiceExtensionLabels>(
                &app.type_name,
                &app.type_version,
                &service.type_name,
                extension_key,
            )
            .await?;

        Ok(labels.unwrap_or_default().into_map())
    }
}

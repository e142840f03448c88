//! Naming service property API

use super::client::{with_param, ServiceFabricClient};
use crate::error::Result;
use crate::models::PropertiesListPage;
use std::collections::HashMap;

impl ServiceFabricClient {
    /// Check whether a name exists in the naming service
    ///
    /// Any status other than 200 counts as "does not exist".
    pub async fn name_exists(&self, name: &str) -> Result<bool> {
        let url = self.url(&format!("Names/{}", name), &[]);
        let status = self.fetch_status(&url).await?;
        Ok(status == 200)
    }

    /// Get the string-valued properties stored under a name
    ///
    /// Returns `None` when the name does not exist. Properties of any kind
    /// other than `String` are left out of the map.
    pub async fn get_properties(&self, name: &str) -> Result<Option<HashMap<String, String>>> {
        if !self.name_exists(name).await? {
            return Ok(None);
        }

        let path = format!("Names/{}/$/GetProperties", name);
        let properties = self
            .fetch_all::<PropertiesListPage>(&path, &[with_param("IncludeValues", "true")])
            .await?;

        Ok(Some(
            properties
                .into_iter()
                .filter(|p| p.is_string())
                .map(|p| (p.name, p.value.data))
                .collect(),
        ))
    }
}

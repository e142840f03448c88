//! Application API

use super::ServiceFabricClient;
use crate::error::Result;
use crate::models::{ApplicationItem, ApplicationItemsPage};

impl ServiceFabricClient {
    /// Get every application in the cluster, following continuation tokens
    pub async fn get_applications(&self) -> Result<Vec<ApplicationItem>> {
        self.fetch_all::<ApplicationItemsPage>("Applications/", &[])
            .await
    }

    /// Delete an application by id
    ///
    /// Returns `true` once the cluster has accepted the deletion.
    pub async fn delete_application(&self, application_id: &str) -> Result<bool> {
        self.post_body(&format!("Applications/{}/$/Delete", application_id), &[])
            .await?;
        Ok(true)
    }
}

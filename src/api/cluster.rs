//! Cluster health API

use super::ServiceFabricClient;
use crate::error::Result;

/// The health endpoint is only served from this API version onwards, so it
/// is pinned independently of the client's configured version.
const CLUSTER_HEALTH_API_VERSION: &str = "6.0";

impl ServiceFabricClient {
    /// Probe the cluster health endpoint
    ///
    /// Returns `true` iff the endpoint answers 200; the body is ignored.
    pub async fn get_cluster_health(&self) -> Result<bool> {
        let url = self.url_with_version("$/GetClusterHealth", CLUSTER_HEALTH_API_VERSION, &[]);
        let status = self.fetch_status(&url).await?;
        Ok(status == 200)
    }
}

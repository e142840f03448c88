//! Service API

use super::ServiceFabricClient;
use crate::error::Result;
use crate::models::{ServiceItem, ServiceItemsPage};

impl ServiceFabricClient {
    /// Get every service of an application
    ///
    /// # Arguments
    /// * `app_name` - Application id, e.g. "MyApp" for "fabric:/MyApp"
    pub async fn get_services(&self, app_name: &str) -> Result<Vec<ServiceItem>> {
        let path = format!("Applications/{}/$/GetServices", app_name);
        self.fetch_all::<ServiceItemsPage>(&path, &[]).await
    }

    /// Delete a service by id
    pub async fn delete_service(&self, service_id: &str) -> Result<bool> {
        self.post_body(&format!("Services/{}/$/Delete", service_id), &[])
            .await?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use crate::api::client::tests::client;
    use crate::error::FabricError;
    use crate::transport::Method;
    use crate::transport::mock::MockTransport;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_get_services() {
        let transport = Arc::new(
            MockTransport::new()
                .respond(
                    200,
                    r#"{"ContinuationToken":"s1","Items":[{"Id":"MyApp~Api","ServiceKind":"Stateful","TypeName":"ApiType","HasPersistedState":true}]}"#,
                )
                .respond(
                    200,
                    r#"{"ContinuationToken":"","Items":[{"Id":"MyApp~Web","ServiceKind":"Stateless","TypeName":"WebType"}]}"#,
                ),
        );

        let services = client(&transport).get_services("MyApp").await.unwrap();

        assert_eq!(services.len(), 2);
        assert!(services[0].is_stateful());
        assert!(services[0].has_persisted_state);
        assert_eq!(services[1].type_name, "WebType");
        assert_eq!(
            transport.urls(),
            vec![
                "http://localhost:19080/Applications/MyApp/$/GetServices?api-version=3.0",
                "http://localhost:19080/Applications/MyApp/$/GetServices?api-version=3.0&continue=s1",
            ]
        );
    }

    #[tokio::test]
    async fn test_delete_service() {
        let transport = Arc::new(MockTransport::new().respond(200, "{}"));

        assert!(client(&transport).delete_service("MyApp~Api").await.unwrap());

        let (method, url) = transport.requests().remove(0);
        assert_eq!(method, Method::Post);
        assert_eq!(
            url,
            "http://localhost:19080/Services/MyApp~Api/$/Delete?api-version=3.0"
        );
    }

    #[tokio::test]
    async fn test_delete_service_empty_body() {
        let transport = Arc::new(MockTransport::new().respond(200, ""));
        let err = client(&transport).delete_service("MyApp~Api").await.unwrap_err();
        assert!(matches!(err, FabricError::EmptyResponse { .. }));
    }
}

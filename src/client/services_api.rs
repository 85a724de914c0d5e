use super::{ApiClient, paths};
use crate::errors::Result;
use crate::models::{
    CategoryPayload, Configuration, MessageResponse, MoveServicePayload, RenamePayload,
    ServiceOrderPayload, ServicePayload, ServiceRecord,
};

/// `/api/services/*`
pub struct ServicesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> ServicesApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Whole category → services mapping
    pub async fn all(&self) -> Result<Configuration> {
        self.client.get("/api/services/").await
    }

    pub async fn get(&self, category: &str, name: &str) -> Result<ServiceRecord> {
        self.client.get(&paths::service(category, name)).await
    }

    pub async fn create(&self, payload: &ServicePayload) -> Result<MessageResponse> {
        self.client.post("/api/services/", payload).await
    }

    /// Update the service stored under `category`/`name`; the payload may
    /// carry a new name and category
    pub async fn update(
        &self,
        category: &str,
        name: &str,
        payload: &ServicePayload,
    ) -> Result<MessageResponse> {
        self.client
            .put(&paths::service(category, name), payload)
            .await
    }

    pub async fn delete(&self, category: &str, name: &str) -> Result<MessageResponse> {
        self.client.delete(&paths::service(category, name)).await
    }

    pub async fn reorder(&self, payload: &ServiceOrderPayload) -> Result<MessageResponse> {
        self.client.post("/api/services/reorder", payload).await
    }

    pub async fn move_service(&self, payload: &MoveServicePayload) -> Result<MessageResponse> {
        self.client.post("/api/services/move", payload).await
    }
}

/// `/api/categories/*`
pub struct CategoriesApi<'a> {
    client: &'a ApiClient,
}

impl<'a> CategoriesApi<'a> {
    pub(super) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<String>> {
        self.client.get("/api/categories/").await
    }

    pub async fn create(&self, name: &str) -> Result<MessageResponse> {
        let payload = CategoryPayload {
            name: name.to_string(),
        };
        self.client.post("/api/categories/", &payload).await
    }

    pub async fn rename(&self, name: &str, new_name: &str) -> Result<MessageResponse> {
        let payload = RenamePayload {
            new_name: new_name.to_string(),
        };
        self.client.put(&paths::category(name), &payload).await
    }

    /// Deletes the category together with its services
    pub async fn delete(&self, name: &str) -> Result<MessageResponse> {
        self.client
            .delete(&format!("{}?force=true", paths::category(name)))
            .await
    }

    /// Body is the bare ordered list of names
    pub async fn reorder(&self, order: &[String]) -> Result<MessageResponse> {
        self.client.post("/api/categories/reorder", order).await
    }
}

//! Components API.

use crate::client::CisternClient;
use crate::error::Result;
use crate::query::ListQuery;
use crate::types::{Component, ComponentResponse, CreateComponentRequest, ListComponentsResponse};

/// Components API client.
pub struct ComponentsApi {
    client: CisternClient,
}

impl ComponentsApi {
    pub(crate) fn new(client: CisternClient) -> Self {
        Self { client }
    }

    /// Create a component.
    pub async fn create(&self, request: CreateComponentRequest) -> Result<Component> {
        let response: ComponentResponse = self.client.post("components", &request).await?;
        Ok(response.component)
    }

    /// List components.
    pub async fn list(&self, query: &ListQuery) -> Result<ListComponentsResponse> {
        self.client.get_with_query("components", query).await
    }

    /// Get a component by ID.
    pub async fn get(&self, id: &str) -> Result<Component> {
        let response: ComponentResponse = self.client.get(&format!("components/{}", id)).await?;
        Ok(response.component)
    }

    /// Delete a component.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("components/{}", id), None).await
    }
}

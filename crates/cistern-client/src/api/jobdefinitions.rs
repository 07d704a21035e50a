//! Job definitions API.

use crate::client::CisternClient;
use crate::error::Result;
use crate::query::ListQuery;
use crate::types::{
    CreateJobDefinitionRequest, JobDefinition, JobDefinitionComponent, JobDefinitionResponse,
    ListComponentsResponse, ListJobDefinitionsResponse, UpdateJobDefinitionRequest,
};

/// Job definitions API client.
pub struct JobDefinitionsApi {
    client: CisternClient,
}

impl JobDefinitionsApi {
    pub(crate) fn new(client: CisternClient) -> Self {
        Self { client }
    }

    /// Create a job definition.
    pub async fn create(&self, request: CreateJobDefinitionRequest) -> Result<JobDefinition> {
        let response: JobDefinitionResponse = self.client.post("jobdefinitions", &request).await?;
        Ok(response.jobdefinition)
    }

    /// List job definitions.
    pub async fn list(&self, query: &ListQuery) -> Result<ListJobDefinitionsResponse> {
        self.client.get_with_query("jobdefinitions", query).await
    }

    /// Get a job definition by ID.
    pub async fn get(&self, id: &str) -> Result<JobDefinition> {
        let response: JobDefinitionResponse =
            self.client.get(&format!("jobdefinitions/{}", id)).await?;
        Ok(response.jobdefinition)
    }

    /// Update a job definition. Returns `None` when the server answered 204.
    pub async fn update(
        &self,
        id: &str,
        etag: &str,
        request: UpdateJobDefinitionRequest,
    ) -> Result<Option<JobDefinition>> {
        let response: Option<JobDefinitionResponse> = self
            .client
            .put(&format!("jobdefinitions/{}", id), etag, &request)
            .await?;
        Ok(response.map(|r| r.jobdefinition))
    }

    /// Delete a job definition.
    pub async fn delete(&self, id: &str, etag: &str) -> Result<()> {
        self.client
            .delete(&format!("jobdefinitions/{}", id), Some(etag))
            .await
    }

    /// List the components attached to a job definition.
    pub async fn components(&self, id: &str, query: &ListQuery) -> Result<ListComponentsResponse> {
        self.client
            .get_with_query(&format!("jobdefinitions/{}/components", id), query)
            .await
    }

    /// Attach a component to a job definition.
    pub async fn attach_component(
        &self,
        id: &str,
        component_id: &str,
    ) -> Result<JobDefinitionComponent> {
        let body = serde_json::json!({ "component_id": component_id });
        self.client
            .post(&format!("jobdefinitions/{}/components", id), &body)
            .await
    }

    /// Detach a component from a job definition.
    pub async fn unattach_component(&self, id: &str, component_id: &str) -> Result<()> {
        self.client
            .delete(
                &format!("jobdefinitions/{}/components/{}", id, component_id),
                None,
            )
            .await
    }
}

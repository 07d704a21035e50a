//! Tests API.

use crate::client::CisternClient;
use crate::error::Result;
use crate::query::ListQuery;
use crate::types::{CreateTestRequest, ListTestsResponse, Test, TestResponse};

/// Tests API client.
pub struct TestsApi {
    client: CisternClient,
}

impl TestsApi {
    pub(crate) fn new(client: CisternClient) -> Self {
        Self { client }
    }

    /// Create a test.
    pub async fn create(&self, request: CreateTestRequest) -> Result<Test> {
        let response: TestResponse = self.client.post("tests", &request).await?;
        Ok(response.test)
    }

    /// List tests.
    pub async fn list(&self, query: &ListQuery) -> Result<ListTestsResponse> {
        self.client.get_with_query("tests", query).await
    }

    /// Get a test by ID.
    pub async fn get(&self, id: &str) -> Result<Test> {
        let response: TestResponse = self.client.get(&format!("tests/{}", id)).await?;
        Ok(response.test)
    }

    /// Delete a test.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("tests/{}", id), None).await
    }
}

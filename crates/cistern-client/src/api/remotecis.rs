//! Remote CIs API.

use serde_json::Value;

use crate::client::CisternClient;
use crate::error::{Error, Result};
use crate::query::ListQuery;
use crate::types::{
    ApiSecret, CreateRemoteciRequest, ListRemotecisResponse, ListTestsResponse, Remoteci,
    RemoteciResponse, RemoteciTest, UpdateRemoteciRequest,
};

/// Remote CIs API client.
pub struct RemotecisApi {
    client: CisternClient,
}

impl RemotecisApi {
    pub(crate) fn new(client: CisternClient) -> Self {
        Self { client }
    }

    /// Register a remote CI.
    pub async fn create(&self, request: CreateRemoteciRequest) -> Result<Remoteci> {
        let response: RemoteciResponse = self.client.post("remotecis", &request).await?;
        Ok(response.remoteci)
    }

    /// List remote CIs.
    pub async fn list(&self, query: &ListQuery) -> Result<ListRemotecisResponse> {
        self.client.get_with_query("remotecis", query).await
    }

    /// Get a remote CI by ID.
    pub async fn get(&self, id: &str) -> Result<Remoteci> {
        let response: RemoteciResponse = self.client.get(&format!("remotecis/{}", id)).await?;
        Ok(response.remoteci)
    }

    /// Update a remote CI. Returns `None` when the server answered 204.
    pub async fn update(
        &self,
        id: &str,
        etag: &str,
        request: UpdateRemoteciRequest,
    ) -> Result<Option<Remoteci>> {
        let response: Option<RemoteciResponse> = self
            .client
            .put(&format!("remotecis/{}", id), etag, &request)
            .await?;
        Ok(response.map(|r| r.remoteci))
    }

    /// Delete a remote CI.
    pub async fn delete(&self, id: &str, etag: &str) -> Result<()> {
        self.client
            .delete(&format!("remotecis/{}", id), Some(etag))
            .await
    }

    /// Fetch the agent-supplied `data` blob.
    pub async fn data(&self, id: &str) -> Result<Value> {
        self.client.get(&format!("remotecis/{}/data", id)).await
    }

    /// Attach a test to a remote CI.
    pub async fn attach_test(&self, id: &str, test_id: &str) -> Result<RemoteciTest> {
        let body = serde_json::json!({ "test_id": test_id });
        self.client
            .post(&format!("remotecis/{}/tests", id), &body)
            .await
    }

    /// List the tests attached to a remote CI.
    pub async fn tests(&self, id: &str, query: &ListQuery) -> Result<ListTestsResponse> {
        self.client
            .get_with_query(&format!("remotecis/{}/tests", id), query)
            .await
    }

    /// Detach a test from a remote CI.
    pub async fn unattach_test(&self, id: &str, test_id: &str) -> Result<()> {
        self.client
            .delete(&format!("remotecis/{}/tests/{}", id, test_id), None)
            .await
    }

    /// Reset the API secret the remote CI authenticates with.
    pub async fn reset_api_secret(&self, id: &str, etag: &str) -> Result<ApiSecret> {
        let response: Option<ApiSecret> = self
            .client
            .put(
                &format!("remotecis/{}/api_secret", id),
                etag,
                &serde_json::json!({}),
            )
            .await?;
        response.ok_or_else(|| Error::MissingData("api secret reset response body".to_string()))
    }
}

//! Topics API.

use crate::client::CisternClient;
use crate::error::Result;
use crate::query::ListQuery;
use crate::types::{
    CreateTopicRequest, ListComponentsResponse, ListJobsResponse, ListTeamsResponse,
    ListTopicsResponse, Topic, TopicResponse, TopicTeam, UpdateTopicRequest,
};

/// Topics API client.
pub struct TopicsApi {
    client: CisternClient,
}

impl TopicsApi {
    pub(crate) fn new(client: CisternClient) -> Self {
        Self { client }
    }

    /// Create a topic.
    pub async fn create(&self, request: CreateTopicRequest) -> Result<Topic> {
        let response: TopicResponse = self.client.post("topics", &request).await?;
        Ok(response.topic)
    }

    /// List topics.
    pub async fn list(&self, query: &ListQuery) -> Result<ListTopicsResponse> {
        self.client.get_with_query("topics", query).await
    }

    /// Get a topic by ID.
    pub async fn get(&self, id: &str) -> Result<Topic> {
        let response: TopicResponse = self.client.get(&format!("topics/{}", id)).await?;
        Ok(response.topic)
    }

    /// Update a topic. Returns `None` when the server answered 204.
    pub async fn update(
        &self,
        id: &str,
        etag: &str,
        request: UpdateTopicRequest,
    ) -> Result<Option<Topic>> {
        let response: Option<TopicResponse> = self
            .client
            .put(&format!("topics/{}", id), etag, &request)
            .await?;
        Ok(response.map(|r| r.topic))
    }

    /// Delete a topic.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("topics/{}", id), None).await
    }

    /// Grant a team access to a topic.
    pub async fn attach_team(&self, id: &str, team_id: &str) -> Result<TopicTeam> {
        let body = serde_json::json!({ "team_id": team_id });
        self.client
            .post(&format!("topics/{}/teams", id), &body)
            .await
    }

    /// Revoke a team's access to a topic.
    pub async fn unattach_team(&self, id: &str, team_id: &str) -> Result<()> {
        self.client
            .delete(&format!("topics/{}/teams/{}", id, team_id), None)
            .await
    }

    /// List the teams attached to a topic.
    pub async fn teams(&self, id: &str, query: &ListQuery) -> Result<ListTeamsResponse> {
        self.client
            .get_with_query(&format!("topics/{}/teams", id), query)
            .await
    }

    /// List the components of a topic.
    pub async fn components(&self, id: &str, query: &ListQuery) -> Result<ListComponentsResponse> {
        self.client
            .get_with_query(&format!("topics/{}/components", id), query)
            .await
    }

    /// List the jobs that ran against one of the topic's components.
    pub async fn component_jobs(
        &self,
        id: &str,
        component_id: &str,
        query: &ListQuery,
    ) -> Result<ListJobsResponse> {
        self.client
            .get_with_query(
                &format!("topics/{}/components/{}/jobs", id, component_id),
                query,
            )
            .await
    }
}

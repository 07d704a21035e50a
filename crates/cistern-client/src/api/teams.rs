//! Teams API.

use crate::client::CisternClient;
use crate::error::Result;
use crate::query::ListQuery;
use crate::types::{
    CreateTeamRequest, ListTeamsResponse, Team, TeamResponse, UpdateTeamRequest,
};

/// Teams API client.
pub struct TeamsApi {
    client: CisternClient,
}

impl TeamsApi {
    pub(crate) fn new(client: CisternClient) -> Self {
        Self { client }
    }

    /// Create a team.
    pub async fn create(&self, request: CreateTeamRequest) -> Result<Team> {
        let response: TeamResponse = self.client.post("teams", &request).await?;
        Ok(response.team)
    }

    /// List teams.
    pub async fn list(&self, query: &ListQuery) -> Result<ListTeamsResponse> {
        self.client.get_with_query("teams", query).await
    }

    /// Get a team by ID.
    pub async fn get(&self, id: &str) -> Result<Team> {
        let response: TeamResponse = self.client.get(&format!("teams/{}", id)).await?;
        Ok(response.team)
    }

    /// Update a team. Returns `None` when the server answered 204.
    pub async fn update(
        &self,
        id: &str,
        etag: &str,
        request: UpdateTeamRequest,
    ) -> Result<Option<Team>> {
        let response: Option<TeamResponse> = self
            .client
            .put(&format!("teams/{}", id), etag, &request)
            .await?;
        Ok(response.map(|r| r.team))
    }

    /// Delete a team.
    pub async fn delete(&self, id: &str, etag: &str) -> Result<()> {
        self.client.delete(&format!("teams/{}", id), Some(etag)).await
    }
}

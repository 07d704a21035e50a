//! Job states API.

use crate::client::CisternClient;
use crate::error::Result;
use crate::query::ListQuery;
use crate::types::{CreateJobStateRequest, JobState, JobStateResponse, ListJobStatesResponse};

/// Job states API client.
pub struct JobStatesApi {
    client: CisternClient,
}

impl JobStatesApi {
    pub(crate) fn new(client: CisternClient) -> Self {
        Self { client }
    }

    /// Record a state transition for a job.
    pub async fn create(&self, request: CreateJobStateRequest) -> Result<JobState> {
        let response: JobStateResponse = self.client.post("jobstates", &request).await?;
        Ok(response.jobstate)
    }

    /// List job states.
    pub async fn list(&self, query: &ListQuery) -> Result<ListJobStatesResponse> {
        self.client.get_with_query("jobstates", query).await
    }

    /// Get a job state by ID.
    pub async fn get(&self, id: &str) -> Result<JobState> {
        let response: JobStateResponse = self.client.get(&format!("jobstates/{}", id)).await?;
        Ok(response.jobstate)
    }

    /// Delete a job state.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("jobstates/{}", id), None).await
    }
}

//! Jobs API.

use crate::client::CisternClient;
use crate::error::{Error, Result};
use crate::query::{GetQuery, ListQuery};
use crate::types::{
    CreateJobRequest, FullData, Job, JobResponse, ListJobStatesResponse, ListJobsResponse,
    ScheduleJobRequest,
};

/// Embedded relations `full_data` aggregates over.
const FULL_DATA_EMBED: &str = "jobdefinition,jobdefinition.test,remoteci";

/// Jobs API client.
pub struct JobsApi {
    client: CisternClient,
}

impl JobsApi {
    pub(crate) fn new(client: CisternClient) -> Self {
        Self { client }
    }

    /// Create a job directly, bypassing scheduling.
    pub async fn create(&self, request: CreateJobRequest) -> Result<Job> {
        let response: JobResponse = self.client.post("jobs", &request).await?;
        Ok(response.job)
    }

    /// Ask the server to allocate a job to the given remote CI.
    ///
    /// How the job is picked is entirely server-side; any non-2xx answer
    /// (including "nothing to run") surfaces as an error.
    pub async fn schedule(&self, remoteci_id: &str) -> Result<Job> {
        let body = ScheduleJobRequest {
            remoteci_id: remoteci_id.to_string(),
        };
        let response: JobResponse = self.client.post("jobs/schedule", &body).await?;
        Ok(response.job)
    }

    /// List jobs.
    pub async fn list(&self, query: &ListQuery) -> Result<ListJobsResponse> {
        self.client.get_with_query("jobs", query).await
    }

    /// Get a job by ID.
    pub async fn get(&self, id: &str) -> Result<Job> {
        let response: JobResponse = self.client.get(&format!("jobs/{}", id)).await?;
        Ok(response.job)
    }

    /// Get a job by ID with a filter or embedded relations.
    pub async fn get_with_query(&self, id: &str, query: &GetQuery) -> Result<Job> {
        let response: JobResponse = self
            .client
            .get_with_query(&format!("jobs/{}", id), query)
            .await?;
        Ok(response.job)
    }

    /// Aggregate everything an agent needs to run a job: the `data` payloads
    /// of the remote CI, the job definition's test, and its components.
    ///
    /// Fails fast: a missing embed or a failed component fetch is an error,
    /// never a partial result.
    pub async fn full_data(&self, id: &str) -> Result<FullData> {
        let query = GetQuery {
            embed: Some(FULL_DATA_EMBED.to_string()),
            ..Default::default()
        };
        let job = self.get_with_query(id, &query).await?;

        let remoteci = job
            .remoteci
            .ok_or_else(|| Error::MissingData("job embed `remoteci`".to_string()))?;
        let jobdefinition = job
            .jobdefinition
            .ok_or_else(|| Error::MissingData("job embed `jobdefinition`".to_string()))?;
        let test = jobdefinition
            .test
            .ok_or_else(|| Error::MissingData("job embed `jobdefinition.test`".to_string()))?;

        let components = self
            .client
            .jobdefinitions()
            .components(&jobdefinition.id, &ListQuery::default())
            .await?;

        Ok(FullData {
            remoteci: remoteci.data,
            test: test.data,
            components: components.components.into_iter().map(|c| c.data).collect(),
        })
    }

    /// List the state transitions of a job.
    pub async fn jobstates(&self, id: &str) -> Result<ListJobStatesResponse> {
        self.client.get(&format!("jobs/{}/jobstates", id)).await
    }

    /// Delete a job.
    pub async fn delete(&self, id: &str) -> Result<()> {
        self.client.delete(&format!("jobs/{}", id), None).await
    }
}

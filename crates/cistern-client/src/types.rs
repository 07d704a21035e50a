//! Request and response types for the Cistern API.
//!
//! These types mirror the control server's API contract. Every record
//! carries an `id`, an `etag` (the optimistic-concurrency token required on
//! update and delete) and `created_at`/`updated_at` timestamps, which are
//! opaque server strings. Server responses are wrapped
//! (`{"user": {...}}`, `{"users": [...], "_meta": {"count": N}}`) and the
//! wrapper types here mirror that.
//!
//! Request types model each resource's optional fields explicitly: unset
//! fields are omitted from the serialized body.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Count metadata attached to list responses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListMeta {
    /// Total number of records matching the query.
    pub count: u64,
}

// ─────────────────────────────────────────────────────────────────────────────
// Jobs
// ─────────────────────────────────────────────────────────────────────────────

/// A job: one run of a job definition on a remote CI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    /// Whether this job is a recheck of a previous run.
    #[serde(default)]
    pub recheck: bool,
    /// Current lifecycle status (server enum, e.g. `new`, `running`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobdefinition_id: Option<String>,
    pub remoteci_id: String,
    pub team_id: String,
    pub etag: String,
    pub created_at: String,
    pub updated_at: String,
    /// Present only when requested via `embed=jobdefinition`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jobdefinition: Option<JobDefinitionEmbed>,
    /// Present only when requested via `embed=remoteci`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remoteci: Option<RemoteciEmbed>,
}

/// Job definition as embedded in a job response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDefinitionEmbed {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Present only with `embed=jobdefinition.test`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<TestEmbed>,
}

/// Test as embedded in a job definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestEmbed {
    pub id: String,
    #[serde(default)]
    pub data: Value,
}

/// Remote CI as embedded in a job response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteciEmbed {
    pub id: String,
    #[serde(default)]
    pub data: Value,
}

/// Request to create a job.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateJobRequest {
    pub recheck: bool,
    pub remoteci_id: String,
    pub team_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobdefinition_id: Option<String>,
}

/// Request body for `jobs/schedule`.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleJobRequest {
    pub remoteci_id: String,
}

/// Aggregated data an agent needs to run a job: the free-form `data`
/// payloads of the remote CI, the test, and the job definition's components.
#[derive(Debug, Clone, Serialize)]
pub struct FullData {
    pub remoteci: Value,
    pub test: Value,
    pub components: Vec<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobResponse {
    pub job: Job,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListJobsResponse {
    pub jobs: Vec<Job>,
    #[serde(rename = "_meta", default)]
    pub meta: Option<ListMeta>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Job states
// ─────────────────────────────────────────────────────────────────────────────

/// A job state transition (`new`, `pre-run`, `running`, `post-run`,
/// `success`, `failure`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobState {
    pub id: String,
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub job_id: String,
    pub team_id: String,
    pub etag: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Request to create a job state.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateJobStateRequest {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub job_id: String,
    pub team_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobStateResponse {
    pub jobstate: JobState,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListJobStatesResponse {
    pub jobstates: Vec<JobState>,
    #[serde(rename = "_meta", default)]
    pub meta: Option<ListMeta>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Remote CIs
// ─────────────────────────────────────────────────────────────────────────────

/// A registered client agent that executes jobs against a device under test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Remoteci {
    pub id: String,
    pub name: String,
    pub team_id: String,
    /// Agent-supplied free-form configuration blob.
    #[serde(default)]
    pub data: Value,
    /// `active` or `inactive` (server enum, not client-tracked state).
    pub state: String,
    #[serde(default)]
    pub allow_upgrade_job: bool,
    pub etag: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Request to create a remote CI.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateRemoteciRequest {
    pub name: String,
    pub team_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_upgrade_job: Option<bool>,
}

/// Request to update a remote CI. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateRemoteciRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_upgrade_job: Option<bool>,
}

/// Result of an API secret reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSecret {
    pub id: String,
    pub api_secret: String,
    pub etag: String,
}

/// A test attached to a remote CI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteciTest {
    pub remoteci_id: String,
    pub test_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteciResponse {
    pub remoteci: Remoteci,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListRemotecisResponse {
    pub remotecis: Vec<Remoteci>,
    #[serde(rename = "_meta", default)]
    pub meta: Option<ListMeta>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Users
// ─────────────────────────────────────────────────────────────────────────────

/// A user account. The password is write-only and never echoed back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// `admin` or `user`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub team_id: String,
    /// `active` or `inactive`.
    pub state: String,
    pub etag: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Request to create a user.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    pub team_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

/// Request to update a user. Unset fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUserRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListUsersResponse {
    pub users: Vec<User>,
    #[serde(rename = "_meta", default)]
    pub meta: Option<ListMeta>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Teams
// ─────────────────────────────────────────────────────────────────────────────

/// A team owning users, remote CIs and jobs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    pub etag: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Request to create a team.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTeamRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Request to update a team.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTeamRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamResponse {
    pub team: Team,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListTeamsResponse {
    pub teams: Vec<Team>,
    #[serde(rename = "_meta", default)]
    pub meta: Option<ListMeta>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

/// A test definition carrying the payload agents use to run it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Test {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
    pub etag: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Request to create a test.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTestRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TestResponse {
    pub test: Test,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListTestsResponse {
    pub tests: Vec<Test>,
    #[serde(rename = "_meta", default)]
    pub meta: Option<ListMeta>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Topics
// ─────────────────────────────────────────────────────────────────────────────

/// A topic: a product stream grouping components and job definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub etag: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Request to create a topic.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTopicRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Request to update a topic.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTopicRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A team attached to a topic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicTeam {
    pub topic_id: String,
    pub team_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopicResponse {
    pub topic: Topic,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListTopicsResponse {
    pub topics: Vec<Topic>,
    #[serde(rename = "_meta", default)]
    pub meta: Option<ListMeta>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Job definitions
// ─────────────────────────────────────────────────────────────────────────────

/// A template describing a test and its components, from which jobs are
/// instantiated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDefinition {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    pub etag: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Request to create a job definition.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateJobDefinitionRequest {
    pub name: String,
    pub topic_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Request to update a job definition.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateJobDefinitionRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

/// A component attached to a job definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobDefinitionComponent {
    pub jobdefinition_id: String,
    pub component_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobDefinitionResponse {
    pub jobdefinition: JobDefinition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListJobDefinitionsResponse {
    pub jobdefinitions: Vec<JobDefinition>,
    #[serde(rename = "_meta", default)]
    pub meta: Option<ListMeta>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Components
// ─────────────────────────────────────────────────────────────────────────────

/// A versioned artifact (compose, package set, git ref…) a job runs against.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    pub name: String,
    /// Component type (`kind` here; `type` on the wire).
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topic_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub data: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canonical_project_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
    pub etag: String,
    pub created_at: String,
    pub updated_at: String,
}

/// Request to create a component.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateComponentRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub topic_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_project_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ComponentResponse {
    pub component: Component,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListComponentsResponse {
    pub components: Vec<Component>,
    #[serde(rename = "_meta", default)]
    pub meta: Option<ListMeta>,
}

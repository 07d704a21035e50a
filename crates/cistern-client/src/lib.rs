//! HTTP client SDK for the Cistern CI tracking service.
//!
//! This crate provides a typed client for the Cistern control server's REST
//! API: jobs, job definitions, remote CIs, users, teams, tests, topics,
//! job states and components.
//!
//! # Example
//!
//! ```no_run
//! use cistern_client::{CisternClient, ListQuery, Result};
//!
//! # async fn example() -> Result<()> {
//! // Create a client
//! let client = CisternClient::builder()
//!     .base_url("http://localhost:5000")
//!     .basic_auth("admin", "secret")
//!     .build()?;
//!
//! // List remote CIs
//! let remotecis = client.remotecis().list(&ListQuery::default()).await?;
//! for remoteci in remotecis.remotecis {
//!     println!("{} ({})", remoteci.name, remoteci.state);
//! }
//!
//! // Schedule a job on a remote CI
//! let job = client.jobs().schedule("8d0a8224").await?;
//! println!("scheduled job {}", job.id);
//! # Ok(())
//! # }
//! ```
//!
//! # API coverage
//!
//! Every resource exposes `create`, `get`, `list`, `update`, `delete` where
//! the server supports them, plus the resource's custom endpoints:
//!
//! - **Jobs**: schedule, full-data aggregation, job states
//! - **Remote CIs**: agent data, test attach/detach, API secret reset
//! - **Topics**: team attach/detach, components, jobs per component
//! - **Job definitions**: component attach/detach
//!
//! Mutating calls carry the record's `etag` as an `If-Match` precondition;
//! a stale etag surfaces as [`Error::Api`] with a 409/412 status
//! (see [`Error::is_conflict`]).

pub mod api;
pub mod client;
pub mod error;
pub mod query;
pub mod types;

pub use client::{CisternClient, ClientBuilder};
pub use error::{Error, Result};
pub use query::{GetQuery, ListQuery};
pub use types::*;

pub use api::{
    ComponentsApi, JobDefinitionsApi, JobStatesApi, JobsApi, RemotecisApi, TeamsApi, TestsApi,
    TopicsApi, UsersApi,
};

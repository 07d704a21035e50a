//! API endpoint implementations.

mod components;
mod jobdefinitions;
mod jobs;
mod jobstates;
mod remotecis;
mod teams;
mod tests;
mod topics;
mod users;

pub use components::ComponentsApi;
pub use jobdefinitions::JobDefinitionsApi;
pub use jobs::JobsApi;
pub use jobstates::JobStatesApi;
pub use remotecis::RemotecisApi;
pub use teams::TeamsApi;
pub use tests::TestsApi;
pub use topics::TopicsApi;
pub use users::UsersApi;

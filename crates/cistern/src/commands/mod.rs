//! CLI command handlers.

pub mod component;
pub mod job;
pub mod jobdefinition;
pub mod jobstate;
pub mod remoteci;
pub mod team;
pub mod topic;
pub mod user;

use anyhow::{Context as _, Result};
use clap::Args;
use cistern_client::{CisternClient, ListQuery};

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Control server URL to connect to.
    pub server_url: String,
    /// Login for HTTP basic auth.
    pub login: Option<String>,
    /// Password for HTTP basic auth.
    pub password: Option<String>,
    /// Output format.
    pub format: OutputFormat,
    /// Verbose output enabled.
    pub verbose: bool,
}

impl Context {
    /// Build an SDK client from the connection settings.
    pub fn client(&self) -> Result<CisternClient> {
        let mut builder = CisternClient::builder().base_url(&self.server_url);
        if let (Some(login), Some(password)) = (&self.login, &self.password) {
            builder = builder.basic_auth(login, password);
        }
        builder
            .build()
            .with_context(|| format!("cannot reach {}", self.server_url))
    }
}

/// Listing flags shared by every `list` subcommand.
#[derive(Args, Debug)]
pub struct ListOptions {
    /// Field to sort by, `-` prefix for descending
    #[arg(long, default_value = "-created_at")]
    pub sort: String,

    /// Maximum number of rows to return
    #[arg(long, default_value_t = 50)]
    pub limit: u32,

    /// Number of rows to skip
    #[arg(long)]
    pub offset: Option<u32>,

    /// Filter criteria, e.g. `name:foo`
    #[arg(long = "where")]
    pub filter: Option<String>,

    /// Show all columns, including etag
    #[arg(long)]
    pub long: bool,
}

impl ListOptions {
    /// Convert the flags into an SDK query.
    pub fn query(&self) -> ListQuery {
        ListQuery {
            sort: Some(self.sort.clone()),
            limit: Some(self.limit),
            offset: self.offset,
            filter: self.filter.clone(),
            embed: None,
        }
    }
}

/// Map an `--active`/`--no-active` pair onto the server's state enum.
/// Used on create, where active is the default.
pub(crate) fn state_string(no_active: bool) -> &'static str {
    if no_active {
        "inactive"
    } else {
        "active"
    }
}

/// Tri-state mapping for update commands: neither flag means "don't touch".
pub(crate) fn state_option(active: bool, no_active: bool) -> Option<String> {
    if active {
        Some("active".to_string())
    } else if no_active {
        Some("inactive".to_string())
    } else {
        None
    }
}

/// Parse a `--data` flag value as a JSON document.
pub(crate) fn parse_json_data(raw: &str) -> Result<serde_json::Value> {
    serde_json::from_str(raw).with_context(|| format!("--data is not valid JSON: {}", raw))
}

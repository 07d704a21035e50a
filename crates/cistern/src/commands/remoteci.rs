//! Remote CI management commands.

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use cistern_client::{CreateRemoteciRequest, ListQuery, UpdateRemoteciRequest};
use console::Style;
use tracing::debug;

use super::{parse_json_data, state_option, state_string, Context, ListOptions};
use crate::output;

const TABLE_HEADERS: &[&str] = &[
    "id",
    "name",
    "team_id",
    "state",
    "allow_upgrade_job",
    "etag",
    "created_at",
    "updated_at",
];

const TEST_HEADERS: &[&str] = &["id", "name", "team_id", "etag", "created_at", "updated_at"];

/// Arguments for the remoteci command.
#[derive(Args, Debug)]
pub struct RemoteciArgs {
    #[command(subcommand)]
    pub command: RemoteciCommand,
}

#[derive(Subcommand, Debug)]
pub enum RemoteciCommand {
    /// List all remote CIs
    List {
        #[command(flatten)]
        opts: ListOptions,
    },

    /// Register a remote CI
    Create {
        /// Remote CI name
        #[arg(long)]
        name: String,

        /// Owning team; defaults to the team of the authenticated user
        #[arg(long)]
        team_id: Option<String>,

        /// JSON configuration blob for the agent
        #[arg(long, default_value = "{}")]
        data: String,

        /// Register the remote CI active (default)
        #[arg(long, overrides_with = "no_active")]
        active: bool,

        /// Register the remote CI inactive
        #[arg(long)]
        no_active: bool,

        /// Allow this remote CI to run upgrade jobs
        #[arg(long, overrides_with = "no_allow_upgrade_job")]
        allow_upgrade_job: bool,

        /// Disallow upgrade jobs (default)
        #[arg(long)]
        no_allow_upgrade_job: bool,
    },

    /// Show a remote CI
    Show {
        /// Remote CI ID
        id: String,
    },

    /// Update a remote CI
    Update {
        /// Remote CI ID
        id: String,

        /// Entity tag from the current record
        #[arg(long)]
        etag: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New owning team
        #[arg(long)]
        team_id: Option<String>,

        /// New JSON configuration blob
        #[arg(long)]
        data: Option<String>,

        /// Mark the remote CI active
        #[arg(long, overrides_with = "no_active")]
        active: bool,

        /// Mark the remote CI inactive
        #[arg(long)]
        no_active: bool,

        /// Allow upgrade jobs
        #[arg(long, overrides_with = "no_allow_upgrade_job")]
        allow_upgrade_job: bool,

        /// Disallow upgrade jobs
        #[arg(long)]
        no_allow_upgrade_job: bool,
    },

    /// Delete a remote CI
    Delete {
        /// Remote CI ID
        id: String,

        /// Entity tag from the current record
        #[arg(long)]
        etag: String,
    },

    /// Retrieve the agent data blob of a remote CI
    GetData {
        /// Remote CI ID
        id: String,

        /// Comma-separated keys to project out of the blob
        #[arg(long)]
        keys: Option<String>,
    },

    /// Attach a test to a remote CI
    AttachTest {
        /// Remote CI ID
        id: String,

        /// Test to attach
        #[arg(long)]
        test_id: String,
    },

    /// List tests attached to a remote CI
    ListTests {
        /// Remote CI ID
        id: String,

        #[command(flatten)]
        opts: ListOptions,
    },

    /// Detach a test from a remote CI
    UnattachTest {
        /// Remote CI ID
        id: String,

        /// Test to detach
        #[arg(long)]
        test_id: String,
    },

    /// Reset the API secret of a remote CI
    ResetApiSecret {
        /// Remote CI ID
        id: String,

        /// Entity tag from the current record
        #[arg(long)]
        etag: String,
    },
}

/// Run the remoteci command.
pub async fn run(args: RemoteciArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    match args.command {
        RemoteciCommand::List { opts } => {
            let remotecis = client.remotecis().list(&opts.query()).await?;
            output::print_records(&remotecis.remotecis, TABLE_HEADERS, ctx.format, opts.long)?;
        }
        RemoteciCommand::Create {
            name,
            team_id,
            data,
            active: _,
            no_active,
            allow_upgrade_job,
            no_allow_upgrade_job: _,
        } => {
            let team_id = match team_id {
                Some(team_id) => team_id,
                None => own_team_id(ctx, &client).await?,
            };
            let request = CreateRemoteciRequest {
                name,
                team_id,
                data: Some(parse_json_data(&data)?),
                state: Some(state_string(no_active).to_string()),
                allow_upgrade_job: Some(allow_upgrade_job),
            };
            let remoteci = client.remotecis().create(request).await?;
            output::print_record(&remoteci, TABLE_HEADERS, ctx.format)?;
        }
        RemoteciCommand::Show { id } => {
            let remoteci = client.remotecis().get(&id).await?;
            output::print_record(&remoteci, TABLE_HEADERS, ctx.format)?;
        }
        RemoteciCommand::Update {
            id,
            etag,
            name,
            team_id,
            data,
            active,
            no_active,
            allow_upgrade_job,
            no_allow_upgrade_job,
        } => {
            let request = UpdateRemoteciRequest {
                name,
                team_id,
                data: data.as_deref().map(parse_json_data).transpose()?,
                state: state_option(active, no_active),
                allow_upgrade_job: if allow_upgrade_job {
                    Some(true)
                } else if no_allow_upgrade_job {
                    Some(false)
                } else {
                    None
                },
            };
            match client.remotecis().update(&id, &etag, request).await? {
                Some(remoteci) => output::print_record(&remoteci, TABLE_HEADERS, ctx.format)?,
                None => output::print_message(&id, "Remote CI updated.")?,
            }
        }
        RemoteciCommand::Delete { id, etag } => {
            client.remotecis().delete(&id, &etag).await?;
            output::print_message(&id, "Remote CI deleted.")?;
        }
        RemoteciCommand::GetData { id, keys } => {
            let data = client.remotecis().data(&id).await?;
            let keys: Option<Vec<String>> =
                keys.map(|k| k.split(',').map(|s| s.trim().to_string()).collect());
            output::print_object(&data, keys.as_deref(), ctx.format)?;
        }
        RemoteciCommand::AttachTest { id, test_id } => {
            let attached = client.remotecis().attach_test(&id, &test_id).await?;
            output::print_record(&attached, &["remoteci_id", "test_id"], ctx.format)?;
        }
        RemoteciCommand::ListTests { id, opts } => {
            let tests = client.remotecis().tests(&id, &opts.query()).await?;
            output::print_records(&tests.tests, TEST_HEADERS, ctx.format, opts.long)?;
        }
        RemoteciCommand::UnattachTest { id, test_id } => {
            client.remotecis().unattach_test(&id, &test_id).await?;
            output::print_message(&id, "Test unattached from Remote CI.")?;
        }
        RemoteciCommand::ResetApiSecret { id, etag } => {
            let secret = client.remotecis().reset_api_secret(&id, &etag).await?;
            output::print_record(&secret, &["id", "api_secret", "etag"], ctx.format)?;
        }
    }

    Ok(())
}

/// Look up the team of the authenticated user.
async fn own_team_id(ctx: &Context, client: &cistern_client::CisternClient) -> Result<String> {
    let login = ctx
        .login
        .as_ref()
        .ok_or_else(|| anyhow!("--team-id is required when no login is configured"))?;

    debug!(login, "resolving team from authenticated user");
    let users = client
        .users()
        .list(&ListQuery {
            filter: Some(format!("name:{}", login)),
            ..Default::default()
        })
        .await?;

    let team_id = users
        .users
        .first()
        .map(|u| u.team_id.clone())
        .ok_or_else(|| anyhow!("no user named {}", login))?;

    if ctx.verbose {
        let dim = Style::new().dim();
        println!(
            "{}",
            dim.apply_to(format!("Using team {} from user {}", team_id, login))
        );
    }

    Ok(team_id)
}

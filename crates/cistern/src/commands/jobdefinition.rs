//! Job definition management commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use cistern_client::{CreateJobDefinitionRequest, UpdateJobDefinitionRequest};

use super::{Context, ListOptions};
use crate::output;

const TABLE_HEADERS: &[&str] = &[
    "id",
    "name",
    "topic_id",
    "test_id",
    "priority",
    "active",
    "comment",
    "etag",
    "created_at",
    "updated_at",
];

const COMPONENT_HEADERS: &[&str] = &[
    "id",
    "name",
    "type",
    "topic_id",
    "url",
    "etag",
    "created_at",
    "updated_at",
];

/// Arguments for the jobdefinition command.
#[derive(Args, Debug)]
pub struct JobDefinitionArgs {
    #[command(subcommand)]
    pub command: JobDefinitionCommand,
}

#[derive(Subcommand, Debug)]
pub enum JobDefinitionCommand {
    /// List all job definitions
    List {
        #[command(flatten)]
        opts: ListOptions,
    },

    /// Create a job definition
    Create {
        /// Job definition name
        #[arg(long)]
        name: String,

        /// Topic the definition belongs to
        #[arg(long)]
        topic_id: String,

        /// Test the definition runs
        #[arg(long)]
        test_id: Option<String>,

        /// Scheduling priority
        #[arg(long)]
        priority: Option<i64>,
    },

    /// Show a job definition
    Show {
        /// Job definition ID
        id: String,
    },

    /// Update a job definition
    Update {
        /// Job definition ID
        id: String,

        /// Entity tag from the current record
        #[arg(long)]
        etag: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New scheduling priority
        #[arg(long)]
        priority: Option<i64>,

        /// Mark the definition active
        #[arg(long, overrides_with = "no_active")]
        active: bool,

        /// Mark the definition inactive
        #[arg(long)]
        no_active: bool,

        /// Comment on the change
        #[arg(long)]
        comment: Option<String>,
    },

    /// Delete a job definition
    Delete {
        /// Job definition ID
        id: String,

        /// Entity tag from the current record
        #[arg(long)]
        etag: String,
    },

    /// List the components attached to a job definition
    ListComponents {
        /// Job definition ID
        id: String,

        #[command(flatten)]
        opts: ListOptions,
    },

    /// Attach a component to a job definition
    AttachComponent {
        /// Job definition ID
        id: String,

        /// Component to attach
        #[arg(long)]
        component_id: String,
    },

    /// Detach a component from a job definition
    UnattachComponent {
        /// Job definition ID
        id: String,

        /// Component to detach
        #[arg(long)]
        component_id: String,
    },
}

/// Run the jobdefinition command.
pub async fn run(args: JobDefinitionArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    match args.command {
        JobDefinitionCommand::List { opts } => {
            let definitions = client.jobdefinitions().list(&opts.query()).await?;
            output::print_records(
                &definitions.jobdefinitions,
                TABLE_HEADERS,
                ctx.format,
                opts.long,
            )?;
        }
        JobDefinitionCommand::Create {
            name,
            topic_id,
            test_id,
            priority,
        } => {
            let request = CreateJobDefinitionRequest {
                name,
                topic_id,
                test_id,
                priority,
                active: None,
            };
            let definition = client.jobdefinitions().create(request).await?;
            output::print_record(&definition, TABLE_HEADERS, ctx.format)?;
        }
        JobDefinitionCommand::Show { id } => {
            let definition = client.jobdefinitions().get(&id).await?;
            output::print_record(&definition, TABLE_HEADERS, ctx.format)?;
        }
        JobDefinitionCommand::Update {
            id,
            etag,
            name,
            priority,
            active,
            no_active,
            comment,
        } => {
            let request = UpdateJobDefinitionRequest {
                name,
                priority,
                active: if active {
                    Some(true)
                } else if no_active {
                    Some(false)
                } else {
                    None
                },
                comment,
            };
            match client.jobdefinitions().update(&id, &etag, request).await? {
                Some(definition) => output::print_record(&definition, TABLE_HEADERS, ctx.format)?,
                None => output::print_message(&id, "Job definition updated.")?,
            }
        }
        JobDefinitionCommand::Delete { id, etag } => {
            client.jobdefinitions().delete(&id, &etag).await?;
            output::print_message(&id, "Job definition deleted.")?;
        }
        JobDefinitionCommand::ListComponents { id, opts } => {
            let components = client.jobdefinitions().components(&id, &opts.query()).await?;
            output::print_records(&components.components, COMPONENT_HEADERS, ctx.format, opts.long)?;
        }
        JobDefinitionCommand::AttachComponent { id, component_id } => {
            let attached = client
                .jobdefinitions()
                .attach_component(&id, &component_id)
                .await?;
            output::print_record(&attached, &["jobdefinition_id", "component_id"], ctx.format)?;
        }
        JobDefinitionCommand::UnattachComponent { id, component_id } => {
            client
                .jobdefinitions()
                .unattach_component(&id, &component_id)
                .await?;
            output::print_message(&id, "Component unattached from job definition.")?;
        }
    }

    Ok(())
}

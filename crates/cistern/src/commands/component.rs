//! Component management commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use cistern_client::CreateComponentRequest;

use super::{parse_json_data, Context, ListOptions};
use crate::output;

const TABLE_HEADERS: &[&str] = &[
    "id",
    "name",
    "type",
    "topic_id",
    "url",
    "title",
    "sha",
    "etag",
    "created_at",
    "updated_at",
];

/// Arguments for the component command.
#[derive(Args, Debug)]
pub struct ComponentArgs {
    #[command(subcommand)]
    pub command: ComponentCommand,
}

#[derive(Subcommand, Debug)]
pub enum ComponentCommand {
    /// List all components
    List {
        #[command(flatten)]
        opts: ListOptions,
    },

    /// Create a component
    Create {
        /// Component name
        #[arg(long)]
        name: String,

        /// Component type, e.g. `git_commit` or `compose`
        #[arg(long = "type")]
        kind: String,

        /// Topic the component belongs to
        #[arg(long)]
        topic_id: String,

        /// Where the artifact lives
        #[arg(long)]
        url: Option<String>,

        /// JSON payload describing the artifact
        #[arg(long)]
        data: Option<String>,

        /// Human-readable title
        #[arg(long)]
        title: Option<String>,

        /// Changelog or commit message
        #[arg(long)]
        message: Option<String>,

        /// Canonical upstream project name
        #[arg(long)]
        canonical_project_name: Option<String>,

        /// Source revision
        #[arg(long)]
        sha: Option<String>,
    },

    /// Show a component
    Show {
        /// Component ID
        id: String,
    },

    /// Delete a component
    Delete {
        /// Component ID
        id: String,
    },
}

/// Run the component command.
pub async fn run(args: ComponentArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    match args.command {
        ComponentCommand::List { opts } => {
            let components = client.components().list(&opts.query()).await?;
            output::print_records(&components.components, TABLE_HEADERS, ctx.format, opts.long)?;
        }
        ComponentCommand::Create {
            name,
            kind,
            topic_id,
            url,
            data,
            title,
            message,
            canonical_project_name,
            sha,
        } => {
            let request = CreateComponentRequest {
                name,
                kind,
                topic_id,
                url,
                data: data.as_deref().map(parse_json_data).transpose()?,
                title,
                message,
                canonical_project_name,
                sha,
            };
            let component = client.components().create(request).await?;
            output::print_record(&component, TABLE_HEADERS, ctx.format)?;
        }
        ComponentCommand::Show { id } => {
            let component = client.components().get(&id).await?;
            output::print_record(&component, TABLE_HEADERS, ctx.format)?;
        }
        ComponentCommand::Delete { id } => {
            client.components().delete(&id).await?;
            output::print_message(&id, "Component deleted.")?;
        }
    }

    Ok(())
}

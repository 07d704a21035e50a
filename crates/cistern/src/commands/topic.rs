//! Topic management commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use cistern_client::{CreateTopicRequest, UpdateTopicRequest};

use super::{Context, ListOptions};
use crate::output;

const TABLE_HEADERS: &[&str] = &["id", "name", "label", "etag", "created_at", "updated_at"];

const TEAM_HEADERS: &[&str] = &["id", "name", "country", "etag", "created_at", "updated_at"];

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

const JOB_HEADERS: &[&str] = &[
    "id",
    "recheck",
    "status",
    "jobdefinition_id",
    "remoteci_id",
    "team_id",
    "etag",
    "created_at",
    "updated_at",
];

/// Arguments for the topic command.
#[derive(Args, Debug)]
pub struct TopicArgs {
    #[command(subcommand)]
    pub command: TopicCommand,
}

#[derive(Subcommand, Debug)]
pub enum TopicCommand {
    /// List all topics
    List {
        #[command(flatten)]
        opts: ListOptions,
    },

    /// Create a topic
    Create {
        /// Topic name
        #[arg(long)]
        name: String,

        /// Display label
        #[arg(long)]
        label: Option<String>,
    },

    /// Show a topic
    Show {
        /// Topic ID
        id: String,
    },

    /// Update a topic
    Update {
        /// Topic ID
        id: String,

        /// Entity tag from the current record
        #[arg(long)]
        etag: String,

        /// New topic name
        #[arg(long)]
        name: Option<String>,

        /// New display label
        #[arg(long)]
        label: Option<String>,
    },

    /// Delete a topic
    Delete {
        /// Topic ID
        id: String,
    },

    /// Grant a team access to a topic
    AttachTeam {
        /// Topic ID
        id: String,

        /// Team to grant access to
        #[arg(long)]
        team_id: String,
    },

    /// Revoke a team's access to a topic
    UnattachTeam {
        /// Topic ID
        id: String,

        /// Team to revoke access from
        #[arg(long)]
        team_id: String,
    },

    /// List the teams attached to a topic
    ListTeams {
        /// Topic ID
        id: String,

        #[command(flatten)]
        opts: ListOptions,
    },

    /// List the components of a topic
    ListComponents {
        /// Topic ID
        id: String,

        #[command(flatten)]
        opts: ListOptions,
    },

    /// List the jobs that ran against a component of a topic
    ComponentJobs {
        /// Topic ID
        id: String,

        /// Component whose jobs to list
        #[arg(long)]
        component_id: String,

        #[command(flatten)]
        opts: ListOptions,
    },
}

/// Run the topic command.
pub async fn run(args: TopicArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    match args.command {
        TopicCommand::List { opts } => {
            let topics = client.topics().list(&opts.query()).await?;
            output::print_records(&topics.topics, TABLE_HEADERS, ctx.format, opts.long)?;
        }
        TopicCommand::Create { name, label } => {
            let request = CreateTopicRequest { name, label };
            let topic = client.topics().create(request).await?;
            output::print_record(&topic, TABLE_HEADERS, ctx.format)?;
        }
        TopicCommand::Show { id } => {
            let topic = client.topics().get(&id).await?;
            output::print_record(&topic, TABLE_HEADERS, ctx.format)?;
        }
        TopicCommand::Update {
            id,
            etag,
            name,
            label,
        } => {
            let request = UpdateTopicRequest { name, label };
            match client.topics().update(&id, &etag, request).await? {
                Some(topic) => output::print_record(&topic, TABLE_HEADERS, ctx.format)?,
                None => output::print_message(&id, "Topic updated.")?,
            }
        }
        TopicCommand::Delete { id } => {
            client.topics().delete(&id).await?;
            output::print_message(&id, "Topic deleted.")?;
        }
        TopicCommand::AttachTeam { id, team_id } => {
            let attached = client.topics().attach_team(&id, &team_id).await?;
            output::print_record(&attached, &["topic_id", "team_id"], ctx.format)?;
        }
        TopicCommand::UnattachTeam { id, team_id } => {
            client.topics().unattach_team(&id, &team_id).await?;
            output::print_message(&id, "Team unattached from topic.")?;
        }
        TopicCommand::ListTeams { id, opts } => {
            let teams = client.topics().teams(&id, &opts.query()).await?;
            output::print_records(&teams.teams, TEAM_HEADERS, ctx.format, opts.long)?;
        }
        TopicCommand::ListComponents { id, opts } => {
            let components = client.topics().components(&id, &opts.query()).await?;
            output::print_records(&components.components, COMPONENT_HEADERS, ctx.format, opts.long)?;
        }
        TopicCommand::ComponentJobs {
            id,
            component_id,
            opts,
        } => {
            let jobs = client
                .topics()
                .component_jobs(&id, &component_id, &opts.query())
                .await?;
            output::print_records(&jobs.jobs, JOB_HEADERS, ctx.format, opts.long)?;
        }
    }

    Ok(())
}

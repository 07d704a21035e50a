//! Job state commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use cistern_client::CreateJobStateRequest;

use super::{Context, ListOptions};
use crate::output;

const TABLE_HEADERS: &[&str] = &[
    "id",
    "status",
    "comment",
    "job_id",
    "team_id",
    "etag",
    "created_at",
    "updated_at",
];

/// Arguments for the jobstate command.
#[derive(Args, Debug)]
pub struct JobStateArgs {
    #[command(subcommand)]
    pub command: JobStateCommand,
}

#[derive(Subcommand, Debug)]
pub enum JobStateCommand {
    /// List all job states
    List {
        #[command(flatten)]
        opts: ListOptions,
    },

    /// Record a state transition for a job
    Create {
        /// New status: new, pre-run, running, post-run, success, failure
        #[arg(long)]
        status: String,

        /// Human-readable comment on the transition
        #[arg(long)]
        comment: Option<String>,

        /// Job the transition belongs to
        #[arg(long)]
        job_id: String,

        /// Owning team
        #[arg(long)]
        team_id: String,
    },

    /// Show a job state
    Show {
        /// Job state ID
        id: String,
    },

    /// Delete a job state
    Delete {
        /// Job state ID
        id: String,
    },
}

/// Run the jobstate command.
pub async fn run(args: JobStateArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    match args.command {
        JobStateCommand::List { opts } => {
            let states = client.jobstates().list(&opts.query()).await?;
            output::print_records(&states.jobstates, TABLE_HEADERS, ctx.format, opts.long)?;
        }
        JobStateCommand::Create {
            status,
            comment,
            job_id,
            team_id,
        } => {
            let request = CreateJobStateRequest {
                status,
                comment,
                job_id,
                team_id,
            };
            let state = client.jobstates().create(request).await?;
            output::print_record(&state, TABLE_HEADERS, ctx.format)?;
        }
        JobStateCommand::Show { id } => {
            let state = client.jobstates().get(&id).await?;
            output::print_record(&state, TABLE_HEADERS, ctx.format)?;
        }
        JobStateCommand::Delete { id } => {
            client.jobstates().delete(&id).await?;
            output::print_message(&id, "Job state deleted.")?;
        }
    }

    Ok(())
}

//! Job management commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use cistern_client::CreateJobRequest;

use super::{Context, ListOptions};
use crate::output;

const TABLE_HEADERS: &[&str] = &[
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

const JOBSTATE_HEADERS: &[&str] = &[
    "id",
    "status",
    "comment",
    "job_id",
    "team_id",
    "etag",
    "created_at",
    "updated_at",
];

/// Arguments for the job command.
#[derive(Args, Debug)]
pub struct JobArgs {
    #[command(subcommand)]
    pub command: JobCommand,
}

#[derive(Subcommand, Debug)]
pub enum JobCommand {
    /// List all jobs
    List {
        #[command(flatten)]
        opts: ListOptions,
    },

    /// Create a job directly, bypassing scheduling
    Create {
        /// Remote CI to run the job
        #[arg(long)]
        remoteci_id: String,

        /// Owning team
        #[arg(long)]
        team_id: String,

        /// Job definition to instantiate
        #[arg(long)]
        jobdefinition_id: Option<String>,

        /// Mark the job as a recheck of a previous run
        #[arg(long)]
        recheck: bool,
    },

    /// Ask the server to schedule a job on a remote CI
    Schedule {
        /// Remote CI asking for work
        #[arg(long)]
        remoteci_id: String,
    },

    /// Show a job
    Show {
        /// Job ID
        id: String,
    },

    /// Print the aggregated data an agent needs to run a job
    FullData {
        /// Job ID
        id: String,
    },

    /// List the state transitions of a job
    Jobstates {
        /// Job ID
        id: String,

        /// Show all columns, including etag
        #[arg(long)]
        long: bool,
    },

    /// Delete a job
    Delete {
        /// Job ID
        id: String,
    },
}

/// Run the job command.
pub async fn run(args: JobArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    match args.command {
        JobCommand::List { opts } => {
            let jobs = client.jobs().list(&opts.query()).await?;
            output::print_records(&jobs.jobs, TABLE_HEADERS, ctx.format, opts.long)?;
        }
        JobCommand::Create {
            remoteci_id,
            team_id,
            jobdefinition_id,
            recheck,
        } => {
            let request = CreateJobRequest {
                recheck,
                remoteci_id,
                team_id,
                jobdefinition_id,
            };
            let job = client.jobs().create(request).await?;
            output::print_record(&job, TABLE_HEADERS, ctx.format)?;
        }
        JobCommand::Schedule { remoteci_id } => {
            let job = client.jobs().schedule(&remoteci_id).await?;
            output::print_record(&job, TABLE_HEADERS, ctx.format)?;
        }
        JobCommand::Show { id } => {
            let job = client.jobs().get(&id).await?;
            output::print_record(&job, TABLE_HEADERS, ctx.format)?;
        }
        JobCommand::FullData { id } => {
            let full = client.jobs().full_data(&id).await?;
            // Free-form agent payloads; tables don't apply here
            println!("{}", serde_json::to_string_pretty(&full)?);
        }
        JobCommand::Jobstates { id, long } => {
            let states = client.jobs().jobstates(&id).await?;
            output::print_records(&states.jobstates, JOBSTATE_HEADERS, ctx.format, long)?;
        }
        JobCommand::Delete { id } => {
            client.jobs().delete(&id).await?;
            output::print_message(&id, "Job deleted.")?;
        }
    }

    Ok(())
}

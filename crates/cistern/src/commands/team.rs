//! Team management commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use cistern_client::{CreateTeamRequest, UpdateTeamRequest};

use super::{Context, ListOptions};
use crate::output;

const TABLE_HEADERS: &[&str] = &["id", "name", "country", "etag", "created_at", "updated_at"];

/// Arguments for the team command.
#[derive(Args, Debug)]
pub struct TeamArgs {
    #[command(subcommand)]
    pub command: TeamCommand,
}

#[derive(Subcommand, Debug)]
pub enum TeamCommand {
    /// List all teams
    List {
        #[command(flatten)]
        opts: ListOptions,
    },

    /// Create a team
    Create {
        /// Team name
        #[arg(long)]
        name: String,

        /// Country the team operates from
        #[arg(long)]
        country: Option<String>,
    },

    /// Show a team
    Show {
        /// Team ID
        id: String,
    },

    /// Update a team
    Update {
        /// Team ID
        id: String,

        /// Entity tag from the current record
        #[arg(long)]
        etag: String,

        /// New team name
        #[arg(long)]
        name: Option<String>,

        /// New country
        #[arg(long)]
        country: Option<String>,
    },

    /// Delete a team
    Delete {
        /// Team ID
        id: String,

        /// Entity tag from the current record
        #[arg(long)]
        etag: String,
    },
}

/// Run the team command.
pub async fn run(args: TeamArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    match args.command {
        TeamCommand::List { opts } => {
            let teams = client.teams().list(&opts.query()).await?;
            output::print_records(&teams.teams, TABLE_HEADERS, ctx.format, opts.long)?;
        }
        TeamCommand::Create { name, country } => {
            let request = CreateTeamRequest { name, country };
            let team = client.teams().create(request).await?;
            output::print_record(&team, TABLE_HEADERS, ctx.format)?;
        }
        TeamCommand::Show { id } => {
            let team = client.teams().get(&id).await?;
            output::print_record(&team, TABLE_HEADERS, ctx.format)?;
        }
        TeamCommand::Update {
            id,
            etag,
            name,
            country,
        } => {
            let request = UpdateTeamRequest { name, country };
            match client.teams().update(&id, &etag, request).await? {
                Some(team) => output::print_record(&team, TABLE_HEADERS, ctx.format)?,
                None => output::print_message(&id, "Team updated.")?,
            }
        }
        TeamCommand::Delete { id, etag } => {
            client.teams().delete(&id, &etag).await?;
            output::print_message(&id, "Team deleted.")?;
        }
    }

    Ok(())
}

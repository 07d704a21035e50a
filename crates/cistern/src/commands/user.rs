//! User management commands.

use anyhow::Result;
use clap::{Args, Subcommand};
use cistern_client::{CreateUserRequest, UpdateUserRequest};

use super::{state_option, state_string, Context, ListOptions};
use crate::output;

const TABLE_HEADERS: &[&str] = &[
    "id",
    "name",
    "role",
    "team_id",
    "state",
    "etag",
    "created_at",
    "updated_at",
];

/// Arguments for the user command.
#[derive(Args, Debug)]
pub struct UserArgs {
    #[command(subcommand)]
    pub command: UserCommand,
}

#[derive(Subcommand, Debug)]
pub enum UserCommand {
    /// List all users
    List {
        #[command(flatten)]
        opts: ListOptions,
    },

    /// Create a user
    Create {
        /// User name
        #[arg(long)]
        name: String,

        /// Password
        #[arg(long)]
        password: String,

        /// Role, `admin` or `user`
        #[arg(long)]
        role: Option<String>,

        /// Team the user belongs to
        #[arg(long)]
        team_id: String,

        /// Create the user active (default)
        #[arg(long, overrides_with = "no_active")]
        active: bool,

        /// Create the user inactive
        #[arg(long)]
        no_active: bool,
    },

    /// Show a user
    Show {
        /// User ID
        id: String,
    },

    /// Update a user
    Update {
        /// User ID
        id: String,

        /// Entity tag from the current record
        #[arg(long)]
        etag: String,

        /// New user name
        #[arg(long)]
        name: Option<String>,

        /// New password
        #[arg(long)]
        password: Option<String>,

        /// New role, `admin` or `user`
        #[arg(long)]
        role: Option<String>,

        /// New team
        #[arg(long)]
        team_id: Option<String>,

        /// Mark the user active
        #[arg(long, overrides_with = "no_active")]
        active: bool,

        /// Mark the user inactive
        #[arg(long)]
        no_active: bool,
    },

    /// Delete a user
    Delete {
        /// User ID
        id: String,

        /// Entity tag from the current record
        #[arg(long)]
        etag: String,
    },
}

/// Run the user command.
pub async fn run(args: UserArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    match args.command {
        UserCommand::List { opts } => {
            let users = client.users().list(&opts.query()).await?;
            output::print_records(&users.users, TABLE_HEADERS, ctx.format, opts.long)?;
        }
        UserCommand::Create {
            name,
            password,
            role,
            team_id,
            active: _,
            no_active,
        } => {
            let request = CreateUserRequest {
                name,
                password,
                role,
                team_id,
                state: Some(state_string(no_active).to_string()),
            };
            let user = client.users().create(request).await?;
            output::print_record(&user, TABLE_HEADERS, ctx.format)?;
        }
        UserCommand::Show { id } => {
            let user = client.users().get(&id).await?;
            output::print_record(&user, TABLE_HEADERS, ctx.format)?;
        }
        UserCommand::Update {
            id,
            etag,
            name,
            password,
            role,
            team_id,
            active,
            no_active,
        } => {
            let request = UpdateUserRequest {
                name,
                password,
                role,
                team_id,
                state: state_option(active, no_active),
            };
            match client.users().update(&id, &etag, request).await? {
                Some(user) => output::print_record(&user, TABLE_HEADERS, ctx.format)?,
                None => output::print_message(&id, "User updated.")?,
            }
        }
        UserCommand::Delete { id, etag } => {
            client.users().delete(&id, &etag).await?;
            output::print_message(&id, "User deleted.")?;
        }
    }

    Ok(())
}

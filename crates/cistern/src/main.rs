//! cistern - command-line client for the Cistern CI tracking service.
//!
//! Main entry point for the cistern CLI.

use anyhow::Result;
use clap::{Parser, Subcommand};
use console::Style;

mod commands;
mod output;

use commands::{
    component, job, jobdefinition, jobstate, remoteci, team, test, topic, user, Context,
};
use output::OutputFormat;

// ─────────────────────────────────────────────────────────────────────────────
// CLI Structure
// ─────────────────────────────────────────────────────────────────────────────

/// cistern - track jobs, agents and results on a Cistern control server
#[derive(Parser)]
#[command(name = "cistern")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control server URL
    #[arg(
        long,
        global = true,
        env = "CISTERN_SERVER_URL",
        default_value = "http://localhost:5000"
    )]
    pub server: String,

    /// Login for HTTP basic authentication
    #[arg(long, global = true, env = "CISTERN_LOGIN")]
    pub login: Option<String>,

    /// Password for HTTP basic authentication
    #[arg(long, global = true, env = "CISTERN_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage jobs
    Job(job::JobArgs),

    /// Manage job state transitions
    Jobstate(jobstate::JobStateArgs),

    /// Manage remote CI agents
    Remoteci(remoteci::RemoteciArgs),

    /// Manage users
    User(user::UserArgs),

    /// Manage teams
    Team(team::TeamArgs),

    /// Manage tests
    Test(test::TestArgs),

    /// Manage topics
    Topic(topic::TopicArgs),

    /// Manage job definitions
    Jobdefinition(jobdefinition::JobDefinitionArgs),

    /// Manage components
    Component(component::ComponentArgs),
}

// ─────────────────────────────────────────────────────────────────────────────
// Main
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing on stderr so stdout stays parseable
    let filter = if cli.verbose {
        "cistern=debug,cistern_client=debug,info"
    } else {
        "cistern=info,cistern_client=info,warn"
    };

    use tracing_subscriber::prelude::*;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();

    let ctx = Context {
        server_url: cli.server,
        login: cli.login,
        password: cli.password,
        format: cli.format,
        verbose: cli.verbose,
    };

    if let Err(err) = dispatch(cli.command, &ctx).await {
        let red = Style::new().red();
        eprintln!("{} {:#}", red.apply_to("Error:"), err);
        std::process::exit(1);
    }
}

/// Dispatch to command handlers.
async fn dispatch(command: Commands, ctx: &Context) -> Result<()> {
    match command {
        Commands::Job(args) => job::run(args, ctx).await,
        Commands::Jobstate(args) => jobstate::run(args, ctx).await,
        Commands::Remoteci(args) => remoteci::run(args, ctx).await,
        Commands::User(args) => user::run(args, ctx).await,
        Commands::Team(args) => team::run(args, ctx).await,
        Commands::Test(args) => test::run(args, ctx).await,
        Commands::Topic(args) => topic::run(args, ctx).await,
        Commands::Jobdefinition(args) => jobdefinition::run(args, ctx).await,
        Commands::Component(args) => component::run(args, ctx).await,
    }
}

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use client::{ApiClient, Session};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod output;

use commands::competition::CompetitionCommands;
use commands::participants::ParticipantCommands;
use commands::rounds::RoundCommands;
use commands::scores::ScoreCommands;
use commands::session::ensure_authenticated;
use commands::team_members::TeamMemberCommands;
use commands::teams::TeamCommands;
use commands::tracks::TrackCommands;
use commands::tutors::TutorCommands;
use commands::users::UserCommands;

#[derive(Parser)]
#[command(name = "sumo-admin")]
#[command(about = "Sumo robot competition administration console", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Base URL of the competition backend
    #[arg(long, env = "SUMO_API_URL")]
    api_url: String,

    /// Where the session token is stored between invocations
    #[arg(long, env = "SUMO_TOKEN_FILE")]
    token_file: Option<PathBuf>,

    /// Answer yes to every confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,

    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Drop the stored session token
    Logout,
    /// Manage participants
    Participants {
        #[command(subcommand)]
        command: ParticipantCommands,
    },
    /// Manage tutors
    Tutors {
        #[command(subcommand)]
        command: TutorCommands,
    },
    /// Manage teams
    Teams {
        #[command(subcommand)]
        command: TeamCommands,
    },
    /// Manage team memberships
    TeamMembers {
        #[command(subcommand)]
        command: TeamMemberCommands,
    },
    /// Manage tracks
    Tracks {
        #[command(subcommand)]
        command: TrackCommands,
    },
    /// Manage score records
    Scores {
        #[command(subcommand)]
        command: ScoreCommands,
    },
    /// Manage operator accounts
    Users {
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Manage rounds and record their scores
    Rounds {
        #[command(subcommand)]
        command: RoundCommands,
    },
    /// Start or stop the competition
    Competition {
        #[command(subcommand)]
        command: CompetitionCommands,
    },
    /// Public score board (no session required)
    Results,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("sumo_admin={},client={}", log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let token_file = cli.token_file.clone().unwrap_or_else(default_token_file);
    let session = Arc::new(Session::with_file(token_file));
    let api = ApiClient::new(&cli.api_url, session);

    match cli.command {
        Commands::Login { email, password } => {
            commands::session::login(&api, &email, &password).await
        }
        Commands::Logout => commands::session::logout(&api),
        Commands::Results => commands::results::run(&api).await,
        command => {
            ensure_authenticated(api.session())?;
            match command {
                Commands::Participants { command } => {
                    commands::participants::run(&api, command, cli.yes).await
                }
                Commands::Tutors { command } => commands::tutors::run(&api, command, cli.yes).await,
                Commands::Teams { command } => commands::teams::run(&api, command, cli.yes).await,
                Commands::TeamMembers { command } => {
                    commands::team_members::run(&api, command, cli.yes).await
                }
                Commands::Tracks { command } => commands::tracks::run(&api, command, cli.yes).await,
                Commands::Scores { command } => commands::scores::run(&api, command, cli.yes).await,
                Commands::Users { command } => commands::users::run(&api, command, cli.yes).await,
                Commands::Rounds { command } => commands::rounds::run(&api, command, cli.yes).await,
                Commands::Competition { command } => {
                    commands::competition::run(&api, command).await
                }
                Commands::Login { .. } | Commands::Logout | Commands::Results => unreachable!(),
            }
        }
    }
}

fn default_token_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("sumo-admin")
        .join("token")
}

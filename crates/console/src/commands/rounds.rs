use clap::Subcommand;
use client::ApiClient;
use client::models::{CreateRound, RoundDetail, RoundState, UpdateRound};

use crate::output::{Table, confirm_or};

#[derive(Subcommand)]
pub enum RoundCommands {
    /// List rounds with track and team names
    List,
    /// Show the raw record of one round
    Get { id: i64 },
    /// Create a round by hand
    Create {
        /// pendiente, en_curso or finalizada
        #[arg(long, default_value = "pendiente")]
        state: RoundState,
        #[arg(long)]
        track: i64,
        #[arg(long)]
        red_team: i64,
        #[arg(long)]
        blue_team: i64,
    },
    /// Set the state of a round directly
    Update {
        id: i64,
        #[arg(long)]
        state: RoundState,
    },
    /// Start a pending round, or stop a running one
    Toggle { id: i64 },
    /// Record both team scores and finish the round
    Score {
        id: i64,
        /// Points for the red side
        #[arg(long)]
        red: i64,
        /// Points for the blue side
        #[arg(long)]
        blue: i64,
    },
    /// Have the backend generate rounds by random pairing
    Generate,
    /// Soft-delete a round (reversible)
    Remove { id: i64 },
    /// Undo a soft-delete
    Restore { id: i64 },
    /// Permanently delete a round
    Delete { id: i64 },
}

pub async fn run(api: &ApiClient, command: RoundCommands, yes: bool) -> anyhow::Result<()> {
    let rounds = api.rounds();

    match command {
        RoundCommands::List => print_rows(&rounds.list_details().await?),
        RoundCommands::Get { id } => {
            let round = rounds.get(id).await?;
            let mut table = Table::new(&["ID", "State", "Track", "Red", "Blue"]);
            table.row(vec![
                round.id.to_string(),
                round.state.to_string(),
                round.track.id.to_string(),
                round.red_team.name.clone().unwrap_or_else(|| round.red_team.id.to_string()),
                round.blue_team.name.clone().unwrap_or_else(|| round.blue_team.id.to_string()),
            ]);
            table.print();
        }
        RoundCommands::Create {
            state,
            track,
            red_team,
            blue_team,
        } => {
            rounds
                .create(&CreateRound {
                    state,
                    track_id: track,
                    red_team_id: red_team,
                    blue_team_id: blue_team,
                })
                .await?;
            tracing::info!("Round created");
            print_rows(&rounds.list_details().await?);
        }
        RoundCommands::Update { id, state } => {
            rounds.update(id, &UpdateRound::state(state)).await?;
            tracing::info!("Round {} set to {}", id, state);
            print_rows(&rounds.list_details().await?);
        }
        RoundCommands::Toggle { id } => {
            let state = rounds.toggle(id).await?;
            match state {
                RoundState::InProgress => tracing::info!("Round {} started", id),
                _ => tracing::info!("Round {} stopped", id),
            }
            print_rows(&rounds.list_details().await?);
        }
        RoundCommands::Score { id, red, blue } => {
            let round = rounds.get(id).await?;
            rounds.finalize(&round, red, blue).await?;
            tracing::info!("Scores recorded and round {} finished", id);
            print_rows(&rounds.list_details().await?);
        }
        RoundCommands::Generate => {
            let prompt = "Generate rounds by randomly pairing participants into \
                          teams of two per track?";
            if confirm_or(yes, prompt)? {
                rounds.generate().await?;
                tracing::info!("Rounds generated");
                print_rows(&rounds.list_details().await?);
            }
        }
        RoundCommands::Remove { id } => {
            if confirm_or(yes, "Soft-delete this round?")? {
                rounds.remove(id).await?;
                tracing::info!("Round {} soft-deleted", id);
                print_rows(&rounds.list_details().await?);
            }
        }
        RoundCommands::Restore { id } => {
            rounds.restore(id).await?;
            tracing::info!("Round {} restored", id);
            print_rows(&rounds.list_details().await?);
        }
        RoundCommands::Delete { id } => {
            if confirm_or(yes, "Permanently delete this round?")? {
                rounds.delete(id).await?;
                tracing::info!("Round {} deleted", id);
                print_rows(&rounds.list_details().await?);
            }
        }
    }

    Ok(())
}

fn print_rows(rows: &[RoundDetail]) {
    let mut table = Table::new(&["ID", "State", "Track", "Red", "Blue"]);
    for round in rows {
        table.row(vec![
            round.id.to_string(),
            round.state.to_string(),
            round.track.clone(),
            round.red_team.clone(),
            round.blue_team.clone(),
        ]);
    }
    table.print();
}

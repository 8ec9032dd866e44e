use clap::Subcommand;
use client::ApiClient;
use client::models::{CreateScore, Score, UpdateScore};

use crate::output::{Table, confirm_or};

#[derive(Subcommand)]
pub enum ScoreCommands {
    /// List raw score records
    List,
    /// List scores with participant and location names
    Details,
    /// Show one score
    Get { id: i64 },
    /// Record a score by hand (round scoring normally does this)
    Create {
        #[arg(long)]
        points: i64,
        #[arg(long)]
        round: i64,
        #[arg(long)]
        team: i64,
    },
    /// Change a score; only the flags given are sent
    Update {
        id: i64,
        #[arg(long)]
        points: Option<i64>,
        #[arg(long)]
        round: Option<i64>,
        #[arg(long)]
        team: Option<i64>,
    },
    /// Soft-delete a score (reversible)
    Remove { id: i64 },
    /// Undo a soft-delete
    Restore { id: i64 },
    /// Permanently delete a score
    Delete { id: i64 },
}

pub async fn run(api: &ApiClient, command: ScoreCommands, yes: bool) -> anyhow::Result<()> {
    let scores = api.scores();

    match command {
        ScoreCommands::List => print_rows(&scores.list().await?),
        ScoreCommands::Details => {
            let details = scores.list_details().await?;
            let mut table = Table::new(&[
                "ID",
                "Participant",
                "Points",
                "Department",
                "Province",
                "Municipality",
            ]);
            for score in &details {
                table.row(vec![
                    score.id.to_string(),
                    score.participant.clone(),
                    score.points.to_string(),
                    score.department.clone(),
                    score.province.clone(),
                    score.municipality.clone(),
                ]);
            }
            table.print();
        }
        ScoreCommands::Get { id } => {
            let score = scores.get(id).await?;
            print_rows(std::slice::from_ref(&score));
        }
        ScoreCommands::Create {
            points,
            round,
            team,
        } => {
            scores.create(&CreateScore::new(points, round, team)).await?;
            tracing::info!("Score recorded");
            print_rows(&scores.list().await?);
        }
        ScoreCommands::Update {
            id,
            points,
            round,
            team,
        } => {
            scores
                .update(
                    id,
                    &UpdateScore {
                        points,
                        round_id: round,
                        team_id: team,
                    },
                )
                .await?;
            tracing::info!("Score {} updated", id);
            print_rows(&scores.list().await?);
        }
        ScoreCommands::Remove { id } => {
            if confirm_or(yes, "Soft-delete this score?")? {
                scores.remove(id).await?;
                tracing::info!("Score {} soft-deleted", id);
                print_rows(&scores.list().await?);
            }
        }
        ScoreCommands::Restore { id } => {
            scores.restore(id).await?;
            tracing::info!("Score {} restored", id);
            print_rows(&scores.list().await?);
        }
        ScoreCommands::Delete { id } => {
            if confirm_or(yes, "Permanently delete this score?")? {
                scores.delete(id).await?;
                tracing::info!("Score {} deleted", id);
                print_rows(&scores.list().await?);
            }
        }
    }

    Ok(())
}

fn print_rows(rows: &[Score]) {
    let mut table = Table::new(&["ID", "Points", "Round", "Team"]);
    for score in rows {
        let round = score
            .round
            .as_ref()
            .map(|round| round.id.to_string())
            .unwrap_or_default();
        let team = score
            .team
            .as_ref()
            .map(|team| team.name.clone())
            .unwrap_or_default();
        table.row(vec![
            score.id.to_string(),
            score.points.to_string(),
            round,
            team,
        ]);
    }
    table.print();
}

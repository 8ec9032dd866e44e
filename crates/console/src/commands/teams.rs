use clap::Subcommand;
use client::ApiClient;
use client::models::{CreateTeam, Team, UpdateTeam};

use crate::output::{Table, confirm_or};

#[derive(Subcommand)]
pub enum TeamCommands {
    /// List all teams
    List,
    /// List teams with their members and tutors
    Details,
    /// Show one team
    Get { id: i64 },
    /// Create a team
    Create {
        #[arg(long)]
        name: String,
    },
    /// Rename a team
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
    },
    /// Soft-delete a team (reversible)
    Remove { id: i64 },
    /// Undo a soft-delete
    Restore { id: i64 },
    /// Permanently delete a team
    Delete { id: i64 },
}

pub async fn run(api: &ApiClient, command: TeamCommands, yes: bool) -> anyhow::Result<()> {
    let teams = api.teams();

    match command {
        TeamCommands::List => print_rows(&teams.list().await?),
        TeamCommands::Details => {
            let details = teams.list_details().await?;
            let mut table = Table::new(&["ID", "Team", "Participants", "Tutors"]);
            for team in &details {
                table.row(vec![
                    team.id.to_string(),
                    team.name.clone(),
                    team.participants.clone(),
                    team.tutors.clone(),
                ]);
            }
            table.print();
        }
        TeamCommands::Get { id } => {
            let team = teams.get(id).await?;
            print_rows(std::slice::from_ref(&team));
        }
        TeamCommands::Create { name } => {
            teams.create(&CreateTeam { name }).await?;
            tracing::info!("Team created");
            print_rows(&teams.list().await?);
        }
        TeamCommands::Update { id, name } => {
            teams.update(id, &UpdateTeam { name }).await?;
            tracing::info!("Team {} updated", id);
            print_rows(&teams.list().await?);
        }
        TeamCommands::Remove { id } => {
            if confirm_or(yes, "Soft-delete this team?")? {
                teams.remove(id).await?;
                tracing::info!("Team {} soft-deleted", id);
                print_rows(&teams.list().await?);
            }
        }
        TeamCommands::Restore { id } => {
            teams.restore(id).await?;
            tracing::info!("Team {} restored", id);
            print_rows(&teams.list().await?);
        }
        TeamCommands::Delete { id } => {
            if confirm_or(yes, "Permanently delete this team?")? {
                teams.delete(id).await?;
                tracing::info!("Team {} deleted", id);
                print_rows(&teams.list().await?);
            }
        }
    }

    Ok(())
}

fn print_rows(rows: &[Team]) {
    let mut table = Table::new(&["ID", "Team"]);
    for team in rows {
        table.row(vec![team.id.to_string(), team.name.clone()]);
    }
    table.print();
}

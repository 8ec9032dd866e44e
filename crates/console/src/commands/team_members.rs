use clap::Subcommand;
use client::ApiClient;
use client::models::{CreateTeamMember, TeamMember, UpdateTeamMember};

use crate::output::{Table, confirm_or};

#[derive(Subcommand)]
pub enum TeamMemberCommands {
    /// List team memberships
    List,
    /// Show one membership
    Get { id: i64 },
    /// Put a participant on a team
    Create {
        #[arg(long)]
        team: i64,
        #[arg(long)]
        participant: i64,
    },
    /// Move a membership to another team or participant
    Update {
        id: i64,
        #[arg(long)]
        team: Option<i64>,
        #[arg(long)]
        participant: Option<i64>,
    },
    /// Soft-delete a membership (reversible)
    Remove { id: i64 },
    /// Undo a soft-delete
    Restore { id: i64 },
    /// Permanently delete a membership
    Delete { id: i64 },
}

pub async fn run(api: &ApiClient, command: TeamMemberCommands, yes: bool) -> anyhow::Result<()> {
    let members = api.team_members();

    match command {
        TeamMemberCommands::List => print_rows(&members.list().await?),
        TeamMemberCommands::Get { id } => {
            let member = members.get(id).await?;
            print_rows(std::slice::from_ref(&member));
        }
        TeamMemberCommands::Create { team, participant } => {
            members
                .create(&CreateTeamMember {
                    team_id: team,
                    participant_id: participant,
                })
                .await?;
            tracing::info!("Membership created");
            print_rows(&members.list().await?);
        }
        TeamMemberCommands::Update {
            id,
            team,
            participant,
        } => {
            members
                .update(
                    id,
                    &UpdateTeamMember {
                        team_id: team,
                        participant_id: participant,
                    },
                )
                .await?;
            tracing::info!("Membership {} updated", id);
            print_rows(&members.list().await?);
        }
        TeamMemberCommands::Remove { id } => {
            if confirm_or(yes, "Soft-delete this membership?")? {
                members.remove(id).await?;
                tracing::info!("Membership {} soft-deleted", id);
                print_rows(&members.list().await?);
            }
        }
        TeamMemberCommands::Restore { id } => {
            members.restore(id).await?;
            tracing::info!("Membership {} restored", id);
            print_rows(&members.list().await?);
        }
        TeamMemberCommands::Delete { id } => {
            if confirm_or(yes, "Permanently delete this membership?")? {
                members.delete(id).await?;
                tracing::info!("Membership {} deleted", id);
                print_rows(&members.list().await?);
            }
        }
    }

    Ok(())
}

fn print_rows(rows: &[TeamMember]) {
    let mut table = Table::new(&["ID", "Team", "Participant"]);
    for member in rows {
        let team = member
            .team
            .as_ref()
            .map(|team| team.name.clone())
            .unwrap_or_default();
        let participant = member
            .participant
            .as_ref()
            .and_then(|p| p.full_name.clone())
            .unwrap_or_default();
        table.row(vec![member.id.to_string(), team, participant]);
    }
    table.print();
}

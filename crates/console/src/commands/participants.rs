use chrono::NaiveDate;
use clap::Subcommand;
use client::ApiClient;
use client::models::{CreateParticipant, Participant, UpdateParticipant};

use crate::output::{Table, confirm_or};

#[derive(Subcommand)]
pub enum ParticipantCommands {
    /// List all participants
    List,
    /// Show one participant
    Get { id: i64 },
    /// Register a participant
    Create {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        national_id: String,
        /// Birth date, YYYY-MM-DD
        #[arg(long)]
        birth_date: NaiveDate,
        #[arg(long)]
        department: String,
        #[arg(long)]
        province: String,
        #[arg(long)]
        municipality: String,
    },
    /// Change fields of a participant; only the flags given are sent
    Update {
        id: i64,
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        national_id: Option<String>,
        #[arg(long)]
        birth_date: Option<NaiveDate>,
        #[arg(long)]
        department: Option<String>,
        #[arg(long)]
        province: Option<String>,
        #[arg(long)]
        municipality: Option<String>,
    },
    /// Soft-delete a participant (reversible)
    Remove { id: i64 },
    /// Undo a soft-delete
    Restore { id: i64 },
    /// Permanently delete a participant
    Delete { id: i64 },
}

pub async fn run(api: &ApiClient, command: ParticipantCommands, yes: bool) -> anyhow::Result<()> {
    let participants = api.participants();

    match command {
        ParticipantCommands::List => print_rows(&participants.list().await?),
        ParticipantCommands::Get { id } => {
            let participant = participants.get(id).await?;
            print_rows(std::slice::from_ref(&participant));
        }
        ParticipantCommands::Create {
            full_name,
            national_id,
            birth_date,
            department,
            province,
            municipality,
        } => {
            participants
                .create(&CreateParticipant {
                    full_name,
                    national_id,
                    birth_date,
                    department,
                    province,
                    municipality,
                })
                .await?;
            tracing::info!("Participant created");
            print_rows(&participants.list().await?);
        }
        ParticipantCommands::Update {
            id,
            full_name,
            national_id,
            birth_date,
            department,
            province,
            municipality,
        } => {
            participants
                .update(
                    id,
                    &UpdateParticipant {
                        full_name,
                        national_id,
                        birth_date,
                        department,
                        province,
                        municipality,
                    },
                )
                .await?;
            tracing::info!("Participant {} updated", id);
            print_rows(&participants.list().await?);
        }
        ParticipantCommands::Remove { id } => {
            if confirm_or(yes, "Soft-delete this participant?")? {
                participants.remove(id).await?;
                tracing::info!("Participant {} soft-deleted", id);
                print_rows(&participants.list().await?);
            }
        }
        ParticipantCommands::Restore { id } => {
            participants.restore(id).await?;
            tracing::info!("Participant {} restored", id);
            print_rows(&participants.list().await?);
        }
        ParticipantCommands::Delete { id } => {
            if confirm_or(yes, "Permanently delete this participant?")? {
                participants.delete(id).await?;
                tracing::info!("Participant {} deleted", id);
                print_rows(&participants.list().await?);
            }
        }
    }

    Ok(())
}

fn print_rows(rows: &[Participant]) {
    let mut table = Table::new(&[
        "ID",
        "Name",
        "CI",
        "Born",
        "Department",
        "Province",
        "Municipality",
    ]);
    for p in rows {
        table.row(vec![
            p.id.to_string(),
            p.full_name.clone(),
            p.national_id.clone(),
            p.birth_date.to_string(),
            p.department.clone(),
            p.province.clone(),
            p.municipality.clone(),
        ]);
    }
    table.print();
}

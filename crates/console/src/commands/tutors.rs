use clap::Subcommand;
use client::ApiClient;
use client::models::{CreateTutor, Tutor, UpdateTutor};

use crate::output::{Table, confirm_or};

#[derive(Subcommand)]
pub enum TutorCommands {
    /// List all tutors
    List,
    /// Show one tutor
    Get { id: i64 },
    /// Register a tutor
    Create {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        national_id: String,
    },
    /// Change fields of a tutor; only the flags given are sent
    Update {
        id: i64,
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        national_id: Option<String>,
    },
    /// Soft-delete a tutor (reversible)
    Remove { id: i64 },
    /// Undo a soft-delete
    Restore { id: i64 },
    /// Permanently delete a tutor
    Delete { id: i64 },
}

pub async fn run(api: &ApiClient, command: TutorCommands, yes: bool) -> anyhow::Result<()> {
    let tutors = api.tutors();

    match command {
        TutorCommands::List => print_rows(&tutors.list().await?),
        TutorCommands::Get { id } => {
            let tutor = tutors.get(id).await?;
            print_rows(std::slice::from_ref(&tutor));
        }
        TutorCommands::Create {
            full_name,
            national_id,
        } => {
            tutors
                .create(&CreateTutor {
                    full_name,
                    national_id,
                })
                .await?;
            tracing::info!("Tutor created");
            print_rows(&tutors.list().await?);
        }
        TutorCommands::Update {
            id,
            full_name,
            national_id,
        } => {
            tutors
                .update(
                    id,
                    &UpdateTutor {
                        full_name,
                        national_id,
                    },
                )
                .await?;
            tracing::info!("Tutor {} updated", id);
            print_rows(&tutors.list().await?);
        }
        TutorCommands::Remove { id } => {
            if confirm_or(yes, "Soft-delete this tutor?")? {
                tutors.remove(id).await?;
                tracing::info!("Tutor {} soft-deleted", id);
                print_rows(&tutors.list().await?);
            }
        }
        TutorCommands::Restore { id } => {
            tutors.restore(id).await?;
            tracing::info!("Tutor {} restored", id);
            print_rows(&tutors.list().await?);
        }
        TutorCommands::Delete { id } => {
            if confirm_or(yes, "Permanently delete this tutor?")? {
                tutors.delete(id).await?;
                tracing::info!("Tutor {} deleted", id);
                print_rows(&tutors.list().await?);
            }
        }
    }

    Ok(())
}

fn print_rows(rows: &[Tutor]) {
    let mut table = Table::new(&["ID", "Name", "CI"]);
    for tutor in rows {
        table.row(vec![
            tutor.id.to_string(),
            tutor.full_name.clone(),
            tutor.national_id.clone(),
        ]);
    }
    table.print();
}

use clap::Subcommand;
use client::ApiClient;
use client::models::{CreateTrack, Track, UpdateTrack};

use crate::output::{Table, confirm_or};

#[derive(Subcommand)]
pub enum TrackCommands {
    /// List all tracks
    List,
    /// Show one track
    Get { id: i64 },
    /// Create a track
    Create {
        #[arg(long)]
        name: String,
    },
    /// Rename a track
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
    },
    /// Soft-delete a track (reversible)
    Remove { id: i64 },
    /// Undo a soft-delete
    Restore { id: i64 },
    /// Permanently delete a track
    Delete { id: i64 },
}

pub async fn run(api: &ApiClient, command: TrackCommands, yes: bool) -> anyhow::Result<()> {
    let tracks = api.tracks();

    match command {
        TrackCommands::List => print_rows(&tracks.list().await?),
        TrackCommands::Get { id } => {
            let track = tracks.get(id).await?;
            print_rows(std::slice::from_ref(&track));
        }
        TrackCommands::Create { name } => {
            tracks.create(&CreateTrack { name }).await?;
            tracing::info!("Track created");
            print_rows(&tracks.list().await?);
        }
        TrackCommands::Update { id, name } => {
            tracks.update(id, &UpdateTrack { name }).await?;
            tracing::info!("Track {} updated", id);
            print_rows(&tracks.list().await?);
        }
        TrackCommands::Remove { id } => {
            if confirm_or(yes, "Soft-delete this track?")? {
                tracks.remove(id).await?;
                tracing::info!("Track {} soft-deleted", id);
                print_rows(&tracks.list().await?);
            }
        }
        TrackCommands::Restore { id } => {
            tracks.restore(id).await?;
            tracing::info!("Track {} restored", id);
            print_rows(&tracks.list().await?);
        }
        TrackCommands::Delete { id } => {
            if confirm_or(yes, "Permanently delete this track?")? {
                tracks.delete(id).await?;
                tracing::info!("Track {} deleted", id);
                print_rows(&tracks.list().await?);
            }
        }
    }

    Ok(())
}

fn print_rows(rows: &[Track]) {
    let mut table = Table::new(&["ID", "Track"]);
    for track in rows {
        table.row(vec![track.id.to_string(), track.name.clone()]);
    }
    table.print();
}

use clap::Subcommand;
use client::ApiClient;
use client::models::RankingEntry;

use crate::output::Table;

#[derive(Subcommand)]
pub enum CompetitionCommands {
    /// Open the competition for live scoring
    Start,
    /// Close the competition and show the final ranking
    Stop,
}

pub async fn run(api: &ApiClient, command: CompetitionCommands) -> anyhow::Result<()> {
    match command {
        CompetitionCommands::Start => {
            api.competition().start().await?;
            tracing::info!("Competition started");
        }
        CompetitionCommands::Stop => {
            let ranking = api.competition().stop().await?;
            tracing::info!("Competition stopped");
            print_ranking(&ranking);
        }
    }

    Ok(())
}

fn print_ranking(ranking: &[RankingEntry]) {
    if ranking.is_empty() {
        println!("No qualifiers reported.");
        return;
    }

    println!("Top {} qualifiers", ranking.len());
    let mut table = Table::new(&["ID", "Name", "Points", "Team"]);
    for entry in ranking {
        table.row(vec![
            entry.id.to_string(),
            entry.full_name.clone(),
            entry.total_points.to_string(),
            entry.team.clone(),
        ]);
    }
    table.print();
}

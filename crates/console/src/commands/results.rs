use client::ApiClient;

use crate::output::Table;

/// Public score board: no session required, sorted by points descending.
/// A fetch failure is logged and the board renders empty.
pub async fn run(api: &ApiClient) -> anyhow::Result<()> {
    let mut rows = match api.scores().list_details().await {
        Ok(rows) => rows,
        Err(err) => {
            tracing::error!("could not load the public score board: {}", err);
            Vec::new()
        }
    };

    rows.sort_by(|a, b| b.points.cmp(&a.points));

    println!("SUMO ROBOT COMPETITION: final scores");
    let mut table = Table::new(&[
        "Participant",
        "Points",
        "Department",
        "Province",
        "Municipality",
    ]);
    for score in &rows {
        table.row(vec![
            score.participant.clone(),
            score.points.to_string(),
            score.department.clone(),
            score.province.clone(),
            score.municipality.clone(),
        ]);
    }
    table.print();

    Ok(())
}

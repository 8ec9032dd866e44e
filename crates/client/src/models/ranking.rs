use serde::{Deserialize, Serialize};

/// One row of the top-N snapshot returned when the competition is stopped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingEntry {
    pub id: i64,
    #[serde(rename = "nombreCompleto")]
    pub full_name: String,
    #[serde(rename = "puntajeTotal")]
    pub total_points: i64,
    #[serde(rename = "equipo", default)]
    pub team: String,
}

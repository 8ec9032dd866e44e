use serde::{Deserialize, Serialize};
use validator::Validate;

use super::team::Team;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Score {
    pub id: i64,
    #[serde(rename = "puntaje")]
    pub points: i64,
    #[serde(rename = "ronda", default)]
    pub round: Option<RoundRef>,
    #[serde(rename = "equipo", default)]
    pub team: Option<Team>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRef {
    pub id: i64,
}

/// Denormalized score view from `/puntajes/details`: the participant and
/// location names arrive inlined for direct display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreDetail {
    pub id: i64,
    #[serde(rename = "participante", default)]
    pub participant: String,
    #[serde(rename = "puntaje")]
    pub points: i64,
    #[serde(rename = "departamento", default)]
    pub department: String,
    #[serde(rename = "provincia", default)]
    pub province: String,
    #[serde(rename = "municipio", default)]
    pub municipality: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateScore {
    #[validate(range(min = 0, message = "Points must be non-negative"))]
    #[serde(rename = "puntaje")]
    pub points: i64,

    #[validate(range(min = 1))]
    #[serde(rename = "rondaId")]
    pub round_id: i64,

    #[validate(range(min = 1))]
    #[serde(rename = "equipoId")]
    pub team_id: i64,
}

impl CreateScore {
    pub fn new(points: i64, round_id: i64, team_id: i64) -> Self {
        Self {
            points,
            round_id,
            team_id,
        }
    }
}

/// The backend expects the bare relation names on update, not the `...Id`
/// keys used on create.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateScore {
    #[validate(range(min = 0))]
    #[serde(rename = "puntaje", skip_serializing_if = "Option::is_none")]
    pub points: Option<i64>,

    #[validate(range(min = 1))]
    #[serde(rename = "ronda", skip_serializing_if = "Option::is_none")]
    pub round_id: Option<i64>,

    #[validate(range(min = 1))]
    #[serde(rename = "equipo", skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_score_uses_wire_names() {
        let payload = CreateScore::new(5, 7, 4);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"puntaje": 5, "rondaId": 7, "equipoId": 4})
        );
    }

    #[test]
    fn negative_points_are_rejected() {
        assert!(CreateScore::new(-1, 7, 4).validate().is_err());
        assert!(CreateScore::new(0, 7, 4).validate().is_ok());
    }
}

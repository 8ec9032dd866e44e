use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::ClientError;

/// Lifecycle of a round. `finalizada` is terminal in practice: the console
/// never offers a transition out of it, though the backend does not forbid
/// one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    #[serde(rename = "pendiente")]
    Pending,
    #[serde(rename = "en_curso")]
    InProgress,
    #[serde(rename = "finalizada")]
    Finished,
}

impl RoundState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pendiente",
            Self::InProgress => "en_curso",
            Self::Finished => "finalizada",
        }
    }

    pub fn all() -> &'static [RoundState] {
        &[Self::Pending, Self::InProgress, Self::Finished]
    }

    /// The state the single start/stop control moves a round into: a running
    /// round is stopped back to pending, anything else is started.
    pub fn toggled(&self) -> RoundState {
        match self {
            Self::InProgress => Self::Pending,
            _ => Self::InProgress,
        }
    }

    fn parse_str(s: &str) -> Result<Self, ClientError> {
        let normalized = s.to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "pendiente" | "pending" => Ok(Self::Pending),
            "en_curso" | "in_progress" => Ok(Self::InProgress),
            "finalizada" | "finished" => Ok(Self::Finished),
            _ => Err(ClientError::UnexpectedResponse(format!(
                "Unknown round state: '{}'. Available: {}",
                s,
                Self::all()
                    .iter()
                    .map(|state| state.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))),
        }
    }
}

impl std::str::FromStr for RoundState {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for RoundState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackRef {
    pub id: i64,
    #[serde(rename = "nombrePista", default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamRef {
    pub id: i64,
    #[serde(rename = "nombreEquipo", default)]
    pub name: Option<String>,
}

/// Raw round record; references arrive in snake_case, unlike the rest of the
/// API surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Round {
    pub id: i64,
    #[serde(rename = "estado")]
    pub state: RoundState,
    #[serde(rename = "pista")]
    pub track: TrackRef,
    #[serde(rename = "equipo_rojo")]
    pub red_team: TeamRef,
    #[serde(rename = "equipo_azul")]
    pub blue_team: TeamRef,
}

/// Denormalized round view from `/rondas/details`, with names pre-joined the
/// same way `/equipos/details` does it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundDetail {
    pub id: i64,
    #[serde(rename = "estado")]
    pub state: RoundState,
    #[serde(rename = "pista", default)]
    pub track: String,
    #[serde(rename = "equipoRojo", default)]
    pub red_team: String,
    #[serde(rename = "equipoAzul", default)]
    pub blue_team: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRound {
    #[serde(rename = "estado")]
    pub state: RoundState,

    #[validate(range(min = 1))]
    #[serde(rename = "pistaId")]
    pub track_id: i64,

    #[validate(range(min = 1))]
    #[serde(rename = "equipoRojoId")]
    pub red_team_id: i64,

    #[validate(range(min = 1))]
    #[serde(rename = "equipoAzulId")]
    pub blue_team_id: i64,
}

/// PATCH payload; relation keys are the snake_case variants the backend
/// expects on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateRound {
    #[serde(rename = "estado", skip_serializing_if = "Option::is_none")]
    pub state: Option<RoundState>,

    #[validate(range(min = 1))]
    #[serde(rename = "pista", skip_serializing_if = "Option::is_none")]
    pub track_id: Option<i64>,

    #[validate(range(min = 1))]
    #[serde(rename = "equipo_rojo", skip_serializing_if = "Option::is_none")]
    pub red_team_id: Option<i64>,

    #[validate(range(min = 1))]
    #[serde(rename = "equipo_azul", skip_serializing_if = "Option::is_none")]
    pub blue_team_id: Option<i64>,
}

impl UpdateRound {
    pub fn state(state: RoundState) -> Self {
        Self {
            state: Some(state),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn state_parsing() {
        assert_eq!(RoundState::from_str("pendiente").unwrap(), RoundState::Pending);
        assert_eq!(RoundState::from_str("EN_CURSO").unwrap(), RoundState::InProgress);
        assert_eq!(RoundState::from_str("in-progress").unwrap(), RoundState::InProgress);
        assert_eq!(RoundState::from_str("finished").unwrap(), RoundState::Finished);
        assert!(RoundState::from_str("cancelada").is_err());
    }

    #[test]
    fn toggle_is_derived_from_current_state() {
        assert_eq!(RoundState::Pending.toggled(), RoundState::InProgress);
        assert_eq!(RoundState::InProgress.toggled(), RoundState::Pending);
        // No client-side guard for finished rounds.
        assert_eq!(RoundState::Finished.toggled(), RoundState::InProgress);
    }

    #[test]
    fn round_decodes_snake_case_references() {
        let round: Round = serde_json::from_str(
            r#"{"id":7,"estado":"en_curso","pista":{"id":1},"equipo_rojo":{"id":4,"nombreEquipo":"Rojos"},"equipo_azul":{"id":9}}"#,
        )
        .unwrap();

        assert_eq!(round.state, RoundState::InProgress);
        assert_eq!(round.track.id, 1);
        assert_eq!(round.red_team.name.as_deref(), Some("Rojos"));
        assert!(round.blue_team.name.is_none());
    }

    #[test]
    fn state_only_update_serializes_one_key() {
        let payload = UpdateRound::state(RoundState::Finished);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json, serde_json::json!({"estado": "finalizada"}));
    }
}

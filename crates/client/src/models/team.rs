use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: i64,
    #[serde(rename = "nombreEquipo")]
    pub name: String,
}

/// Denormalized team view from `/equipos/details`: member and tutor names
/// come pre-joined as display strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamDetail {
    pub id: i64,
    #[serde(rename = "nombreEquipo")]
    pub name: String,
    #[serde(rename = "participantes", default)]
    pub participants: String,
    #[serde(rename = "tutores", default)]
    pub tutors: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTeam {
    #[validate(length(min = 1, max = 255, message = "Team name is required"))]
    #[serde(rename = "nombreEquipo")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTeam {
    #[validate(length(min = 1, max = 255))]
    #[serde(rename = "nombreEquipo", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

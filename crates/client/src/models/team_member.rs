use serde::{Deserialize, Serialize};
use validator::Validate;

use super::team::Team;

/// Join record tying a participant to a team.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: i64,
    #[serde(rename = "equipo", default)]
    pub team: Option<Team>,
    #[serde(rename = "participante", default)]
    pub participant: Option<MemberParticipant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberParticipant {
    pub id: i64,
    #[serde(rename = "nombreCompleto", default)]
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTeamMember {
    #[validate(range(min = 1))]
    #[serde(rename = "equipoId")]
    pub team_id: i64,

    #[validate(range(min = 1))]
    #[serde(rename = "participanteId")]
    pub participant_id: i64,
}

/// The backend expects the bare relation names on update, not the `...Id`
/// keys used on create.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTeamMember {
    #[validate(range(min = 1))]
    #[serde(rename = "equipo", skip_serializing_if = "Option::is_none")]
    pub team_id: Option<i64>,

    #[validate(range(min = 1))]
    #[serde(rename = "participante", skip_serializing_if = "Option::is_none")]
    pub participant_id: Option<i64>,
}

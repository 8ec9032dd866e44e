use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Track {
    pub id: i64,
    #[serde(rename = "nombrePista")]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTrack {
    #[validate(length(min = 1, max = 255, message = "Track name is required"))]
    #[serde(rename = "nombrePista")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTrack {
    #[validate(length(min = 1, max = 255))]
    #[serde(rename = "nombrePista", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

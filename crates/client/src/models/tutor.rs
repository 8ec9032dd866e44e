use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tutor {
    pub id: i64,
    #[serde(rename = "nombreCompleto")]
    pub full_name: String,
    #[serde(rename = "carnetIdentidad")]
    pub national_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateTutor {
    #[validate(length(min = 1, max = 255, message = "Full name is required"))]
    #[serde(rename = "nombreCompleto")]
    pub full_name: String,

    #[validate(length(min = 1, max = 50, message = "National ID is required"))]
    #[serde(rename = "carnetIdentidad")]
    pub national_id: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateTutor {
    #[validate(length(min = 1, max = 255))]
    #[serde(rename = "nombreCompleto", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[validate(length(min = 1, max = 50))]
    #[serde(rename = "carnetIdentidad", skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
    #[serde(rename = "nombreCompleto")]
    pub full_name: String,
    #[serde(rename = "carnetIdentidad")]
    pub national_id: String,
    #[serde(rename = "fechaNacimiento")]
    pub birth_date: NaiveDate,
    #[serde(rename = "departamento")]
    pub department: String,
    #[serde(rename = "provincia")]
    pub province: String,
    #[serde(rename = "municipio")]
    pub municipality: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateParticipant {
    #[validate(length(min = 1, max = 255, message = "Full name is required"))]
    #[serde(rename = "nombreCompleto")]
    pub full_name: String,

    #[validate(length(min = 1, max = 50, message = "National ID is required"))]
    #[serde(rename = "carnetIdentidad")]
    pub national_id: String,

    #[serde(rename = "fechaNacimiento")]
    pub birth_date: NaiveDate,

    #[validate(length(min = 1, max = 100))]
    #[serde(rename = "departamento")]
    pub department: String,

    #[validate(length(min = 1, max = 100))]
    #[serde(rename = "provincia")]
    pub province: String,

    #[validate(length(min = 1, max = 100))]
    #[serde(rename = "municipio")]
    pub municipality: String,
}

/// PATCH payload; only fields that are set are sent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateParticipant {
    #[validate(length(min = 1, max = 255))]
    #[serde(rename = "nombreCompleto", skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[validate(length(min = 1, max = 50))]
    #[serde(rename = "carnetIdentidad", skip_serializing_if = "Option::is_none")]
    pub national_id: Option<String>,

    #[serde(rename = "fechaNacimiento", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 100))]
    #[serde(rename = "departamento", skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,

    #[validate(length(min = 1, max = 100))]
    #[serde(rename = "provincia", skip_serializing_if = "Option::is_none")]
    pub province: Option<String>,

    #[validate(length(min = 1, max = 100))]
    #[serde(rename = "municipio", skip_serializing_if = "Option::is_none")]
    pub municipality: Option<String>,
}

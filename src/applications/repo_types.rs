use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

/// Driver application record in the database. Mutated only by archive
/// toggling, never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: Uuid,
    pub full_name: String,
    pub phone_number: String,
    pub email: String,
    pub cdl_license: String,
    pub state: String,
    pub driving_experience: String,
    pub truck_types: Vec<String>,
    pub long_haul_trips: String, // "yes" | "no"
    pub comments: Option<String>,
    pub archived: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

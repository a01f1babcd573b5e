use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// A room classification (lecture hall, laboratory, seminar room, ...).
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ClassroomType {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClassroomTypeDto {
    /// Must be absent - ids are assigned by the server
    pub id: Option<Uuid>,
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::modules::classroom_types::model::ClassroomType;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Classroom {
    pub id: Uuid,
    pub name: String,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A classroom with its room classifications and assigned equipment.
#[derive(Debug, Serialize, ToSchema)]
pub struct ClassroomWithDetails {
    pub id: Uuid,
    pub name: String,
    pub capacity: i32,
    pub types: Vec<ClassroomType>,
    pub equipments: Vec<RoomEquipment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An equipment type assigned to a room with its quantity.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RoomEquipment {
    pub id: Uuid,
    pub classroom_id: Uuid,
    pub equipment_type_id: Uuid,
    pub equipment_type_name: String,
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClassroomDto {
    /// Must be absent - ids are assigned by the server
    pub id: Option<Uuid>,
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: String,
    #[validate(range(min = 1, message = "capacity must be positive"))]
    pub capacity: i32,
    /// Room classifications; at least one is required
    #[validate(length(min = 1, message = "at least one classroom type is required"))]
    pub type_ids: Vec<Uuid>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateClassroomDto {
    #[validate(length(min = 1, max = 100, message = "name must be between 1 and 100 characters"))]
    pub name: Option<String>,
    #[validate(range(min = 1, message = "capacity must be positive"))]
    pub capacity: Option<i32>,
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct ClassroomFilterParams {
    pub name: Option<String>,
    #[serde(flatten)]
    pub pagination: crate::utils::pagination::PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedClassroomsResponse {
    pub data: Vec<Classroom>,
    pub meta: crate::utils::pagination::PaginationMeta,
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct AssignEquipmentParams {
    /// Number of units of the equipment available in the room
    pub quantity: i32,
}

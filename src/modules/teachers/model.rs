use campushub_models::value_types::{Email, PhoneNumber};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Teacher {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A teacher with all their contact details.
#[derive(Debug, Serialize, ToSchema)]
pub struct TeacherWithContacts {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub phones: Vec<PhoneContact>,
    pub emails: Vec<EmailContact>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A phone contact: a classification paired with a canonical number.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct PhoneContact {
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub contact_type_id: Uuid,
    pub contact_type_name: String,
    /// Always in canonical form (`+336 XX XX XX XX`)
    pub number: PhoneNumber,
    pub created_at: DateTime<Utc>,
}

/// An email contact: a classification paired with a validated address.
#[derive(Debug, Serialize, FromRow, ToSchema)]
pub struct EmailContact {
    pub id: Uuid,
    pub teacher_id: Uuid,
    pub contact_type_id: Uuid,
    pub contact_type_name: String,
    pub address: Email,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateTeacherDto {
    /// Must be absent - ids are assigned by the server
    pub id: Option<Uuid>,
    #[validate(length(min = 1, max = 100, message = "first_name must be between 1 and 100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "last_name must be between 1 and 100 characters"))]
    pub last_name: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateTeacherDto {
    #[validate(length(min = 1, max = 100, message = "first_name must be between 1 and 100 characters"))]
    pub first_name: Option<String>,
    #[validate(length(min = 1, max = 100, message = "last_name must be between 1 and 100 characters"))]
    pub last_name: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema, utoipa::IntoParams)]
pub struct TeacherFilterParams {
    /// Matches against first and last name
    pub name: Option<String>,
    #[serde(flatten)]
    pub pagination: crate::utils::pagination::PaginationParams,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PaginatedTeachersResponse {
    pub data: Vec<Teacher>,
    pub meta: crate::utils::pagination::PaginationMeta,
}

/// Raw phone input; normalization happens in the service so format errors
/// can be reported with the offending input.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddPhoneContactDto {
    pub contact_type_id: Uuid,
    pub number: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct AddEmailContactDto {
    pub contact_type_id: Uuid,
    pub address: String,
}

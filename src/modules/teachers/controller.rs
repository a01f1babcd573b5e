use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::teachers::model::{
    AddEmailContactDto, AddPhoneContactDto, CreateTeacherDto, EmailContact,
    PaginatedTeachersResponse, PhoneContact, Teacher, TeacherFilterParams, TeacherWithContacts,
    UpdateTeacherDto,
};
use crate::modules::teachers::service::TeacherService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/teachers",
    request_body = CreateTeacherDto,
    responses(
        (status = 201, description = "Teacher created", body = Teacher),
        (status = 400, description = "Pre-assigned id"),
        (status = 422, description = "Invalid input")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn create_teacher(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateTeacherDto>,
) -> Result<(StatusCode, Json<Teacher>), AppError> {
    if dto.id.is_some() {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Cannot create a teacher with a pre-assigned id"
        )));
    }

    let teacher = TeacherService::create_teacher(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(teacher)))
}

#[utoipa::path(
    get,
    path = "/api/teachers",
    params(TeacherFilterParams),
    responses(
        (status = 200, description = "List of teachers", body = PaginatedTeachersResponse)
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teachers(
    State(state): State<AppState>,
    Query(filters): Query<TeacherFilterParams>,
) -> Result<Json<PaginatedTeachersResponse>, AppError> {
    let teachers = TeacherService::get_teachers(&state.db, filters).await?;

    Ok(Json(teachers))
}

#[utoipa::path(
    get,
    path = "/api/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 200, description = "Teacher with contact details", body = TeacherWithContacts),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn get_teacher_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TeacherWithContacts>, AppError> {
    let teacher = TeacherService::get_teacher_by_id(&state.db, id).await?;

    Ok(Json(teacher))
}

#[utoipa::path(
    put,
    path = "/api/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    request_body = UpdateTeacherDto,
    responses(
        (status = 200, description = "Teacher updated", body = Teacher),
        (status = 404, description = "Teacher not found"),
        (status = 422, description = "Invalid input")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn update_teacher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateTeacherDto>,
) -> Result<Json<Teacher>, AppError> {
    let teacher = TeacherService::update_teacher(&state.db, id, dto).await?;

    Ok(Json(teacher))
}

#[utoipa::path(
    delete,
    path = "/api/teachers/{id}",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    responses(
        (status = 204, description = "Teacher deleted"),
        (status = 404, description = "Teacher not found")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    TeacherService::delete_teacher(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/teachers/{id}/phones",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    request_body = AddPhoneContactDto,
    responses(
        (status = 201, description = "Phone contact added, number stored canonical", body = PhoneContact),
        (status = 400, description = "Malformed phone number or wrong contact type kind"),
        (status = 404, description = "Teacher or contact type not found"),
        (status = 422, description = "Blank phone number")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn add_phone_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<AddPhoneContactDto>,
) -> Result<(StatusCode, Json<PhoneContact>), AppError> {
    let phone = TeacherService::add_phone(&state.db, id, dto).await?;

    Ok((StatusCode::CREATED, Json(phone)))
}

#[utoipa::path(
    delete,
    path = "/api/teachers/{id}/phones/{phone_id}",
    params(
        ("id" = Uuid, Path, description = "Teacher ID"),
        ("phone_id" = Uuid, Path, description = "Phone contact ID")
    ),
    responses(
        (status = 204, description = "Phone contact removed"),
        (status = 404, description = "Phone contact not found")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn remove_phone_contact(
    State(state): State<AppState>,
    Path((id, phone_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    TeacherService::remove_phone(&state.db, id, phone_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/teachers/{id}/emails",
    params(("id" = Uuid, Path, description = "Teacher ID")),
    request_body = AddEmailContactDto,
    responses(
        (status = 201, description = "Email contact added", body = EmailContact),
        (status = 400, description = "Invalid email address or wrong contact type kind"),
        (status = 404, description = "Teacher or contact type not found"),
        (status = 422, description = "Blank email address")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn add_email_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<AddEmailContactDto>,
) -> Result<(StatusCode, Json<EmailContact>), AppError> {
    let email = TeacherService::add_email(&state.db, id, dto).await?;

    Ok((StatusCode::CREATED, Json(email)))
}

#[utoipa::path(
    delete,
    path = "/api/teachers/{id}/emails/{email_id}",
    params(
        ("id" = Uuid, Path, description = "Teacher ID"),
        ("email_id" = Uuid, Path, description = "Email contact ID")
    ),
    responses(
        (status = 204, description = "Email contact removed"),
        (status = 404, description = "Email contact not found")
    ),
    tag = "Teachers"
)]
#[instrument(skip(state))]
pub async fn remove_email_contact(
    State(state): State<AppState>,
    Path((id, email_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    TeacherService::remove_email(&state.db, id, email_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

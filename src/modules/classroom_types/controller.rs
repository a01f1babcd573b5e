use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::classroom_types::model::{ClassroomType, CreateClassroomTypeDto};
use crate::modules::classroom_types::service::ClassroomTypeService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/classroom-types",
    request_body = CreateClassroomTypeDto,
    responses(
        (status = 201, description = "Classroom type created", body = ClassroomType),
        (status = 400, description = "Pre-assigned id or duplicate name"),
        (status = 422, description = "Invalid input")
    ),
    tag = "Classroom types"
)]
#[instrument(skip(state))]
pub async fn create_classroom_type(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateClassroomTypeDto>,
) -> Result<(StatusCode, Json<ClassroomType>), AppError> {
    if dto.id.is_some() {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Cannot create a classroom type with a pre-assigned id"
        )));
    }

    let classroom_type = ClassroomTypeService::create_classroom_type(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(classroom_type)))
}

#[utoipa::path(
    get,
    path = "/api/classroom-types",
    responses(
        (status = 200, description = "List of classroom types", body = Vec<ClassroomType>)
    ),
    tag = "Classroom types"
)]
#[instrument(skip(state))]
pub async fn get_classroom_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClassroomType>>, AppError> {
    let types = ClassroomTypeService::get_classroom_types(&state.db).await?;

    Ok(Json(types))
}

#[utoipa::path(
    get,
    path = "/api/classroom-types/{id}",
    params(("id" = Uuid, Path, description = "Classroom type ID")),
    responses(
        (status = 200, description = "Classroom type details", body = ClassroomType),
        (status = 404, description = "Classroom type not found")
    ),
    tag = "Classroom types"
)]
#[instrument(skip(state))]
pub async fn get_classroom_type_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClassroomType>, AppError> {
    let classroom_type = ClassroomTypeService::get_classroom_type_by_id(&state.db, id).await?;

    Ok(Json(classroom_type))
}

#[utoipa::path(
    delete,
    path = "/api/classroom-types/{id}",
    params(("id" = Uuid, Path, description = "Classroom type ID")),
    responses(
        (status = 204, description = "Classroom type deleted"),
        (status = 404, description = "Classroom type not found")
    ),
    tag = "Classroom types"
)]
#[instrument(skip(state))]
pub async fn delete_classroom_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    ClassroomTypeService::delete_classroom_type(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

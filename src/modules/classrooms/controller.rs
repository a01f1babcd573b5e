use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::classrooms::model::{
    AssignEquipmentParams, Classroom, ClassroomFilterParams, ClassroomWithDetails,
    CreateClassroomDto, PaginatedClassroomsResponse, RoomEquipment, UpdateClassroomDto,
};
use crate::modules::classrooms::service::ClassroomService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/classrooms",
    request_body = CreateClassroomDto,
    responses(
        (status = 201, description = "Classroom created", body = ClassroomWithDetails),
        (status = 400, description = "Pre-assigned id or duplicate name"),
        (status = 404, description = "Referenced classroom type not found"),
        (status = 422, description = "Invalid input")
    ),
    tag = "Classrooms"
)]
#[instrument(skip(state))]
pub async fn create_classroom(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateClassroomDto>,
) -> Result<(StatusCode, Json<ClassroomWithDetails>), AppError> {
    if dto.id.is_some() {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Cannot create a classroom with a pre-assigned id"
        )));
    }

    let classroom = ClassroomService::create_classroom(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(classroom)))
}

#[utoipa::path(
    get,
    path = "/api/classrooms",
    params(ClassroomFilterParams),
    responses(
        (status = 200, description = "List of classrooms", body = PaginatedClassroomsResponse)
    ),
    tag = "Classrooms"
)]
#[instrument(skip(state))]
pub async fn get_classrooms(
    State(state): State<AppState>,
    Query(filters): Query<ClassroomFilterParams>,
) -> Result<Json<PaginatedClassroomsResponse>, AppError> {
    let classrooms = ClassroomService::get_classrooms(&state.db, filters).await?;

    Ok(Json(classrooms))
}

#[utoipa::path(
    get,
    path = "/api/classrooms/{id}",
    params(("id" = Uuid, Path, description = "Classroom ID")),
    responses(
        (status = 200, description = "Classroom details", body = ClassroomWithDetails),
        (status = 404, description = "Classroom not found")
    ),
    tag = "Classrooms"
)]
#[instrument(skip(state))]
pub async fn get_classroom_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ClassroomWithDetails>, AppError> {
    let classroom = ClassroomService::get_classroom_by_id(&state.db, id).await?;

    Ok(Json(classroom))
}

#[utoipa::path(
    put,
    path = "/api/classrooms/{id}",
    params(("id" = Uuid, Path, description = "Classroom ID")),
    request_body = UpdateClassroomDto,
    responses(
        (status = 200, description = "Classroom updated", body = Classroom),
        (status = 400, description = "Duplicate name"),
        (status = 404, description = "Classroom not found"),
        (status = 422, description = "Invalid input")
    ),
    tag = "Classrooms"
)]
#[instrument(skip(state))]
pub async fn update_classroom(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateClassroomDto>,
) -> Result<Json<Classroom>, AppError> {
    let classroom = ClassroomService::update_classroom(&state.db, id, dto).await?;

    Ok(Json(classroom))
}

#[utoipa::path(
    delete,
    path = "/api/classrooms/{id}",
    params(("id" = Uuid, Path, description = "Classroom ID")),
    responses(
        (status = 204, description = "Classroom deleted"),
        (status = 404, description = "Classroom not found")
    ),
    tag = "Classrooms"
)]
#[instrument(skip(state))]
pub async fn delete_classroom(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    ClassroomService::delete_classroom(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/classrooms/{id}/equipment-types/{equipment_type_id}",
    params(
        ("id" = Uuid, Path, description = "Classroom ID"),
        ("equipment_type_id" = Uuid, Path, description = "Equipment type ID"),
        AssignEquipmentParams
    ),
    responses(
        (status = 201, description = "Equipment assigned to the classroom", body = RoomEquipment),
        (status = 400, description = "Equipment already assigned or non-positive quantity"),
        (status = 404, description = "Classroom or equipment type not found")
    ),
    tag = "Classrooms"
)]
#[instrument(skip(state))]
pub async fn assign_equipment(
    State(state): State<AppState>,
    Path((id, equipment_type_id)): Path<(Uuid, Uuid)>,
    Query(params): Query<AssignEquipmentParams>,
) -> Result<(StatusCode, Json<RoomEquipment>), AppError> {
    let room_equipment =
        ClassroomService::assign_equipment(&state.db, id, equipment_type_id, params.quantity)
            .await?;

    Ok((StatusCode::CREATED, Json(room_equipment)))
}

#[utoipa::path(
    delete,
    path = "/api/classrooms/{id}/equipment-types/{equipment_type_id}",
    params(
        ("id" = Uuid, Path, description = "Classroom ID"),
        ("equipment_type_id" = Uuid, Path, description = "Equipment type ID")
    ),
    responses(
        (status = 204, description = "Equipment assignment removed"),
        (status = 404, description = "Equipment is not assigned to this classroom")
    ),
    tag = "Classrooms"
)]
#[instrument(skip(state))]
pub async fn remove_equipment(
    State(state): State<AppState>,
    Path((id, equipment_type_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, AppError> {
    ClassroomService::remove_equipment(&state.db, id, equipment_type_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

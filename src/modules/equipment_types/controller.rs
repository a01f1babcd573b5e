use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::equipment_types::model::{
    CreateEquipmentTypeDto, EquipmentType, UpdateEquipmentTypeDto,
};
use crate::modules::equipment_types::service::EquipmentTypeService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/equipment-types",
    request_body = CreateEquipmentTypeDto,
    responses(
        (status = 201, description = "Equipment type created", body = EquipmentType),
        (status = 400, description = "Pre-assigned id or duplicate name"),
        (status = 422, description = "Invalid input")
    ),
    tag = "Equipment types"
)]
#[instrument(skip(state))]
pub async fn create_equipment_type(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateEquipmentTypeDto>,
) -> Result<(StatusCode, Json<EquipmentType>), AppError> {
    if dto.id.is_some() {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Cannot create an equipment type with a pre-assigned id"
        )));
    }

    let equipment_type = EquipmentTypeService::create_equipment_type(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(equipment_type)))
}

#[utoipa::path(
    get,
    path = "/api/equipment-types",
    responses(
        (status = 200, description = "List of equipment types", body = Vec<EquipmentType>)
    ),
    tag = "Equipment types"
)]
#[instrument(skip(state))]
pub async fn get_equipment_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<EquipmentType>>, AppError> {
    let types = EquipmentTypeService::get_equipment_types(&state.db).await?;

    Ok(Json(types))
}

#[utoipa::path(
    get,
    path = "/api/equipment-types/{id}",
    params(("id" = Uuid, Path, description = "Equipment type ID")),
    responses(
        (status = 200, description = "Equipment type details", body = EquipmentType),
        (status = 404, description = "Equipment type not found")
    ),
    tag = "Equipment types"
)]
#[instrument(skip(state))]
pub async fn get_equipment_type_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<EquipmentType>, AppError> {
    let equipment_type = EquipmentTypeService::get_equipment_type_by_id(&state.db, id).await?;

    Ok(Json(equipment_type))
}

#[utoipa::path(
    put,
    path = "/api/equipment-types/{id}",
    params(("id" = Uuid, Path, description = "Equipment type ID")),
    request_body = UpdateEquipmentTypeDto,
    responses(
        (status = 200, description = "Equipment type updated", body = EquipmentType),
        (status = 400, description = "Duplicate name"),
        (status = 404, description = "Equipment type not found"),
        (status = 422, description = "Invalid input")
    ),
    tag = "Equipment types"
)]
#[instrument(skip(state))]
pub async fn update_equipment_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<UpdateEquipmentTypeDto>,
) -> Result<Json<EquipmentType>, AppError> {
    let equipment_type = EquipmentTypeService::update_equipment_type(&state.db, id, dto).await?;

    Ok(Json(equipment_type))
}

#[utoipa::path(
    delete,
    path = "/api/equipment-types/{id}",
    params(("id" = Uuid, Path, description = "Equipment type ID")),
    responses(
        (status = 204, description = "Equipment type deleted"),
        (status = 404, description = "Equipment type not found")
    ),
    tag = "Equipment types"
)]
#[instrument(skip(state))]
pub async fn delete_equipment_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    EquipmentTypeService::delete_equipment_type(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

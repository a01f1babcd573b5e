use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::modules::contact_types::model::{
    ContactType, ContactTypeFilterParams, CreateContactTypeDto,
};
use crate::modules::contact_types::service::ContactTypeService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/contact-types",
    request_body = CreateContactTypeDto,
    responses(
        (status = 201, description = "Contact type created", body = ContactType),
        (status = 400, description = "Pre-assigned id or duplicate name for this kind"),
        (status = 422, description = "Invalid input")
    ),
    tag = "Contact types"
)]
#[instrument(skip(state))]
pub async fn create_contact_type(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateContactTypeDto>,
) -> Result<(StatusCode, Json<ContactType>), AppError> {
    if dto.id.is_some() {
        return Err(AppError::bad_request(anyhow::anyhow!(
            "Cannot create a contact type with a pre-assigned id"
        )));
    }

    let contact_type = ContactTypeService::create_contact_type(&state.db, dto).await?;

    Ok((StatusCode::CREATED, Json(contact_type)))
}

#[utoipa::path(
    get,
    path = "/api/contact-types",
    params(ContactTypeFilterParams),
    responses(
        (status = 200, description = "List of contact types", body = Vec<ContactType>)
    ),
    tag = "Contact types"
)]
#[instrument(skip(state))]
pub async fn get_contact_types(
    State(state): State<AppState>,
    Query(filters): Query<ContactTypeFilterParams>,
) -> Result<Json<Vec<ContactType>>, AppError> {
    let types = ContactTypeService::get_contact_types(&state.db, filters).await?;

    Ok(Json(types))
}

#[utoipa::path(
    get,
    path = "/api/contact-types/{id}",
    params(("id" = Uuid, Path, description = "Contact type ID")),
    responses(
        (status = 200, description = "Contact type details", body = ContactType),
        (status = 404, description = "Contact type not found")
    ),
    tag = "Contact types"
)]
#[instrument(skip(state))]
pub async fn get_contact_type_by_id(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ContactType>, AppError> {
    let contact_type = ContactTypeService::get_contact_type_by_id(&state.db, id).await?;

    Ok(Json(contact_type))
}

#[utoipa::path(
    delete,
    path = "/api/contact-types/{id}",
    params(("id" = Uuid, Path, description = "Contact type ID")),
    responses(
        (status = 204, description = "Contact type deleted"),
        (status = 400, description = "Contact type still in use"),
        (status = 404, description = "Contact type not found")
    ),
    tag = "Contact types"
)]
#[instrument(skip(state))]
pub async fn delete_contact_type(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    ContactTypeService::delete_contact_type(&state.db, id).await?;

    Ok(StatusCode::NO_CONTENT)
}

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_equipment_type, delete_equipment_type, get_equipment_type_by_id, get_equipment_types,
    update_equipment_type,
};

pub fn init_equipment_types_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_equipment_type).get(get_equipment_types))
        .route(
            "/{id}",
            get(get_equipment_type_by_id)
                .put(update_equipment_type)
                .delete(delete_equipment_type),
        )
}

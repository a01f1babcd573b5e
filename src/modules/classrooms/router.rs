use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    assign_equipment, create_classroom, delete_classroom, get_classroom_by_id, get_classrooms,
    remove_equipment, update_classroom,
};

pub fn init_classrooms_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_classroom).get(get_classrooms))
        .route(
            "/{id}",
            get(get_classroom_by_id)
                .put(update_classroom)
                .delete(delete_classroom),
        )
        .route(
            "/{id}/equipment-types/{equipment_type_id}",
            post(assign_equipment).delete(remove_equipment),
        )
}

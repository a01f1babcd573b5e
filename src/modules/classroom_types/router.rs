use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_classroom_type, delete_classroom_type, get_classroom_type_by_id, get_classroom_types,
};

pub fn init_classroom_types_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_classroom_type).get(get_classroom_types))
        .route(
            "/{id}",
            get(get_classroom_type_by_id).delete(delete_classroom_type),
        )
}

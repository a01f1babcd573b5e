use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

use super::controller::{
    create_contact_type, delete_contact_type, get_contact_type_by_id, get_contact_types,
};

pub fn init_contact_types_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_contact_type).get(get_contact_types))
        .route(
            "/{id}",
            get(get_contact_type_by_id).delete(delete_contact_type),
        )
}

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::state::AppState;

use super::controller::{
    add_email_contact, add_phone_contact, create_teacher, delete_teacher, get_teacher_by_id,
    get_teachers, remove_email_contact, remove_phone_contact, update_teacher,
};

pub fn init_teachers_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_teacher).get(get_teachers))
        .route(
            "/{id}",
            get(get_teacher_by_id)
                .put(update_teacher)
                .delete(delete_teacher),
        )
        .route("/{id}/phones", post(add_phone_contact))
        .route("/{id}/phones/{phone_id}", delete(remove_phone_contact))
        .route("/{id}/emails", post(add_email_contact))
        .route("/{id}/emails/{email_id}", delete(remove_email_contact))
}

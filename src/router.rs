use crate::docs::ApiDoc;
use crate::logging::logging_middleware;
use crate::modules::classroom_types::router::init_classroom_types_router;
use crate::modules::classrooms::router::init_classrooms_router;
use crate::modules::contact_types::router::init_contact_types_router;
use crate::modules::equipment_types::router::init_equipment_types_router;
use crate::modules::teachers::router::init_teachers_router;
use crate::state::AppState;
use axum::http::{HeaderValue, Method};
use axum::{Router, middleware};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

pub fn init_router(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest(
            "/api",
            Router::new()
                .nest("/classrooms", init_classrooms_router())
                .nest("/classroom-types", init_classroom_types_router())
                .nest("/equipment-types", init_equipment_types_router())
                .nest("/contact-types", init_contact_types_router())
                .nest("/teachers", init_teachers_router()),
        )
        .with_state(state.clone())
        .layer({
            let allowed_origins: Vec<HeaderValue> = state
                .cors_config
                .allowed_origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(allowed_origins)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PUT,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::ACCEPT,
                ])
        })
        .layer(middleware::from_fn(logging_middleware))
}

use campushub::config::cors::CorsConfig;
use campushub::router::init_router;
use campushub::state::AppState;
use sqlx::PgPool;
use uuid::Uuid;

pub fn setup_test_app(pool: PgPool) -> axum::Router {
    let state = AppState {
        db: pool,
        cors_config: CorsConfig {
            allowed_origins: vec!["http://localhost:3000".to_string()],
        },
    };
    init_router(state)
}

pub fn generate_unique_name(prefix: &str) -> String {
    format!("{} {}", prefix, Uuid::new_v4())
}

#[allow(dead_code)]
pub async fn create_test_classroom_type(pool: &PgPool, name: &str) -> Uuid {
    sqlx::query_scalar("INSERT INTO classroom_types (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_equipment_type(pool: &PgPool, name: &str) -> Uuid {
    sqlx::query_scalar("INSERT INTO equipment_types (name) VALUES ($1) RETURNING id")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_contact_type(pool: &PgPool, kind: &str, name: &str) -> Uuid {
    sqlx::query_scalar("INSERT INTO contact_types (kind, name) VALUES ($1, $2) RETURNING id")
        .bind(kind)
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap()
}

#[allow(dead_code)]
pub async fn create_test_teacher(pool: &PgPool, first_name: &str, last_name: &str) -> Uuid {
    sqlx::query_scalar(
        "INSERT INTO teachers (first_name, last_name) VALUES ($1, $2) RETURNING id",
    )
    .bind(first_name)
    .bind(last_name)
    .fetch_one(pool)
    .await
    .unwrap()
}

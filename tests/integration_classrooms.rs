mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{
    create_test_classroom_type, create_test_equipment_type, generate_unique_name, setup_test_app,
};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

async fn create_classroom(
    app: axum::Router,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/classrooms")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, body)
}

async fn get_json(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    (status, body)
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_classroom(pool: PgPool) {
    let type_id = create_test_classroom_type(&pool, &generate_unique_name("Lecture hall")).await;

    let app = setup_test_app(pool.clone());
    let (status, body) = create_classroom(
        app,
        json!({
            "name": "Amphitheater 3005",
            "capacity": 120,
            "type_ids": [type_id]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_string());
    assert_eq!(body["name"], "Amphitheater 3005");
    assert_eq!(body["capacity"], 120);
    assert_eq!(body["types"][0]["id"], json!(type_id));
    assert_eq!(body["equipments"], json!([]));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_classroom_rejects_pre_assigned_id(pool: PgPool) {
    let type_id = create_test_classroom_type(&pool, &generate_unique_name("Lab")).await;

    let app = setup_test_app(pool.clone());
    let (status, body) = create_classroom(
        app,
        json!({
            "id": Uuid::new_v4(),
            "name": "SL6",
            "capacity": 30,
            "type_ids": [type_id]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("pre-assigned"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_classroom_rejects_duplicate_name(pool: PgPool) {
    let type_id = create_test_classroom_type(&pool, &generate_unique_name("Lab")).await;

    let payload = json!({
        "name": "Room B12",
        "capacity": 25,
        "type_ids": [type_id]
    });

    let (status, _) = create_classroom(setup_test_app(pool.clone()), payload.clone()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = create_classroom(setup_test_app(pool.clone()), payload).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("already exists"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_classroom_rejects_unknown_type(pool: PgPool) {
    let app = setup_test_app(pool.clone());
    let (status, _) = create_classroom(
        app,
        json!({
            "name": "Room C1",
            "capacity": 40,
            "type_ids": [Uuid::new_v4()]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_classroom_rejects_invalid_input(pool: PgPool) {
    let type_id = create_test_classroom_type(&pool, &generate_unique_name("Lab")).await;

    // Non-positive capacity
    let (status, _) = create_classroom(
        setup_test_app(pool.clone()),
        json!({"name": "Room D1", "capacity": 0, "type_ids": [type_id]}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // No classroom types
    let (status, _) = create_classroom(
        setup_test_app(pool.clone()),
        json!({"name": "Room D2", "capacity": 10, "type_ids": []}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    // Blank name
    let (status, _) = create_classroom(
        setup_test_app(pool.clone()),
        json!({"name": "   ", "capacity": 10, "type_ids": [type_id]}),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_classroom_by_id(pool: PgPool) {
    let type_id = create_test_classroom_type(&pool, &generate_unique_name("Lab")).await;
    let (_, created) = create_classroom(
        setup_test_app(pool.clone()),
        json!({"name": "Room E1", "capacity": 15, "type_ids": [type_id]}),
    )
    .await;

    let id = created["id"].as_str().unwrap();
    let (status, body) = get_json(
        setup_test_app(pool.clone()),
        &format!("/api/classrooms/{}", id),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], created["id"]);
    assert_eq!(body["name"], "Room E1");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_classroom_returns_404_when_missing(pool: PgPool) {
    let (status, _) = get_json(
        setup_test_app(pool.clone()),
        &format!("/api/classrooms/{}", Uuid::new_v4()),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_classrooms(pool: PgPool) {
    let type_id = create_test_classroom_type(&pool, &generate_unique_name("Lab")).await;
    for i in 0..3 {
        let (status, _) = create_classroom(
            setup_test_app(pool.clone()),
            json!({"name": format!("Room F{}", i), "capacity": 20, "type_ids": [type_id]}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = get_json(setup_test_app(pool.clone()), "/api/classrooms").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(body["meta"]["total"], 3);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_assign_equipment_to_classroom(pool: PgPool) {
    let type_id = create_test_classroom_type(&pool, &generate_unique_name("Lab")).await;
    let equipment_id = create_test_equipment_type(&pool, &generate_unique_name("Computer")).await;
    let (_, classroom) = create_classroom(
        setup_test_app(pool.clone()),
        json!({"name": "Room G1", "capacity": 20, "type_ids": [type_id]}),
    )
    .await;
    let classroom_id = classroom["id"].as_str().unwrap();

    let request = Request::builder()
        .method("POST")
        .uri(format!(
            "/api/classrooms/{}/equipment-types/{}?quantity=12",
            classroom_id, equipment_id
        ))
        .body(Body::empty())
        .unwrap();
    let response = setup_test_app(pool.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["equipment_type_id"], json!(equipment_id));
    assert_eq!(body["quantity"], 12);

    // The classroom detail view now lists the equipment
    let (_, detail) = get_json(
        setup_test_app(pool.clone()),
        &format!("/api/classrooms/{}", classroom_id),
    )
    .await;
    assert_eq!(detail["equipments"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_assign_equipment_rejects_duplicate_assignment(pool: PgPool) {
    let type_id = create_test_classroom_type(&pool, &generate_unique_name("Lab")).await;
    let equipment_id = create_test_equipment_type(&pool, &generate_unique_name("Computer")).await;
    let (_, classroom) = create_classroom(
        setup_test_app(pool.clone()),
        json!({"name": "Room H1", "capacity": 20, "type_ids": [type_id]}),
    )
    .await;
    let classroom_id = classroom["id"].as_str().unwrap();
    let uri = format!(
        "/api/classrooms/{}/equipment-types/{}?quantity=12",
        classroom_id, equipment_id
    );

    let request = Request::builder()
        .method("POST")
        .uri(&uri)
        .body(Body::empty())
        .unwrap();
    let response = setup_test_app(pool.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let request = Request::builder()
        .method("POST")
        .uri(&uri)
        .body(Body::empty())
        .unwrap();
    let response = setup_test_app(pool.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_assign_equipment_returns_404_for_missing_classroom(pool: PgPool) {
    let equipment_id = create_test_equipment_type(&pool, &generate_unique_name("Computer")).await;

    let request = Request::builder()
        .method("POST")
        .uri(format!(
            "/api/classrooms/{}/equipment-types/{}?quantity=12",
            Uuid::new_v4(),
            equipment_id
        ))
        .body(Body::empty())
        .unwrap();
    let response = setup_test_app(pool.clone()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_assign_equipment_returns_404_for_missing_equipment_type(pool: PgPool) {
    let type_id = create_test_classroom_type(&pool, &generate_unique_name("Lab")).await;
    let (_, classroom) = create_classroom(
        setup_test_app(pool.clone()),
        json!({"name": "Room I1", "capacity": 20, "type_ids": [type_id]}),
    )
    .await;

    let request = Request::builder()
        .method("POST")
        .uri(format!(
            "/api/classrooms/{}/equipment-types/{}?quantity=12",
            classroom["id"].as_str().unwrap(),
            Uuid::new_v4()
        ))
        .body(Body::empty())
        .unwrap();
    let response = setup_test_app(pool.clone()).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_remove_equipment_assignment(pool: PgPool) {
    let type_id = create_test_classroom_type(&pool, &generate_unique_name("Lab")).await;
    let equipment_id = create_test_equipment_type(&pool, &generate_unique_name("Computer")).await;
    let (_, classroom) = create_classroom(
        setup_test_app(pool.clone()),
        json!({"name": "Room J1", "capacity": 20, "type_ids": [type_id]}),
    )
    .await;
    let classroom_id = classroom["id"].as_str().unwrap();

    let request = Request::builder()
        .method("POST")
        .uri(format!(
            "/api/classrooms/{}/equipment-types/{}?quantity=4",
            classroom_id, equipment_id
        ))
        .body(Body::empty())
        .unwrap();
    let response = setup_test_app(pool.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!(
            "/api/classrooms/{}/equipment-types/{}",
            classroom_id, equipment_id
        ))
        .body(Body::empty())
        .unwrap();
    let response = setup_test_app(pool.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Removing again is a 404
    let request = Request::builder()
        .method("DELETE")
        .uri(format!(
            "/api/classrooms/{}/equipment-types/{}",
            classroom_id, equipment_id
        ))
        .body(Body::empty())
        .unwrap();
    let response = setup_test_app(pool.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

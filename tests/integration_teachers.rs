mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{create_test_contact_type, create_test_teacher, generate_unique_name, setup_test_app};
use http_body_util::BodyExt;
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

async fn post_json(
    app: axum::Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
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
async fn test_create_teacher(pool: PgPool) {
    let (status, body) = post_json(
        setup_test_app(pool.clone()),
        "/api/teachers",
        json!({"first_name": "Marie", "last_name": "Curie"}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_string());
    assert_eq!(body["first_name"], "Marie");
    assert_eq!(body["last_name"], "Curie");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_teacher_rejects_pre_assigned_id(pool: PgPool) {
    let (status, _) = post_json(
        setup_test_app(pool.clone()),
        "/api/teachers",
        json!({"id": Uuid::new_v4(), "first_name": "Marie", "last_name": "Curie"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_teacher_rejects_blank_names(pool: PgPool) {
    let (status, _) = post_json(
        setup_test_app(pool.clone()),
        "/api/teachers",
        json!({"first_name": "   ", "last_name": "Curie"}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_add_phone_contact_stores_canonical_form(pool: PgPool) {
    let teacher_id = create_test_teacher(&pool, "Marie", "Curie").await;
    let type_id =
        create_test_contact_type(&pool, "phone", &generate_unique_name("Professional")).await;

    let (status, body) = post_json(
        setup_test_app(pool.clone()),
        &format!("/api/teachers/{}/phones", teacher_id),
        json!({"contact_type_id": type_id, "number": "06.11.12.13.14"}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["number"], "+336 11 12 13 14");
    assert_eq!(body["contact_type_id"], json!(type_id));

    // Stored verbatim in canonical form
    let stored: String =
        sqlx::query_scalar("SELECT number FROM teacher_phones WHERE teacher_id = $1")
            .bind(teacher_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(stored, "+336 11 12 13 14");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_add_phone_contact_accepts_all_recognized_shapes(pool: PgPool) {
    let teacher_id = create_test_teacher(&pool, "Marie", "Curie").await;
    let type_id =
        create_test_contact_type(&pool, "phone", &generate_unique_name("Professional")).await;

    for input in ["0611121314", "+33611121314", "00336 11 12 13 14"] {
        let (status, body) = post_json(
            setup_test_app(pool.clone()),
            &format!("/api/teachers/{}/phones", teacher_id),
            json!({"contact_type_id": type_id, "number": input}),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED, "input {:?} was rejected", input);
        assert_eq!(body["number"], "+336 11 12 13 14");
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_add_phone_contact_rejects_malformed_number(pool: PgPool) {
    let teacher_id = create_test_teacher(&pool, "Marie", "Curie").await;
    let type_id =
        create_test_contact_type(&pool, "phone", &generate_unique_name("Professional")).await;

    let (status, body) = post_json(
        setup_test_app(pool.clone()),
        &format!("/api/teachers/{}/phones", teacher_id),
        json!({"contact_type_id": type_id, "number": "06 12 13"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    // The offending input is echoed back for diagnostics
    assert!(body["error"].as_str().unwrap().contains("06 12 13"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_add_phone_contact_rejects_blank_number_as_unprocessable(pool: PgPool) {
    let teacher_id = create_test_teacher(&pool, "Marie", "Curie").await;
    let type_id =
        create_test_contact_type(&pool, "phone", &generate_unique_name("Professional")).await;

    let (status, _) = post_json(
        setup_test_app(pool.clone()),
        &format!("/api/teachers/{}/phones", teacher_id),
        json!({"contact_type_id": type_id, "number": "   "}),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_add_phone_contact_rejects_email_classification(pool: PgPool) {
    let teacher_id = create_test_teacher(&pool, "Marie", "Curie").await;
    let email_type_id =
        create_test_contact_type(&pool, "email", &generate_unique_name("Personal")).await;

    let (status, _) = post_json(
        setup_test_app(pool.clone()),
        &format!("/api/teachers/{}/phones", teacher_id),
        json!({"contact_type_id": email_type_id, "number": "0611121314"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_add_phone_contact_returns_404_for_missing_teacher(pool: PgPool) {
    let type_id =
        create_test_contact_type(&pool, "phone", &generate_unique_name("Professional")).await;

    let (status, _) = post_json(
        setup_test_app(pool.clone()),
        &format!("/api/teachers/{}/phones", Uuid::new_v4()),
        json!({"contact_type_id": type_id, "number": "0611121314"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_add_phone_contact_returns_404_for_missing_contact_type(pool: PgPool) {
    let teacher_id = create_test_teacher(&pool, "Marie", "Curie").await;

    let (status, _) = post_json(
        setup_test_app(pool.clone()),
        &format!("/api/teachers/{}/phones", teacher_id),
        json!({"contact_type_id": Uuid::new_v4(), "number": "0611121314"}),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_add_email_contact(pool: PgPool) {
    let teacher_id = create_test_teacher(&pool, "Marie", "Curie").await;
    let type_id =
        create_test_contact_type(&pool, "email", &generate_unique_name("Professional")).await;

    let (status, body) = post_json(
        setup_test_app(pool.clone()),
        &format!("/api/teachers/{}/emails", teacher_id),
        json!({"contact_type_id": type_id, "address": "marie.curie@univ.fr"}),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["address"], "marie.curie@univ.fr");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_add_email_contact_rejects_invalid_address(pool: PgPool) {
    let teacher_id = create_test_teacher(&pool, "Marie", "Curie").await;
    let type_id =
        create_test_contact_type(&pool, "email", &generate_unique_name("Professional")).await;

    let (status, body) = post_json(
        setup_test_app(pool.clone()),
        &format!("/api/teachers/{}/emails", teacher_id),
        json!({"contact_type_id": type_id, "address": "not-an-email"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("not-an-email"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_teacher_includes_contacts(pool: PgPool) {
    let teacher_id = create_test_teacher(&pool, "Marie", "Curie").await;
    let phone_type =
        create_test_contact_type(&pool, "phone", &generate_unique_name("Professional")).await;
    let email_type =
        create_test_contact_type(&pool, "email", &generate_unique_name("Professional")).await;

    post_json(
        setup_test_app(pool.clone()),
        &format!("/api/teachers/{}/phones", teacher_id),
        json!({"contact_type_id": phone_type, "number": "06 11 12 13 14"}),
    )
    .await;
    post_json(
        setup_test_app(pool.clone()),
        &format!("/api/teachers/{}/emails", teacher_id),
        json!({"contact_type_id": email_type, "address": "marie.curie@univ.fr"}),
    )
    .await;

    let (status, body) = get_json(
        setup_test_app(pool.clone()),
        &format!("/api/teachers/{}", teacher_id),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["phones"].as_array().unwrap().len(), 1);
    assert_eq!(body["phones"][0]["number"], "+336 11 12 13 14");
    assert_eq!(body["emails"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_remove_phone_contact(pool: PgPool) {
    let teacher_id = create_test_teacher(&pool, "Marie", "Curie").await;
    let type_id =
        create_test_contact_type(&pool, "phone", &generate_unique_name("Professional")).await;

    let (_, phone) = post_json(
        setup_test_app(pool.clone()),
        &format!("/api/teachers/{}/phones", teacher_id),
        json!({"contact_type_id": type_id, "number": "0611121314"}),
    )
    .await;
    let phone_id = phone["id"].as_str().unwrap();

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/teachers/{}/phones/{}", teacher_id, phone_id))
        .body(Body::empty())
        .unwrap();
    let response = setup_test_app(pool.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/teachers/{}/phones/{}", teacher_id, phone_id))
        .body(Body::empty())
        .unwrap();
    let response = setup_test_app(pool.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_teacher_cascades_contacts(pool: PgPool) {
    let teacher_id = create_test_teacher(&pool, "Marie", "Curie").await;
    let type_id =
        create_test_contact_type(&pool, "phone", &generate_unique_name("Professional")).await;
    post_json(
        setup_test_app(pool.clone()),
        &format!("/api/teachers/{}/phones", teacher_id),
        json!({"contact_type_id": type_id, "number": "0611121314"}),
    )
    .await;

    let request = Request::builder()
        .method("DELETE")
        .uri(format!("/api/teachers/{}", teacher_id))
        .body(Body::empty())
        .unwrap();
    let response = setup_test_app(pool.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let remaining: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM teacher_phones WHERE teacher_id = $1")
            .bind(teacher_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(remaining, 0);
}

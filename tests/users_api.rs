//! HTTP-level tests for the `/user` endpoints.

mod common;

use axum::http::StatusCode;
use common::{delete, get, post_json, put_json, test_pool};
use serde_json::{json, Value};

fn han() -> Value {
    json!({"username": "han", "email": "han@falcon.test", "password": "chewie"})
}

#[tokio::test]
async fn created_user_is_served_without_password() {
    let pool = test_pool().await;
    let (status, body) = post_json(&pool, "/user", han()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["msg"], "User has been added successfully");

    let (status, body) = get(&pool, "/user/1").await;
    assert_eq!(status, StatusCode::OK);
    let info = &body["user_info"];
    assert_eq!(info["username"], "han");
    assert_eq!(info["email"], "han@falcon.test");
    assert_eq!(info["id"], 1);
    assert!(info.get("password").is_none());

    let (_, body) = get(&pool, "/user").await;
    let users = body["users"].as_array().unwrap();
    assert_eq!(users.len(), 1);
    assert!(users[0].get("password").is_none());
}

#[tokio::test]
async fn create_reports_missing_email() {
    let pool = test_pool().await;
    let (status, body) = post_json(&pool, "/user", json!({"username": "leia", "password": "x"})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "You must send an email");
}

#[tokio::test]
async fn update_changes_username_and_email() {
    let pool = test_pool().await;
    post_json(&pool, "/user", han()).await;
    let (status, body) = put_json(
        &pool,
        "/user",
        json!({"id": 1, "username": "solo", "email": "solo@falcon.test"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "User has been updated successfully");

    let (_, body) = get(&pool, "/user/1").await;
    assert_eq!(body["user_info"]["username"], "solo");
    assert_eq!(body["user_info"]["email"], "solo@falcon.test");
}

#[tokio::test]
async fn update_of_unknown_user_is_guarded() {
    let pool = test_pool().await;
    let (status, body) = put_json(
        &pool,
        "/user",
        json!({"id": 12, "username": "ghost", "email": "ghost@test"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "The id 12 user doesn't exist");
}

#[tokio::test]
async fn missing_user_echoes_id() {
    let pool = test_pool().await;
    let (status, body) = get(&pool, "/user/8").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "The id 8 user doesn't exist");
}

#[tokio::test]
async fn delete_twice_reports_missing_user_as_400() {
    let pool = test_pool().await;
    post_json(&pool, "/user", han()).await;
    let (status, body) = delete(&pool, "/user/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "User has been deleted successfully");

    let (status, body) = delete(&pool, "/user/1").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["msg"], "This user doesn't exist");
}

#[tokio::test]
async fn duplicate_username_is_a_store_failure() {
    let pool = test_pool().await;
    post_json(&pool, "/user", han()).await;
    let mut dup = han();
    dup["email"] = json!("other@falcon.test");
    let (status, _) = post_json(&pool, "/user", dup).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn null_username_is_stored_as_null() {
    let pool = test_pool().await;
    let (status, body) = post_json(
        &pool,
        "/user",
        json!({"username": null, "email": "a@b", "password": "x"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["msg"], "User has been added successfully");

    let (_, body) = get(&pool, "/user/1").await;
    assert_eq!(body["user_info"]["username"], json!(null));
    assert_eq!(body["user_info"]["email"], "a@b");
}

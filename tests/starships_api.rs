//! HTTP-level tests for the `/starships` endpoints.

mod common;

use axum::http::StatusCode;
use common::{delete, get, post_json, put_json, test_pool, x_wing};
use serde_json::json;

#[tokio::test]
async fn create_then_fetch_starship() {
    let pool = test_pool().await;
    let (status, _) = post_json(&pool, "/starships", x_wing()).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get(&pool, "/starships/1").await;
    assert_eq!(status, StatusCode::OK);
    let info = &body["starship_info"];
    assert_eq!(info["starship_name"], "X-wing");
    assert_eq!(info["model"], "T-65 X-wing");
    assert_eq!(info["starship_class"], "Starfighter");
    assert_eq!(info["length"], "12.5");
    assert_eq!(info["crew"], "1");

    let (_, body) = get(&pool, "/starships").await;
    assert_eq!(body["starships"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn missing_starship_is_404() {
    let pool = test_pool().await;
    let (status, body) = get(&pool, "/starships/5").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "The id 5 starship doesn't exist");
}

#[tokio::test]
async fn create_reports_missing_crew() {
    let pool = test_pool().await;
    let mut body = x_wing();
    body.as_object_mut().unwrap().remove("crew");
    let (status, body) = post_json(&pool, "/starships", body).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "You must send the starship crew value");
}

#[tokio::test]
async fn update_checks_id_first() {
    let pool = test_pool().await;
    let (status, body) = put_json(&pool, "/starships", json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "you must send the starship id to be modified");
}

#[tokio::test]
async fn update_overwrites_starship() {
    let pool = test_pool().await;
    post_json(&pool, "/starships", x_wing()).await;
    let mut changed = x_wing();
    changed["id"] = json!(1);
    changed["crew"] = json!("2");
    let (status, body) = put_json(&pool, "/starships", changed).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Starship has been updated successfully");

    let (_, body) = get(&pool, "/starships/1").await;
    assert_eq!(body["starship_info"]["crew"], "2");
}

#[tokio::test]
async fn delete_twice_reports_missing_starship_as_404() {
    let pool = test_pool().await;
    post_json(&pool, "/starships", x_wing()).await;
    let (status, _) = delete(&pool, "/starships/1").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = delete(&pool, "/starships/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "This starship 1 doesn't exist");
    assert_eq!(body["status_code"], 404);
}

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header::CONTENT_TYPE, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::SqlitePool;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

use starwars_api::{apply_migrations, build_app, store, AppState, ServerConfig};

/// Fresh in-memory database with the schema applied. Foreign keys are not enforced, matching
/// the default configuration.
pub async fn test_pool() -> SqlitePool {
    pool_with_foreign_keys(false).await
}

pub async fn pool_with_foreign_keys(enforce: bool) -> SqlitePool {
    let pool = store::connect_in_memory(enforce).await.unwrap();
    apply_migrations(&pool).await.unwrap();
    pool
}

/// Build the full application (same layers as the binary) around `pool`.
pub fn build_test_app(pool: &SqlitePool) -> NormalizePath<Router> {
    build_app(AppState { pool: pool.clone() }, &ServerConfig::default())
}

pub async fn send(pool: &SqlitePool, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let raw = body.map(|b| b.to_string()).unwrap_or_default();
    send_raw(pool, method, uri, raw).await
}

pub async fn send_raw(pool: &SqlitePool, method: Method, uri: &str, raw: String) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(raw))
        .unwrap();
    let response = build_test_app(pool).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

pub async fn get(pool: &SqlitePool, uri: &str) -> (StatusCode, Value) {
    send(pool, Method::GET, uri, None).await
}

pub async fn post_json(pool: &SqlitePool, uri: &str, body: Value) -> (StatusCode, Value) {
    send(pool, Method::POST, uri, Some(body)).await
}

pub async fn put_json(pool: &SqlitePool, uri: &str, body: Value) -> (StatusCode, Value) {
    send(pool, Method::PUT, uri, Some(body)).await
}

pub async fn delete(pool: &SqlitePool, uri: &str) -> (StatusCode, Value) {
    send(pool, Method::DELETE, uri, None).await
}

pub fn tatooine() -> Value {
    serde_json::json!({
        "planet_name": "Tatooine",
        "gravity": "1",
        "diameter": 10465,
        "rotation_period": 23
    })
}

pub fn x_wing() -> Value {
    serde_json::json!({
        "starship_name": "X-wing",
        "model": "T-65 X-wing",
        "starship_class": "Starfighter",
        "length": "12.5",
        "crew": "1"
    })
}

pub fn luke() -> Value {
    serde_json::json!({
        "character_name": "Luke Skywalker",
        "hair_color": "blond",
        "height": 172,
        "mass": 77,
        "skin_color": "fair"
    })
}

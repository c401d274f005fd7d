//! Route tables. `ROUTES` is what `GET /` reports; keep it in step with the routers below.

mod common;
mod entity;

pub use common::common_routes;
pub use entity::entity_routes;

use crate::state::AppState;
use axum::Router;

/// Every registered `(method, path)` pair, path parameters written as `{name}`.
pub const ROUTES: &[(&str, &str)] = &[
    ("GET", "/"),
    ("GET", "/health"),
    ("GET", "/ready"),
    ("GET", "/version"),
    ("GET", "/user"),
    ("POST", "/user"),
    ("PUT", "/user"),
    ("GET", "/user/{id}"),
    ("DELETE", "/user/{id}"),
    ("GET", "/characters"),
    ("POST", "/characters"),
    ("PUT", "/characters"),
    ("GET", "/characters/{id}"),
    ("DELETE", "/characters/{id}"),
    ("GET", "/planets"),
    ("POST", "/planets"),
    ("PUT", "/planets"),
    ("GET", "/planets/{id}"),
    ("DELETE", "/planets/{id}"),
    ("GET", "/starships"),
    ("POST", "/starships"),
    ("PUT", "/starships"),
    ("GET", "/starships/{id}"),
    ("DELETE", "/starships/{id}"),
    ("GET", "/favorites"),
    ("POST", "/favorites"),
    ("GET", "/favorites/{id}"),
    ("PUT", "/favorites/{id}"),
    ("DELETE", "/favorites/{id}"),
];

/// Common and entity routes merged, state applied.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(common_routes(state.clone()))
        .merge(entity_routes(state))
}

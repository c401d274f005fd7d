//! Star Wars catalog REST backend: users, characters, planets, starships and favorite lists
//! over SQLite.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod repo;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use migration::apply_migrations;
pub use routes::{common_routes, entity_routes, router, ROUTES};
pub use state::AppState;

use axum::extract::DefaultBodyLimit;
use axum::http::HeaderValue;
use axum::Router;
use tower::Layer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

/// Full application: routes, CORS, body limit, request tracing, and trailing-slash
/// normalization (`/planets/` is served as `/planets`). The body limit is enforced when the
/// body is read, so an oversized request surfaces as a `{msg}` 413 from [`JsonBody`].
///
/// [`JsonBody`]: crate::extractors::JsonBody
pub fn build_app(state: AppState, config: &ServerConfig) -> NormalizePath<Router> {
    let app = router(state)
        .layer(DefaultBodyLimit::max(config.body_limit_bytes))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http());
    NormalizePathLayer::trim_trailing_slash().layer(app)
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    if config.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }
    let origins: Vec<HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|o| match o.parse() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(origin = %o, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

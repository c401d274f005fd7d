//! Server binary: loads configuration, opens the pool, ensures the schema and serves the API.

use axum::extract::Request;
use axum::ServiceExt;
use starwars_api::{apply_migrations, build_app, store, AppState, ServerConfig};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("starwars_api=info,tower_http=info")),
        )
        .init();

    let config = ServerConfig::from_env()?;
    tracing::info!(database_url = %config.database_url, "loaded configuration");

    let pool = store::connect(&config).await?;
    apply_migrations(&pool).await?;

    let app = build_app(AppState { pool }, &config);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;
    Ok(())
}

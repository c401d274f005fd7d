//! `/planets` handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};

use crate::error::AppError;
use crate::extractors::{JsonBody, PathId};
use crate::models::{NewPlanet, UpdatePlanet};
use crate::repo::PlanetRepo;
use crate::response::{created, envelope, ok};
use crate::service::{rules, RequestValidator};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    let planets = PlanetRepo::list_all(&mut *conn).await?;
    Ok(envelope("Hello, this is your GET /planets response", "planets", planets))
}

pub async fn read(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    let planet = PlanetRepo::find_by_id(&mut *conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("The id {} planet doesn't exist", id)))?;
    Ok(envelope(
        "Hello, this is your GET /single planet response ",
        "planet_info",
        planet,
    ))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let input: NewPlanet = RequestValidator::parse(body, &rules::CREATE_PLANET)?;
    let mut tx = state.pool.begin().await?;
    let id = PlanetRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;
    tracing::info!(id, name = %input.planet_name, "planet created");
    Ok(created("Planet has been added successfully"))
}

pub async fn update(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let input: UpdatePlanet = RequestValidator::parse(body, &rules::UPDATE_PLANET)?;
    let mut tx = state.pool.begin().await?;
    if !PlanetRepo::update(&mut *tx, &input).await? {
        return Err(AppError::NotFound(format!(
            "The id {} planet doesn't exist",
            input.id
        )));
    }
    tx.commit().await?;
    Ok(ok("Planet has been updated successfully"))
}

pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    if !PlanetRepo::delete(&mut *tx, id).await? {
        return Err(AppError::api("This planet doesn't exist", StatusCode::BAD_REQUEST));
    }
    tx.commit().await?;
    tracing::info!(id, "planet deleted");
    Ok(ok("Planet has been deleted successfully"))
}

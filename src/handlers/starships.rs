//! `/starships` handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};

use crate::error::AppError;
use crate::extractors::{JsonBody, PathId};
use crate::models::{NewStarship, UpdateStarship};
use crate::repo::StarshipRepo;
use crate::response::{created, envelope, ok};
use crate::service::{rules, RequestValidator};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    let starships = StarshipRepo::list_all(&mut *conn).await?;
    Ok(envelope("Hello, this is your GET /starships response", "starships", starships))
}

pub async fn read(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    let starship = StarshipRepo::find_by_id(&mut *conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("The id {} starship doesn't exist", id)))?;
    Ok(envelope(
        "Hello, this is your GET /single starship response ",
        "starship_info",
        starship,
    ))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let input: NewStarship = RequestValidator::parse(body, &rules::CREATE_STARSHIP)?;
    let mut tx = state.pool.begin().await?;
    let id = StarshipRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;
    tracing::info!(id, name = %input.starship_name, "starship created");
    Ok(created("Starship has been added successfully"))
}

pub async fn update(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let input: UpdateStarship = RequestValidator::parse(body, &rules::UPDATE_STARSHIP)?;
    let mut tx = state.pool.begin().await?;
    if !StarshipRepo::update(&mut *tx, &input).await? {
        return Err(AppError::NotFound(format!(
            "The id {} starship doesn't exist",
            input.id
        )));
    }
    tx.commit().await?;
    Ok(ok("Starship has been updated successfully"))
}

pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    if !StarshipRepo::delete(&mut *tx, id).await? {
        return Err(AppError::api(
            format!("This starship {} doesn't exist", id),
            StatusCode::NOT_FOUND,
        ));
    }
    tx.commit().await?;
    tracing::info!(id, "starship deleted");
    Ok(ok("Starship has been deleted successfully"))
}

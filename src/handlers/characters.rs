//! `/characters` handlers. Planet and starship are resolved explicitly through
//! [`crate::service::relations`] before serializing.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};

use crate::error::AppError;
use crate::extractors::{JsonBody, PathId};
use crate::models::{NewCharacter, UpdateCharacter};
use crate::repo::CharacterRepo;
use crate::response::{created, envelope, ok};
use crate::service::{relations, rules, RequestValidator};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    let rows = CharacterRepo::list_all(&mut *conn).await?;
    let characters = relations::character_views(&mut *conn, rows).await?;
    Ok(envelope(
        "Hello, this is your GET /characters response",
        "characters",
        characters,
    ))
}

pub async fn read(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    let row = CharacterRepo::find_by_id(&mut *conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("The id {} character doesn't exist", id)))?;
    let character = relations::character_view(&mut *conn, row).await?;
    Ok(envelope(
        "Hello, this is your GET /single character response ",
        "character_info",
        character,
    ))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let input: NewCharacter = RequestValidator::parse(body, &rules::CREATE_CHARACTER)?;
    let mut tx = state.pool.begin().await?;
    let id = CharacterRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;
    tracing::info!(id, name = %input.character_name, "character created");
    Ok(created("Character has been added successfully"))
}

pub async fn update(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let input: UpdateCharacter = RequestValidator::parse(body, &rules::UPDATE_CHARACTER)?;
    let mut tx = state.pool.begin().await?;
    if !CharacterRepo::update(&mut *tx, &input).await? {
        return Err(AppError::NotFound(format!(
            "The id {} character doesn't exist",
            input.id
        )));
    }
    tx.commit().await?;
    Ok(ok("Character has been updated successfully"))
}

pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    if !CharacterRepo::delete(&mut *tx, id).await? {
        return Err(AppError::api("This character doesn't exist", StatusCode::NOT_FOUND));
    }
    tx.commit().await?;
    tracing::info!(id, "character deleted");
    Ok(ok("Character has been deleted successfully"))
}

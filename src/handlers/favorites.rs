//! `/favorites` handlers. Unlike the other entities, updates are partial and address the list
//! by path id.

use axum::{
    extract::State,
    response::IntoResponse,
};
use sqlx::SqliteConnection;

use crate::error::AppError;
use crate::extractors::{JsonBody, PathId};
use crate::models::{FavoriteChanges, NewFavoriteList};
use crate::repo::{CharacterRepo, FavoritePatch, FavoriteRepo, PlanetRepo, StarshipRepo};
use crate::response::{created, envelope, ok};
use crate::service::{relations, rules, RequestValidator};
use crate::state::AppState;

const NOT_FOUND: &str = "Favorite not found";

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    let rows = FavoriteRepo::list_all(&mut *conn).await?;
    let lists = relations::favorite_views(&mut *conn, rows).await?;
    Ok(envelope(
        "Hello, this is your GET /favorite lists response",
        "Favorite lists",
        lists,
    ))
}

pub async fn read(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    let row = FavoriteRepo::find_by_id(&mut *conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("The id {} favorite list doesn't exist", id)))?;
    let list = relations::favorite_view(&mut *conn, row).await?;
    Ok(envelope(
        "Hello, this is your GET /favorite list response ",
        "favorite_list_info",
        list,
    ))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let input: NewFavoriteList = RequestValidator::parse(body, &rules::CREATE_FAVORITE)?;
    let mut tx = state.pool.begin().await?;
    let id = FavoriteRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;
    tracing::info!(id, name = %input.list_name, "favorite list created");
    Ok(created("Favorite list has been added successfully"))
}

pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    if FavoriteRepo::find_by_id(&mut *tx, id).await?.is_none() {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    let changes: FavoriteChanges = RequestValidator::typed(RequestValidator::object(body)?)?;
    let patch = resolve_changes(&mut *tx, changes).await?;
    FavoriteRepo::update_partial(&mut *tx, id, &patch).await?;
    tx.commit().await?;
    Ok(ok("Favorite updated successfully"))
}

pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    if !FavoriteRepo::delete(&mut *tx, id).await? {
        return Err(AppError::NotFound(NOT_FOUND.into()));
    }
    tx.commit().await?;
    tracing::info!(id, "favorite list deleted");
    Ok(ok("Favorite has been deleted successfully"))
}

/// Look up every relation id in `changes`. An unknown planet or starship clears the relation;
/// an unknown character is rejected since a list cannot exist without one.
async fn resolve_changes(
    conn: &mut SqliteConnection,
    changes: FavoriteChanges,
) -> Result<FavoritePatch, AppError> {
    let character_id = match changes.character {
        Some(sent) => {
            let found = match sent.as_id() {
                Some(cid) => CharacterRepo::find_by_id(&mut *conn, cid).await?,
                None => None,
            };
            let character = found.ok_or_else(|| {
                AppError::NotFound(format!("The id {} character doesn't exist", sent))
            })?;
            Some(character.id)
        }
        None => None,
    };
    let planet_id = match changes.planet {
        Some(sent) => Some(match sent.as_id() {
            Some(pid) => PlanetRepo::find_by_id(&mut *conn, pid).await?.map(|p| p.id),
            None => None,
        }),
        None => None,
    };
    let starship_id = match changes.starship {
        Some(sent) => Some(match sent.as_id() {
            Some(sid) => StarshipRepo::find_by_id(&mut *conn, sid).await?.map(|s| s.id),
            None => None,
        }),
        None => None,
    };
    Ok(FavoritePatch {
        list_name: changes.list_name,
        character_id,
        planet_id,
        starship_id,
    })
}


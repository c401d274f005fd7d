//! `/user` handlers. Users are always serialized through `UserView`, which has no password.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};

use crate::error::AppError;
use crate::extractors::{JsonBody, PathId};
use crate::models::{NewUser, UpdateUser, UserView};
use crate::repo::UserRepo;
use crate::response::{created, envelope, ok};
use crate::service::{rules, RequestValidator};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    let users: Vec<UserView> = UserRepo::list_all(&mut *conn)
        .await?
        .into_iter()
        .map(UserView::from)
        .collect();
    Ok(envelope("Hello, this is your GET /user response", "users", users))
}

pub async fn read(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let mut conn = state.pool.acquire().await?;
    let user = UserRepo::find_by_id(&mut *conn, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("The id {} user doesn't exist", id)))?;
    Ok(envelope(
        "Hello, this is your GET /user response ",
        "user_info",
        UserView::from(user),
    ))
}

pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let input: NewUser = RequestValidator::parse(body, &rules::CREATE_USER)?;
    let mut tx = state.pool.begin().await?;
    let id = UserRepo::create(&mut *tx, &input).await?;
    tx.commit().await?;
    tracing::info!(id, "user created");
    Ok(created("User has been added successfully"))
}

pub async fn update(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> Result<impl IntoResponse, AppError> {
    let input: UpdateUser = RequestValidator::parse(body, &rules::UPDATE_USER)?;
    let mut tx = state.pool.begin().await?;
    if !UserRepo::update(&mut *tx, &input).await? {
        return Err(AppError::NotFound(format!(
            "The id {} user doesn't exist",
            input.id
        )));
    }
    tx.commit().await?;
    Ok(ok("User has been updated successfully"))
}

pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> Result<impl IntoResponse, AppError> {
    let mut tx = state.pool.begin().await?;
    if !UserRepo::delete(&mut *tx, id).await? {
        return Err(AppError::api("This user doesn't exist", StatusCode::BAD_REQUEST));
    }
    tx.commit().await?;
    tracing::info!(id, "user deleted");
    Ok(ok("User has been deleted successfully"))
}

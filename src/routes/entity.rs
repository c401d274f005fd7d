//! Entity CRUD routes. Collections take POST and PUT (id in the body) except favorites, whose
//! PUT addresses the list by path id.

use crate::handlers::{characters, favorites, planets, starships, users};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .route("/user", get(users::list).post(users::create).put(users::update))
        .route("/user/:id", get(users::read).delete(users::delete))
        .route(
            "/characters",
            get(characters::list)
                .post(characters::create)
                .put(characters::update),
        )
        .route(
            "/characters/:id",
            get(characters::read).delete(characters::delete),
        )
        .route(
            "/planets",
            get(planets::list).post(planets::create).put(planets::update),
        )
        .route("/planets/:id", get(planets::read).delete(planets::delete))
        .route(
            "/starships",
            get(starships::list)
                .post(starships::create)
                .put(starships::update),
        )
        .route(
            "/starships/:id",
            get(starships::read).delete(starships::delete),
        )
        .route("/favorites", get(favorites::list).post(favorites::create))
        .route(
            "/favorites/:id",
            get(favorites::read)
                .put(favorites::update)
                .delete(favorites::delete),
        )
        .with_state(state)
}

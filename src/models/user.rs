use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{AnyValue, DbId};

/// A row from `users`. The password is kept in clear text and must never leave the process;
/// serialize through [`UserView`].
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct User {
    pub id: DbId,
    pub username: AnyValue,
    pub email: AnyValue,
    pub password: AnyValue,
    pub is_active: Option<bool>,
    pub favorites_id: Option<DbId>,
}

/// Every column is nullable, so `null` is stored like any other value.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: AnyValue,
    pub email: AnyValue,
    pub password: AnyValue,
}

/// Only `username` and `email` are overwritten; the password is left as stored.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUser {
    pub id: AnyValue,
    pub username: AnyValue,
    pub email: AnyValue,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    pub id: DbId,
    pub email: AnyValue,
    pub username: AnyValue,
}

impl From<User> for UserView {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            email: u.email,
            username: u.username,
        }
    }
}

//! Repository for the `users` table.

use sqlx::SqliteConnection;

use crate::models::{DbId, NewUser, UpdateUser, User};

const COLUMNS: &str = "id, username, email, password, is_active, favorites_id";

pub struct UserRepo;

impl UserRepo {
    pub async fn list_all(conn: &mut SqliteConnection) -> Result<Vec<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users ORDER BY id");
        sqlx::query_as::<_, User>(&query).fetch_all(conn).await
    }

    pub async fn find_by_id(conn: &mut SqliteConnection, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// New users start active.
    pub async fn create(conn: &mut SqliteConnection, input: &NewUser) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO users (username, email, password, is_active)
             VALUES ($1, $2, $3, TRUE)
             RETURNING id",
        )
        .bind(&input.username)
        .bind(&input.email)
        .bind(&input.password)
        .fetch_one(conn)
        .await
    }

    pub async fn update(conn: &mut SqliteConnection, input: &UpdateUser) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE users SET username = $2, email = $3 WHERE id = $1")
            .bind(&input.id)
            .bind(&input.username)
            .bind(&input.email)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `starships` table.

use sqlx::SqliteConnection;

use crate::models::{DbId, NewStarship, Starship, UpdateStarship};

const COLUMNS: &str = "id, starship_name, model, starship_class, length, crew";

pub struct StarshipRepo;

impl StarshipRepo {
    pub async fn list_all(conn: &mut SqliteConnection) -> Result<Vec<Starship>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM starships ORDER BY id");
        sqlx::query_as::<_, Starship>(&query).fetch_all(conn).await
    }

    pub async fn find_by_id(conn: &mut SqliteConnection, id: DbId) -> Result<Option<Starship>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM starships WHERE id = $1");
        sqlx::query_as::<_, Starship>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    pub async fn find_many(conn: &mut SqliteConnection, ids: &[DbId]) -> Result<Vec<Starship>, sqlx::Error> {
        super::fetch_by_ids(conn, "starships", COLUMNS, ids).await
    }

    pub async fn create(conn: &mut SqliteConnection, input: &NewStarship) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO starships (starship_name, model, starship_class, length, crew)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&input.starship_name)
        .bind(&input.model)
        .bind(&input.starship_class)
        .bind(&input.length)
        .bind(&input.crew)
        .fetch_one(conn)
        .await
    }

    pub async fn update(conn: &mut SqliteConnection, input: &UpdateStarship) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE starships SET starship_name = $2, model = $3, starship_class = $4, length = $5, crew = $6
             WHERE id = $1",
        )
        .bind(&input.id)
        .bind(&input.starship_name)
        .bind(&input.model)
        .bind(&input.starship_class)
        .bind(&input.length)
        .bind(&input.crew)
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM starships WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

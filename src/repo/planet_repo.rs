//! Repository for the `planets` table.

use sqlx::SqliteConnection;

use crate::models::{DbId, NewPlanet, Planet, UpdatePlanet};

const COLUMNS: &str = "id, planet_name, gravity, diameter, rotation_period";

pub struct PlanetRepo;

impl PlanetRepo {
    pub async fn list_all(conn: &mut SqliteConnection) -> Result<Vec<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets ORDER BY id");
        sqlx::query_as::<_, Planet>(&query).fetch_all(conn).await
    }

    pub async fn find_by_id(conn: &mut SqliteConnection, id: DbId) -> Result<Option<Planet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM planets WHERE id = $1");
        sqlx::query_as::<_, Planet>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    pub async fn find_many(conn: &mut SqliteConnection, ids: &[DbId]) -> Result<Vec<Planet>, sqlx::Error> {
        super::fetch_by_ids(conn, "planets", COLUMNS, ids).await
    }

    /// Insert and return the generated id.
    pub async fn create(conn: &mut SqliteConnection, input: &NewPlanet) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO planets (planet_name, gravity, diameter, rotation_period)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&input.planet_name)
        .bind(&input.gravity)
        .bind(&input.diameter)
        .bind(&input.rotation_period)
        .fetch_one(conn)
        .await
    }

    /// Overwrite every column with the values as sent. Returns `false` if no row has `input.id`.
    pub async fn update(conn: &mut SqliteConnection, input: &UpdatePlanet) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE planets SET planet_name = $2, gravity = $3, diameter = $4, rotation_period = $5
             WHERE id = $1",
        )
        .bind(&input.id)
        .bind(&input.planet_name)
        .bind(&input.gravity)
        .bind(&input.diameter)
        .bind(&input.rotation_period)
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Returns `true` if a row was removed. Rows referencing it are left as they are.
    pub async fn delete(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM planets WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `characters` table.

use sqlx::SqliteConnection;

use crate::models::{Character, DbId, NewCharacter, UpdateCharacter};

const COLUMNS: &str =
    "id, character_name, height, mass, hair_color, skin_color, planet_id, starship_id";

pub struct CharacterRepo;

impl CharacterRepo {
    pub async fn list_all(conn: &mut SqliteConnection) -> Result<Vec<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters ORDER BY id");
        sqlx::query_as::<_, Character>(&query).fetch_all(conn).await
    }

    pub async fn find_by_id(conn: &mut SqliteConnection, id: DbId) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, Character>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    pub async fn find_many(conn: &mut SqliteConnection, ids: &[DbId]) -> Result<Vec<Character>, sqlx::Error> {
        super::fetch_by_ids(conn, "characters", COLUMNS, ids).await
    }

    pub async fn create(conn: &mut SqliteConnection, input: &NewCharacter) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO characters (character_name, height, mass, hair_color, skin_color, planet_id, starship_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id",
        )
        .bind(&input.character_name)
        .bind(&input.height)
        .bind(&input.mass)
        .bind(&input.hair_color)
        .bind(&input.skin_color)
        .bind(&input.planet_id)
        .bind(&input.starship_id)
        .fetch_one(conn)
        .await
    }

    /// Overwrite the scalar columns. A relation id is written only when the body carried the
    /// key (`Some`); a sent `null` clears it.
    pub async fn update(conn: &mut SqliteConnection, input: &UpdateCharacter) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE characters SET
                character_name = $2,
                height = $3,
                mass = $4,
                hair_color = $5,
                skin_color = $6,
                planet_id = CASE WHEN $7 THEN $8 ELSE planet_id END,
                starship_id = CASE WHEN $9 THEN $10 ELSE starship_id END
             WHERE id = $1",
        )
        .bind(&input.id)
        .bind(&input.character_name)
        .bind(&input.height)
        .bind(&input.mass)
        .bind(&input.hair_color)
        .bind(&input.skin_color)
        .bind(input.planet_id.is_some())
        .bind(input.planet_id.as_ref())
        .bind(input.starship_id.is_some())
        .bind(input.starship_id.as_ref())
        .execute(conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM characters WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `favorites` table.

use sqlx::{QueryBuilder, Sqlite, SqliteConnection};

use crate::models::{AnyValue, DbId, FavoriteList, NewFavoriteList};

const COLUMNS: &str = "id, list_name, character_id, planet_id, starship_id";

/// Column assignments for a partial update, with relation ids already resolved. `None` leaves
/// a column as stored; `Some(None)` writes NULL.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FavoritePatch {
    pub list_name: Option<AnyValue>,
    pub character_id: Option<DbId>,
    pub planet_id: Option<Option<DbId>>,
    pub starship_id: Option<Option<DbId>>,
}

impl FavoritePatch {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

pub struct FavoriteRepo;

impl FavoriteRepo {
    pub async fn list_all(conn: &mut SqliteConnection) -> Result<Vec<FavoriteList>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM favorites ORDER BY id");
        sqlx::query_as::<_, FavoriteList>(&query).fetch_all(conn).await
    }

    pub async fn find_by_id(
        conn: &mut SqliteConnection,
        id: DbId,
    ) -> Result<Option<FavoriteList>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM favorites WHERE id = $1");
        sqlx::query_as::<_, FavoriteList>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// Fails with a unique violation when `list_name` is taken.
    pub async fn create(conn: &mut SqliteConnection, input: &NewFavoriteList) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO favorites (list_name, character_id, planet_id, starship_id)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&input.list_name)
        .bind(&input.character_id)
        .bind(&input.planet_id)
        .bind(&input.starship_id)
        .fetch_one(conn)
        .await
    }

    /// Assign only the columns set in `patch`. An empty patch touches nothing and reports
    /// whether the row exists.
    pub async fn update_partial(
        conn: &mut SqliteConnection,
        id: DbId,
        patch: &FavoritePatch,
    ) -> Result<bool, sqlx::Error> {
        if patch.is_empty() {
            return Ok(Self::find_by_id(conn, id).await?.is_some());
        }
        let mut qb = QueryBuilder::<Sqlite>::new("UPDATE favorites SET ");
        let mut set = qb.separated(", ");
        if let Some(name) = &patch.list_name {
            set.push("list_name = ").push_bind_unseparated(name.clone());
        }
        if let Some(character_id) = patch.character_id {
            set.push("character_id = ").push_bind_unseparated(character_id);
        }
        if let Some(planet_id) = patch.planet_id {
            set.push("planet_id = ").push_bind_unseparated(planet_id);
        }
        if let Some(starship_id) = patch.starship_id {
            set.push("starship_id = ").push_bind_unseparated(starship_id);
        }
        qb.push(" WHERE id = ").push_bind(id);
        tracing::debug!(sql = %qb.sql(), "partial update");
        let result = qb.build().execute(conn).await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn delete(conn: &mut SqliteConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE id = $1")
            .bind(id)
            .execute(conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

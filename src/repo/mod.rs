//! Per-entity repositories. Every call takes a `&mut SqliteConnection` borrowed from the
//! request's transaction, so a handler's statements commit or roll back together.

mod character_repo;
mod favorite_repo;
mod planet_repo;
mod starship_repo;
mod user_repo;

pub use character_repo::CharacterRepo;
pub use favorite_repo::{FavoritePatch, FavoriteRepo};
pub use planet_repo::PlanetRepo;
pub use starship_repo::StarshipRepo;
pub use user_repo::UserRepo;

use crate::models::DbId;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, QueryBuilder, Sqlite, SqliteConnection};

/// `SELECT columns FROM table WHERE id IN (...)`. Empty `ids` short-circuits without a query.
pub(crate) async fn fetch_by_ids<T>(
    conn: &mut SqliteConnection,
    table: &str,
    columns: &str,
    ids: &[DbId],
) -> Result<Vec<T>, sqlx::Error>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    let mut qb = QueryBuilder::<Sqlite>::new(format!("SELECT {columns} FROM {table} WHERE id IN ("));
    let mut list = qb.separated(", ");
    for id in ids {
        list.push_bind(*id);
    }
    list.push_unseparated(")");
    tracing::debug!(table = %table, count = ids.len(), "batch lookup");
    qb.build_query_as::<T>().fetch_all(conn).await
}

/// Sorted, de-duplicated ids from an iterator of optional references.
pub(crate) fn distinct_ids<I>(ids: I) -> Vec<DbId>
where
    I: IntoIterator<Item = Option<DbId>>,
{
    let mut out: Vec<DbId> = ids.into_iter().flatten().collect();
    out.sort_unstable();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::distinct_ids;

    #[test]
    fn distinct_ids_drops_nulls_and_duplicates() {
        assert_eq!(distinct_ids([Some(3), None, Some(1), Some(3)]), vec![1, 3]);
        assert!(distinct_ids(Vec::<Option<i64>>::new()).is_empty());
    }
}

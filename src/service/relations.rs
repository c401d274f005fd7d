//! Explicit relation loading. Related rows are fetched with batch lookups and stitched into
//! the nested views; ids that do not resolve, or are not ids at all, become `null`.

use std::collections::HashMap;

use sqlx::SqliteConnection;

use crate::models::{Character, CharacterView, DbId, FavoriteList, FavoriteView, Planet, Starship};
use crate::repo::{distinct_ids, CharacterRepo, PlanetRepo, StarshipRepo};

async fn planets_by_id(
    conn: &mut SqliteConnection,
    ids: &[DbId],
) -> Result<HashMap<DbId, Planet>, sqlx::Error> {
    let rows = PlanetRepo::find_many(conn, ids).await?;
    Ok(rows.into_iter().map(|p| (p.id, p)).collect())
}

async fn starships_by_id(
    conn: &mut SqliteConnection,
    ids: &[DbId],
) -> Result<HashMap<DbId, Starship>, sqlx::Error> {
    let rows = StarshipRepo::find_many(conn, ids).await?;
    Ok(rows.into_iter().map(|s| (s.id, s)).collect())
}

fn pick<T: Clone>(map: &HashMap<DbId, T>, id: Option<DbId>) -> Option<T> {
    id.and_then(|id| map.get(&id).cloned())
}

pub async fn character_views(
    conn: &mut SqliteConnection,
    rows: Vec<Character>,
) -> Result<Vec<CharacterView>, sqlx::Error> {
    let planets = planets_by_id(&mut *conn, &distinct_ids(rows.iter().map(|c| c.planet_id.as_id()))).await?;
    let starships =
        starships_by_id(&mut *conn, &distinct_ids(rows.iter().map(|c| c.starship_id.as_id()))).await?;
    Ok(rows
        .into_iter()
        .map(|c| {
            let planet = pick(&planets, c.planet_id.as_id());
            let starship = pick(&starships, c.starship_id.as_id());
            CharacterView::new(c, planet, starship)
        })
        .collect())
}

pub async fn character_view(
    conn: &mut SqliteConnection,
    row: Character,
) -> Result<CharacterView, sqlx::Error> {
    let planet = match row.planet_id.as_id() {
        Some(id) => PlanetRepo::find_by_id(&mut *conn, id).await?,
        None => None,
    };
    let starship = match row.starship_id.as_id() {
        Some(id) => StarshipRepo::find_by_id(&mut *conn, id).await?,
        None => None,
    };
    Ok(CharacterView::new(row, planet, starship))
}

/// Favorite lists with their character (itself carrying planet and starship), planet and
/// starship resolved.
pub async fn favorite_views(
    conn: &mut SqliteConnection,
    rows: Vec<FavoriteList>,
) -> Result<Vec<FavoriteView>, sqlx::Error> {
    let character_ids = distinct_ids(rows.iter().map(|f| f.character_id.as_id()));
    let characters = CharacterRepo::find_many(&mut *conn, &character_ids).await?;
    let characters: HashMap<DbId, CharacterView> = character_views(&mut *conn, characters)
        .await?
        .into_iter()
        .map(|c| (c.id, c))
        .collect();
    let planets = planets_by_id(&mut *conn, &distinct_ids(rows.iter().map(|f| f.planet_id.as_id()))).await?;
    let starships =
        starships_by_id(&mut *conn, &distinct_ids(rows.iter().map(|f| f.starship_id.as_id()))).await?;
    Ok(rows
        .into_iter()
        .map(|f| {
            let character = pick(&characters, f.character_id.as_id());
            let planet = pick(&planets, f.planet_id.as_id());
            let starship = pick(&starships, f.starship_id.as_id());
            FavoriteView::new(f, character, planet, starship)
        })
        .collect())
}

pub async fn favorite_view(
    conn: &mut SqliteConnection,
    row: FavoriteList,
) -> Result<FavoriteView, sqlx::Error> {
    let character = match row.character_id.as_id() {
        Some(id) => match CharacterRepo::find_by_id(&mut *conn, id).await? {
            Some(c) => Some(character_view(&mut *conn, c).await?),
            None => None,
        },
        None => None,
    };
    let planet = match row.planet_id.as_id() {
        Some(id) => PlanetRepo::find_by_id(&mut *conn, id).await?,
        None => None,
    };
    let starship = match row.starship_id.as_id() {
        Some(id) => StarshipRepo::find_by_id(&mut *conn, id).await?,
        None => None,
    };
    Ok(FavoriteView::new(row, character, planet, starship))
}

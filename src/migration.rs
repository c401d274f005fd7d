//! Schema creation. Tables are created in dependency order with `IF NOT EXISTS`, so running this
//! on every startup is idempotent.

use crate::error::AppError;
use sqlx::SqlitePool;

const TABLES: &[(&str, &str)] = &[
    (
        "planets",
        r#"
        CREATE TABLE IF NOT EXISTS planets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            planet_name VARCHAR(80) NOT NULL,
            gravity VARCHAR(80) NOT NULL,
            diameter INTEGER NOT NULL,
            rotation_period INTEGER NOT NULL
        )
        "#,
    ),
    (
        "starships",
        r#"
        CREATE TABLE IF NOT EXISTS starships (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            starship_name VARCHAR(30) NOT NULL,
            model VARCHAR(30) NOT NULL,
            starship_class VARCHAR(30) NOT NULL,
            length VARCHAR(30) NOT NULL,
            crew VARCHAR(30) NOT NULL
        )
        "#,
    ),
    (
        "characters",
        r#"
        CREATE TABLE IF NOT EXISTS characters (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            character_name VARCHAR(20) NOT NULL,
            height INTEGER NOT NULL,
            mass INTEGER NOT NULL,
            hair_color VARCHAR(20) NOT NULL,
            skin_color VARCHAR(20) NOT NULL,
            planet_id INTEGER REFERENCES planets(id),
            starship_id INTEGER REFERENCES starships(id)
        )
        "#,
    ),
    (
        "favorites",
        r#"
        CREATE TABLE IF NOT EXISTS favorites (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            list_name VARCHAR(30) NOT NULL UNIQUE,
            character_id INTEGER NOT NULL REFERENCES characters(id),
            planet_id INTEGER REFERENCES planets(id),
            starship_id INTEGER REFERENCES starships(id)
        )
        "#,
    ),
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username VARCHAR(30) UNIQUE,
            email VARCHAR(120) UNIQUE,
            password VARCHAR(80),
            is_active BOOLEAN,
            favorites_id INTEGER REFERENCES favorites(id)
        )
        "#,
    ),
];

pub async fn apply_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for (name, ddl) in TABLES {
        tracing::debug!(table = %name, "ensure table");
        sqlx::query(ddl).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    tracing::info!(tables = TABLES.len(), "schema ready");
    Ok(())
}

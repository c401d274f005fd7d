use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{AnyValue, DbId};

/// A row from `starships`.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Starship {
    pub starship_name: AnyValue,
    pub id: DbId,
    pub model: AnyValue,
    pub starship_class: AnyValue,
    pub length: AnyValue,
    pub crew: AnyValue,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewStarship {
    pub starship_name: AnyValue,
    pub model: AnyValue,
    pub starship_class: AnyValue,
    pub length: AnyValue,
    pub crew: AnyValue,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStarship {
    pub id: AnyValue,
    pub starship_name: AnyValue,
    pub model: AnyValue,
    pub starship_class: AnyValue,
    pub length: AnyValue,
    pub crew: AnyValue,
}

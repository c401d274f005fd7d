use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{AnyValue, DbId};

/// A row from `planets`. Serializes as-is: every column is public.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Planet {
    pub planet_name: AnyValue,
    pub id: DbId,
    pub gravity: AnyValue,
    pub diameter: AnyValue,
    pub rotation_period: AnyValue,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPlanet {
    pub planet_name: AnyValue,
    pub gravity: AnyValue,
    pub diameter: AnyValue,
    pub rotation_period: AnyValue,
}

/// Full overwrite: every column is resupplied.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePlanet {
    pub id: AnyValue,
    pub planet_name: AnyValue,
    pub gravity: AnyValue,
    pub diameter: AnyValue,
    pub rotation_period: AnyValue,
}

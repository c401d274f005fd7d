//! Entity rows, request bodies and serialized views.

pub mod character;
pub mod favorite;
pub mod planet;
pub mod starship;
pub mod user;
mod value;

pub use character::{Character, CharacterView, NewCharacter, UpdateCharacter};
pub use favorite::{FavoriteChanges, FavoriteList, FavoriteView, NewFavoriteList};
pub use planet::{NewPlanet, Planet, UpdatePlanet};
pub use starship::{NewStarship, Starship, UpdateStarship};
pub use user::{NewUser, UpdateUser, User, UserView};
pub use value::AnyValue;

use serde::{Deserialize, Deserializer};

/// Row identifier. SQLite `INTEGER PRIMARY KEY`.
pub type DbId = i64;

/// Tells an explicit `null` apart from an absent key when used as
/// `#[serde(default, deserialize_with = "present")] Option<AnyValue>`:
/// absent → `None`, anything sent (`null` included) → `Some`.
pub(crate) fn present<'de, D>(deserializer: D) -> Result<Option<AnyValue>, D::Error>
where
    D: Deserializer<'de>,
{
    AnyValue::deserialize(deserializer).map(Some)
}

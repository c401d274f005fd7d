//! Favorite list row, request bodies and the nested view.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{present, AnyValue, CharacterView, DbId, Planet, Starship};

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct FavoriteList {
    pub id: DbId,
    pub list_name: AnyValue,
    pub character_id: AnyValue,
    pub planet_id: AnyValue,
    pub starship_id: AnyValue,
}

/// `planet_id` and `starship_id` must be present in the body but may be `null`.
#[derive(Debug, Clone, Deserialize)]
pub struct NewFavoriteList {
    pub list_name: AnyValue,
    pub character_id: AnyValue,
    pub planet_id: AnyValue,
    pub starship_id: AnyValue,
}

/// Partial update body for `PUT /favorites/{id}`. Relation keys carry the id of the row to
/// point at; `null` clears planet or starship.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FavoriteChanges {
    #[serde(default, deserialize_with = "present")]
    pub list_name: Option<AnyValue>,
    #[serde(default, deserialize_with = "present")]
    pub character: Option<AnyValue>,
    #[serde(default, deserialize_with = "present")]
    pub planet: Option<AnyValue>,
    #[serde(default, deserialize_with = "present")]
    pub starship: Option<AnyValue>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FavoriteView {
    pub list_name: AnyValue,
    pub character: Option<CharacterView>,
    pub planet: Option<Planet>,
    pub starship: Option<Starship>,
    pub id: DbId,
}

impl FavoriteView {
    pub fn new(
        row: FavoriteList,
        character: Option<CharacterView>,
        planet: Option<Planet>,
        starship: Option<Starship>,
    ) -> Self {
        Self {
            list_name: row.list_name,
            character,
            planet,
            starship,
            id: row.id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_only_change_leaves_relations_untouched() {
        let changes: FavoriteChanges = serde_json::from_value(json!({"list_name": "X"})).unwrap();
        assert_eq!(changes.list_name, Some(AnyValue::from("X")));
        assert!(changes.character.is_none());
        assert!(changes.planet.is_none());
        assert!(changes.starship.is_none());
    }

    #[test]
    fn null_planet_means_clear() {
        let changes: FavoriteChanges =
            serde_json::from_value(json!({"planet": null, "starship": 2})).unwrap();
        assert_eq!(changes.planet, Some(AnyValue::default()));
        assert_eq!(changes.starship, Some(AnyValue::from(2)));
    }

    #[test]
    fn new_list_takes_relation_keys_as_sent() {
        let body = json!({"list_name": "L", "character_id": "1", "planet_id": null, "starship_id": 5});
        let new: NewFavoriteList = serde_json::from_value(body).unwrap();
        assert_eq!(new.character_id.as_id(), Some(1));
        assert!(new.planet_id.is_null());
        assert_eq!(new.starship_id.as_id(), Some(5));
    }

    #[test]
    fn dangling_relations_serialize_as_null() {
        let row = FavoriteList {
            id: 7,
            list_name: "mine".into(),
            character_id: 99.into(),
            planet_id: 42.into(),
            starship_id: AnyValue::default(),
        };
        let v = serde_json::to_value(FavoriteView::new(row, None, None, None)).unwrap();
        assert_eq!(v, json!({"list_name": "mine", "character": null, "planet": null, "starship": null, "id": 7}));
    }
}

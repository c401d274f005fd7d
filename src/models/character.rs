//! Character row, request bodies and the nested view.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::{present, AnyValue, DbId, Planet, Starship};

/// A row from `characters`. Relations are stored as given; see [`CharacterView`] for the
/// resolved form.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Character {
    pub id: DbId,
    pub character_name: AnyValue,
    pub height: AnyValue,
    pub mass: AnyValue,
    pub hair_color: AnyValue,
    pub skin_color: AnyValue,
    pub planet_id: AnyValue,
    pub starship_id: AnyValue,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewCharacter {
    pub character_name: AnyValue,
    pub hair_color: AnyValue,
    pub height: AnyValue,
    pub mass: AnyValue,
    pub skin_color: AnyValue,
    #[serde(default)]
    pub planet_id: AnyValue,
    #[serde(default)]
    pub starship_id: AnyValue,
}

/// Full overwrite of the scalar columns. Relation ids are only touched when the key is sent.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCharacter {
    pub id: AnyValue,
    pub character_name: AnyValue,
    pub hair_color: AnyValue,
    pub height: AnyValue,
    pub mass: AnyValue,
    pub skin_color: AnyValue,
    #[serde(default, deserialize_with = "present")]
    pub planet_id: Option<AnyValue>,
    #[serde(default, deserialize_with = "present")]
    pub starship_id: Option<AnyValue>,
}

/// Serialized character: relation ids replaced by the related rows, `null` when unset or
/// dangling.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterView {
    pub character_name: AnyValue,
    pub id: DbId,
    pub height: AnyValue,
    pub mass: AnyValue,
    pub skin_color: AnyValue,
    pub hair_color: AnyValue,
    pub planet: Option<Planet>,
    pub starship: Option<Starship>,
}

impl CharacterView {
    pub fn new(row: Character, planet: Option<Planet>, starship: Option<Starship>) -> Self {
        Self {
            character_name: row.character_name,
            id: row.id,
            height: row.height,
            mass: row.mass,
            skin_color: row.skin_color,
            hair_color: row.hair_color,
            planet,
            starship,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn luke() -> Character {
        Character {
            id: 1,
            character_name: "Luke".into(),
            height: 172.into(),
            mass: 77.into(),
            hair_color: "blond".into(),
            skin_color: "fair".into(),
            planet_id: AnyValue::default(),
            starship_id: AnyValue::default(),
        }
    }

    #[test]
    fn unassigned_relations_serialize_as_null() {
        let view = CharacterView::new(luke(), None, None);
        let v = serde_json::to_value(&view).unwrap();
        assert_eq!(v["planet"], json!(null));
        assert_eq!(v["starship"], json!(null));
        assert_eq!(v["character_name"], "Luke");
        assert_eq!(v["height"], 172);
        assert!(v.get("planet_id").is_none());
    }

    #[test]
    fn assigned_planet_is_nested() {
        let tatooine = Planet {
            planet_name: "Tatooine".into(),
            id: 3,
            gravity: "1".into(),
            diameter: 10465.into(),
            rotation_period: 23.into(),
        };
        let view = CharacterView::new(luke(), Some(tatooine), None);
        let v = serde_json::to_value(&view).unwrap();
        assert_eq!(v["planet"]["planet_name"], "Tatooine");
        assert_eq!(v["planet"]["id"], 3);
        assert!(v["planet"].get("character").is_none());
    }

    #[test]
    fn update_distinguishes_null_from_absent_relation() {
        let base = json!({
            "id": 1, "character_name": "Luke", "hair_color": "blond",
            "height": 172, "mass": 77, "skin_color": "fair"
        });
        let absent: UpdateCharacter = serde_json::from_value(base.clone()).unwrap();
        assert_eq!(absent.planet_id, None);

        let mut with_null = base;
        with_null["planet_id"] = json!(null);
        with_null["starship_id"] = json!(4);
        let cleared: UpdateCharacter = serde_json::from_value(with_null).unwrap();
        assert_eq!(cleared.planet_id, Some(AnyValue::default()));
        assert_eq!(cleared.starship_id, Some(AnyValue::from(4)));
    }

    #[test]
    fn values_of_any_json_type_are_accepted() {
        let body = json!({
            "character_name": 7, "hair_color": null, "height": "tall",
            "mass": 77.5, "skin_color": "fair"
        });
        let new: NewCharacter = serde_json::from_value(body).unwrap();
        assert_eq!(new.height, AnyValue::from("tall"));
        assert!(new.hair_color.is_null());
        assert!(new.planet_id.is_null());
    }
}

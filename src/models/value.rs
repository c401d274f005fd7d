//! `AnyValue`: a column value kept exactly as the client sent it.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::encode::IsNull;
use sqlx::error::BoxDynError;
use sqlx::sqlite::{SqliteTypeInfo, SqliteValueRef};
use sqlx::{Database, Decode, Encode, Sqlite, Type, TypeInfo, ValueRef};

use super::DbId;

/// Any JSON scalar, stored without type checks. SQLite keeps whatever it is given in any
/// column, so rows are decoded by the storage class of each value instead of the declared
/// column type. Arrays and objects are stored as their JSON text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnyValue(pub Value);

impl AnyValue {
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }

    /// The value as a row id: an integer, or a string holding one.
    pub fn as_id(&self) -> Option<DbId> {
        match &self.0 {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

impl From<Value> for AnyValue {
    fn from(v: Value) -> Self {
        AnyValue(v)
    }
}

impl From<&str> for AnyValue {
    fn from(s: &str) -> Self {
        AnyValue(Value::String(s.to_string()))
    }
}

impl From<i64> for AnyValue {
    fn from(n: i64) -> Self {
        AnyValue(Value::from(n))
    }
}

/// Strings print bare so messages read `The id abc planet doesn't exist`.
impl fmt::Display for AnyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

impl Type<Sqlite> for AnyValue {
    fn type_info() -> SqliteTypeInfo {
        <str as Type<Sqlite>>::type_info()
    }

    fn compatible(_ty: &SqliteTypeInfo) -> bool {
        true
    }
}

impl<'q> Encode<'q, Sqlite> for AnyValue {
    fn encode_by_ref(
        &self,
        buf: &mut <Sqlite as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        match &self.0 {
            Value::Null => Ok(IsNull::Yes),
            Value::Bool(b) => <bool as Encode<Sqlite>>::encode(*b, buf),
            Value::Number(n) => match n.as_i64() {
                Some(i) => <i64 as Encode<Sqlite>>::encode(i, buf),
                None => <f64 as Encode<Sqlite>>::encode(n.as_f64().unwrap_or_default(), buf),
            },
            Value::String(s) => <String as Encode<Sqlite>>::encode(s.clone(), buf),
            other => <String as Encode<Sqlite>>::encode(other.to_string(), buf),
        }
    }
}

impl<'r> Decode<'r, Sqlite> for AnyValue {
    fn decode(value: SqliteValueRef<'r>) -> Result<Self, BoxDynError> {
        if value.is_null() {
            return Ok(AnyValue(Value::Null));
        }
        let class = value.type_info().name().to_ascii_uppercase();
        let decoded = match class.as_str() {
            "INTEGER" => Value::from(<i64 as Decode<Sqlite>>::decode(value)?),
            "REAL" => Value::from(<f64 as Decode<Sqlite>>::decode(value)?),
            _ => Value::String(<String as Decode<Sqlite>>::decode(value)?),
        };
        Ok(AnyValue(decoded))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn ids_come_from_integers_or_numeric_strings() {
        assert_eq!(AnyValue::from(3).as_id(), Some(3));
        assert_eq!(AnyValue::from(" 7 ").as_id(), Some(7));
        assert_eq!(AnyValue::from("abc").as_id(), None);
        assert_eq!(AnyValue(json!(1.5)).as_id(), None);
        assert_eq!(AnyValue::default().as_id(), None);
    }

    #[test]
    fn serializes_as_the_inner_value() {
        let v = serde_json::to_value(AnyValue::from("7200")).unwrap();
        assert_eq!(v, json!("7200"));
        let back: AnyValue = serde_json::from_value(json!(null)).unwrap();
        assert!(back.is_null());
    }

    #[test]
    fn display_prints_strings_bare() {
        assert_eq!(AnyValue::from("abc").to_string(), "abc");
        assert_eq!(AnyValue::from(42).to_string(), "42");
        assert_eq!(AnyValue::default().to_string(), "null");
    }
}

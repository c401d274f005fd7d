//! Required-field presence checks, then deserialization of the body into a request struct.
//! Values are not type checked: request fields hold [`AnyValue`](crate::models::AnyValue).

use crate::error::AppError;
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

pub const MISSING_BODY: &str = "You must send body information";

/// Ordered required fields for one operation. The first absent field fails the request with
/// its message and `missing_status`.
#[derive(Debug, Clone, Copy)]
pub struct RequiredFields {
    pub missing_status: StatusCode,
    pub fields: &'static [(&'static str, &'static str)],
}

pub struct RequestValidator;

impl RequestValidator {
    /// The body must be a JSON object; anything else is reported as a missing body.
    pub fn object(body: Option<Map<String, Value>>) -> Result<Map<String, Value>, AppError> {
        body.ok_or_else(|| AppError::api(MISSING_BODY, StatusCode::BAD_REQUEST))
    }

    /// Check presence of each required key in order. A key holding `null` counts as present.
    pub fn require(body: &Map<String, Value>, rules: &RequiredFields) -> Result<(), AppError> {
        for (field, message) in rules.fields {
            if !body.contains_key(*field) {
                return Err(AppError::api(*message, rules.missing_status));
            }
        }
        Ok(())
    }

    /// Object check, presence check, then deserialize into `T`.
    pub fn parse<T: DeserializeOwned>(
        body: Option<Map<String, Value>>,
        rules: &RequiredFields,
    ) -> Result<T, AppError> {
        let body = Self::object(body)?;
        Self::require(&body, rules)?;
        Self::typed(body)
    }

    /// Deserialize an already checked body into its request struct.
    pub fn typed<T: DeserializeOwned>(body: Map<String, Value>) -> Result<T, AppError> {
        serde_json::from_value(Value::Object(body))
            .map_err(|e| AppError::BadRequest(format!("Invalid body information: {}", e)))
    }
}

/// Required fields per operation, in the order they are checked.
pub mod rules {
    use super::RequiredFields;
    use axum::http::StatusCode;

    pub const CREATE_USER: RequiredFields = RequiredFields {
        missing_status: StatusCode::NOT_FOUND,
        fields: &[
            ("username", "You must send an username"),
            ("email", "You must send an email"),
            ("password", "You must send a password"),
        ],
    };

    pub const UPDATE_USER: RequiredFields = RequiredFields {
        missing_status: StatusCode::NOT_FOUND,
        fields: &[
            ("id", "you must send the user id to be modified"),
            ("username", "You must send a new username or write the current one"),
            ("email", "You must send a new email or write the current one"),
        ],
    };

    pub const CREATE_CHARACTER: RequiredFields = RequiredFields {
        missing_status: StatusCode::NOT_FOUND,
        fields: &[
            ("character_name", "You must send a character name"),
            ("hair_color", "You must send a hair color"),
            ("height", "You must send a height value"),
            ("mass", "You must send a mass value"),
            ("skin_color", "You must send a skin color"),
        ],
    };

    pub const UPDATE_CHARACTER: RequiredFields = RequiredFields {
        missing_status: StatusCode::NOT_FOUND,
        fields: &[
            ("character_name", "You must send a new character name or write the current one"),
            ("id", "You must send the character id to be modified"),
            ("hair_color", "You must send a new hair color or write the current one"),
            ("height", "You must send an new height value or write the current one"),
            ("mass", "You must send a new mass value or write the current one"),
            ("skin_color", "You must send a new skin color or write the current one"),
        ],
    };

    pub const CREATE_PLANET: RequiredFields = RequiredFields {
        missing_status: StatusCode::NOT_FOUND,
        fields: &[
            ("planet_name", "You must send a planet name"),
            ("gravity", "You must send a gravity value"),
            ("diameter", "You must send a diameter value"),
            ("rotation_period", "You must send a rotation period value"),
        ],
    };

    pub const UPDATE_PLANET: RequiredFields = RequiredFields {
        missing_status: StatusCode::NOT_FOUND,
        fields: &[
            ("id", "You must send the planet id to be modified"),
            ("planet_name", "You must send a new planet name or write the current one"),
            ("gravity", "You must send a new gravity value or write the current one"),
            ("diameter", "You must send a new diameter value or write the current one"),
            ("rotation_period", "You must send a new rotation period value or write the current one"),
        ],
    };

    pub const CREATE_STARSHIP: RequiredFields = RequiredFields {
        missing_status: StatusCode::NOT_FOUND,
        fields: &[
            ("starship_name", "You must send the starship name"),
            ("model", "You must send the starship model"),
            ("starship_class", "You must send the starship class"),
            ("length", "You must send the starship length value"),
            ("crew", "You must send the starship crew value"),
        ],
    };

    pub const UPDATE_STARSHIP: RequiredFields = RequiredFields {
        missing_status: StatusCode::NOT_FOUND,
        fields: &[
            ("id", "you must send the starship id to be modified"),
            ("starship_name", "You must send the new starship name or write the current one"),
            ("model", "You must send the new starship model or write the current one"),
            ("starship_class", "You must send the new starship class or write the current one"),
            ("length", "You must send the new starship length value or write the current one"),
            ("crew", "You must send the new starship crew value or write the current one"),
        ],
    };

    pub const CREATE_FAVORITE: RequiredFields = RequiredFields {
        missing_status: StatusCode::BAD_REQUEST,
        fields: &[
            ("list_name", "You must send a list name"),
            ("character_id", "You must send a character ID"),
            ("planet_id", "You must send a planet ID"),
            ("starship_id", "You must send a starship ID"),
        ],
    };
}

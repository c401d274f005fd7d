//! Response envelope helpers. Every body is a JSON object carrying a `msg`.

use axum::{http::StatusCode, Json};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Serialize)]
pub struct Message {
    pub msg: String,
}

/// `{msg}` with the given status.
pub fn message(status: StatusCode, msg: impl Into<String>) -> (StatusCode, Json<Message>) {
    (status, Json(Message { msg: msg.into() }))
}

pub fn created(msg: impl Into<String>) -> (StatusCode, Json<Message>) {
    message(StatusCode::CREATED, msg)
}

pub fn ok(msg: impl Into<String>) -> (StatusCode, Json<Message>) {
    message(StatusCode::OK, msg)
}

/// `{msg, <key>: data}` with 200. `key` varies per entity (`planets`, `planet_info`, ...).
pub fn envelope<T: Serialize>(msg: &str, key: &str, data: T) -> (StatusCode, Json<Value>) {
    let mut body = Map::new();
    body.insert("msg".into(), Value::String(msg.to_string()));
    body.insert(
        key.to_string(),
        serde_json::to_value(data).unwrap_or(Value::Null),
    );
    (StatusCode::OK, Json(Value::Object(body)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_carries_msg_and_payload_key() {
        let (status, Json(body)) = envelope("hello", "planets", vec![1, 2]);
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["msg"], "hello");
        assert_eq!(body["planets"], serde_json::json!([1, 2]));
    }
}

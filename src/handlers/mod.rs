//! HTTP handlers, one module per entity. Each composes validation, a repository call inside a
//! per-request transaction, and serialization into the `{msg, ...}` envelope.

pub mod characters;
pub mod favorites;
pub mod planets;
pub mod starships;
pub mod users;

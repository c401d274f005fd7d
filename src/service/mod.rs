//! Request validation and relation resolution shared by the handlers.

pub mod relations;
mod validation;

pub use validation::{rules, RequestValidator, RequiredFields};

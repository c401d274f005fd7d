//! Request extractors.

mod body;
mod id;

pub use body::JsonBody;
pub use id::{parse_id, PathId};

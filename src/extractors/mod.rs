//! Request extractors that reject with `AppError`, so decode failures carry the `{"error": ...}` body.

mod id;
mod json;
mod search;
pub use id::ValidId;
pub use json::ValidJson;
pub use search::SearchTerm;

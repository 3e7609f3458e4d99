//! HTTP handlers: one per route, each issuing a single store call.

pub mod book;
pub mod category;
pub use book::*;
pub use category::*;

//! Bookstore API: CRUD and search over book categories and books, backed by PostgreSQL.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod state;
pub mod store;

pub use config::ServerConfig;
pub use error::{AppError, ConfigError};
pub use model::{Book, BookInput, Category, NewCategory};
pub use routes::{app, common_routes, library_routes};
pub use state::AppState;
pub use store::{LibraryStore, PgStore};

//! Shared application state for all routes.

use crate::store::LibraryStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// Built once in `main` and handed to every handler; the only route to the database.
    pub store: Arc<dyn LibraryStore>,
}

impl AppState {
    pub fn new(store: impl LibraryStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

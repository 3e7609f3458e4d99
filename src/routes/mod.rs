//! Routers: the bookstore API and the operational endpoints.

mod common;
mod library;
pub use common::common_routes;
pub use library::library_routes;

use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Full application router with request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(library_routes(state.clone()))
        .merge(common_routes(state))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}

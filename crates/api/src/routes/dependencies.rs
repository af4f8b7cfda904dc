//! Route definitions for dependency validation and drill-down.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::dependencies;
use crate::state::AppState;

/// Dependency routes mounted directly under `/api/v1`.
///
/// ```text
/// POST   /validate-dependencies                      -> validate
/// GET    /dependencies/{entity_type}/{entity_id}     -> page (?dependent=&page=&limit=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/validate-dependencies", post(dependencies::validate))
        .route(
            "/dependencies/{entity_type}/{entity_id}",
            get(dependencies::page),
        )
}

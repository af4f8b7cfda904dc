//! Route definitions for template categories.

use axum::routing::get;
use axum::Router;

use crate::handlers::template_categories;
use crate::state::AppState;

/// Routes mounted at `/template-categories`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete (engine-gated)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(template_categories::list).post(template_categories::create),
        )
        .route(
            "/{id}",
            get(template_categories::get_by_id)
                .put(template_categories::update)
                .delete(template_categories::delete),
        )
}

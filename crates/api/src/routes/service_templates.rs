//! Route definitions for service templates.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::service_templates;
use crate::state::AppState;

/// Routes mounted at `/service-templates`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete (engine-gated)
/// POST   /{id}/deactivate   -> deactivate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(service_templates::list).post(service_templates::create),
        )
        .route(
            "/{id}",
            get(service_templates::get_by_id)
                .put(service_templates::update)
                .delete(service_templates::delete),
        )
        .route("/{id}/deactivate", post(service_templates::deactivate))
}

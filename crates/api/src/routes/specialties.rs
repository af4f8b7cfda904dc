//! Route definitions for specialties.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::specialties;
use crate::state::AppState;

/// Routes mounted at `/specialties`.
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
        .route("/", get(specialties::list).post(specialties::create))
        .route(
            "/{id}",
            get(specialties::get_by_id)
                .put(specialties::update)
                .delete(specialties::delete),
        )
        .route("/{id}/deactivate", post(specialties::deactivate))
}

//! Route definitions for sectors.
//!
//! Company-scoped listing is mounted via [`super::companies::router`].

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::sectors;
use crate::state::AppState;

/// Routes mounted at `/sectors`.
///
/// ```text
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete (engine-gated)
/// POST   /{id}/deactivate   -> deactivate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(sectors::create))
        .route(
            "/{id}",
            get(sectors::get_by_id)
                .put(sectors::update)
                .delete(sectors::delete),
        )
        .route("/{id}/deactivate", post(sectors::deactivate))
}

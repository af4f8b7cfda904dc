//! Route definitions for equipment.
//!
//! Company-scoped listing is mounted via [`super::companies::router`].

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{equipment, maintenance_alerts};
use crate::state::AppState;

/// Routes mounted at `/equipment`.
///
/// ```text
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete (engine-gated)
/// GET    /{id}/alerts       -> maintenance alerts for the equipment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(equipment::create))
        .route(
            "/{id}",
            get(equipment::get_by_id)
                .put(equipment::update)
                .delete(equipment::delete),
        )
        .route("/{id}/alerts", get(maintenance_alerts::list_by_equipment))
}

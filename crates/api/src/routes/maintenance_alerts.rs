//! Route definitions for maintenance alerts.
//!
//! Equipment-scoped listing is mounted via [`super::equipment::router`].

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::maintenance_alerts;
use crate::state::AppState;

/// Routes mounted at `/maintenance-alerts`.
///
/// ```text
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete (engine-gated)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(maintenance_alerts::create))
        .route(
            "/{id}",
            get(maintenance_alerts::get_by_id)
                .put(maintenance_alerts::update)
                .delete(maintenance_alerts::delete),
        )
}

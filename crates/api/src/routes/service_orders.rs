//! Route definitions for service orders.
//!
//! Company-scoped listing is mounted via [`super::companies::router`].

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::service_orders;
use crate::state::AppState;

/// Routes mounted at `/service-orders`.
///
/// ```text
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete (engine-gated)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(service_orders::create))
        .route(
            "/{id}",
            get(service_orders::get_by_id)
                .put(service_orders::update)
                .delete(service_orders::delete),
        )
}

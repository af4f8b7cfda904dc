//! Route definitions for companies and their scoped sub-resources.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{
    companies, equipment, report_settings, sectors, service_orders, users,
};
use crate::state::AppState;

/// Routes mounted at `/companies`.
///
/// ```text
/// GET    /                              -> list
/// POST   /                              -> create
/// GET    /{id}                          -> get_by_id
/// PUT    /{id}                          -> update
/// DELETE /{id}                          -> delete (engine-gated)
/// POST   /{id}/deactivate               -> deactivate
/// GET    /{id}/sectors                  -> sectors scoped to the company
/// GET    /{id}/users                    -> users scoped to the company
/// GET    /{id}/equipment                -> equipment scoped to the company
/// GET    /{id}/service-orders           -> service orders, paginated
/// GET    /{id}/report-settings          -> report branding settings
/// PUT    /{id}/report-settings          -> upsert report branding settings
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(companies::list).post(companies::create))
        .route(
            "/{id}",
            get(companies::get_by_id)
                .put(companies::update)
                .delete(companies::delete),
        )
        .route("/{id}/deactivate", post(companies::deactivate))
        .route("/{id}/sectors", get(sectors::list_by_company))
        .route("/{id}/users", get(users::list_by_company))
        .route("/{id}/equipment", get(equipment::list_by_company))
        .route("/{id}/service-orders", get(service_orders::list_by_company))
        .route(
            "/{id}/report-settings",
            get(report_settings::get_by_company).put(report_settings::upsert),
        )
}

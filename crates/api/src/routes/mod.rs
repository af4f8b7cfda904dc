pub mod companies;
pub mod dependencies;
pub mod equipment;
pub mod health;
pub mod maintenance_alerts;
pub mod sectors;
pub mod service_orders;
pub mod service_templates;
pub mod specialties;
pub mod template_categories;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /companies                                 list, create
/// /companies/{id}                            get, update, delete
/// /companies/{id}/deactivate                 deactivate (POST)
/// /companies/{id}/sectors                    scoped sector list
/// /companies/{id}/users                      scoped user list
/// /companies/{id}/equipment                  scoped equipment list
/// /companies/{id}/service-orders             scoped order list, paginated
/// /companies/{id}/report-settings            get, upsert (GET, PUT)
///
/// /sectors                                   create
/// /sectors/{id}                              get, update, delete
/// /sectors/{id}/deactivate                   deactivate (POST)
///
/// /users                                     create
/// /users/{id}                                get, update, delete
/// /users/{id}/deactivate                     deactivate (POST)
///
/// /specialties                               list, create
/// /specialties/{id}                          get, update, delete
/// /specialties/{id}/deactivate               deactivate (POST)
///
/// /equipment                                 create
/// /equipment/{id}                            get, update, delete
/// /equipment/{id}/alerts                     scoped alert list
///
/// /service-orders                            create
/// /service-orders/{id}                       get, update, delete
///
/// /service-templates                         list, create
/// /service-templates/{id}                    get, update, delete
/// /service-templates/{id}/deactivate         deactivate (POST)
///
/// /template-categories                       list, create
/// /template-categories/{id}                  get, update, delete
///
/// /maintenance-alerts                        create
/// /maintenance-alerts/{id}                   get, update, delete
///
/// /validate-dependencies                     dry-run dependency check (POST)
/// /dependencies/{entity_type}/{entity_id}    dependent record drill-down (GET)
/// ```
///
/// Every DELETE above consults the dependency engine first and answers
/// 409 with a full dependency report when the deletion is blocked.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/companies", companies::router())
        .nest("/sectors", sectors::router())
        .nest("/users", users::router())
        .nest("/specialties", specialties::router())
        .nest("/equipment", equipment::router())
        .nest("/service-orders", service_orders::router())
        .nest("/service-templates", service_templates::router())
        .nest("/template-categories", template_categories::router())
        .nest("/maintenance-alerts", maintenance_alerts::router())
        .merge(dependencies::router())
}

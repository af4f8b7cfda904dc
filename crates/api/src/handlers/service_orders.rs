//! Handlers for service order endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use maintdesk_core::dependency::registry::ENTITY_SERVICE_ORDERS;
use maintdesk_core::dependency::{attempt_delete, DeletionOutcome};
use maintdesk_core::error::CoreError;
use maintdesk_core::types::DbId;
use maintdesk_db::models::service_order::{CreateServiceOrder, ServiceOrder, UpdateServiceOrder};
use maintdesk_db::repositories::ServiceOrderRepo;

use crate::error::AppResult;
use crate::handlers::dependencies::blocked_response;
use crate::query::PaginationParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /service-orders
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateServiceOrder>,
) -> AppResult<(StatusCode, Json<ServiceOrder>)> {
    let order = ServiceOrderRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /companies/{company_id}/service-orders
pub async fn list_by_company(
    State(state): State<AppState>,
    Path(company_id): Path<DbId>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<DataResponse<Vec<ServiceOrder>>>> {
    let orders =
        ServiceOrderRepo::list_by_company(&state.pool, company_id, params.limit, params.offset)
            .await?;
    Ok(Json(DataResponse { data: orders }))
}

/// GET /service-orders/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ServiceOrder>> {
    let order = ServiceOrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "ServiceOrder",
            id,
        })?;
    Ok(Json(order))
}

/// PUT /service-orders/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateServiceOrder>,
) -> AppResult<Json<ServiceOrder>> {
    let order = ServiceOrderRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "ServiceOrder",
            id,
        })?;
    Ok(Json(order))
}

/// DELETE /service-orders/{id}
///
/// Service orders have no registered dependents, so the engine clears
/// them immediately; routing through it anyway keeps the deletion path
/// uniform should a rule ever be added.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    ServiceOrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "ServiceOrder",
            id,
        })?;

    let pool = state.pool.clone();
    let outcome = attempt_delete(&state.engine, ENTITY_SERVICE_ORDERS, id, || async move {
        ServiceOrderRepo::delete(&pool, id).await.map(|_| ())
    })
    .await?;

    match outcome {
        DeletionOutcome::Deleted => Ok(StatusCode::NO_CONTENT.into_response()),
        DeletionOutcome::Blocked(result) => Ok(blocked_response(&result)),
    }
}

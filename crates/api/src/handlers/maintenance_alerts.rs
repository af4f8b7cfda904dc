//! Handlers for maintenance alert endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use maintdesk_core::dependency::registry::ENTITY_MAINTENANCE_ALERTS;
use maintdesk_core::dependency::{attempt_delete, DeletionOutcome};
use maintdesk_core::error::CoreError;
use maintdesk_core::types::DbId;
use maintdesk_db::models::maintenance_alert::{
    CreateMaintenanceAlert, MaintenanceAlert, UpdateMaintenanceAlert,
};
use maintdesk_db::repositories::MaintenanceAlertRepo;

use crate::error::AppResult;
use crate::handlers::dependencies::blocked_response;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /maintenance-alerts
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateMaintenanceAlert>,
) -> AppResult<(StatusCode, Json<MaintenanceAlert>)> {
    let alert = MaintenanceAlertRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(alert)))
}

/// GET /equipment/{equipment_id}/alerts
pub async fn list_by_equipment(
    State(state): State<AppState>,
    Path(equipment_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<MaintenanceAlert>>>> {
    let alerts = MaintenanceAlertRepo::list_by_equipment(&state.pool, equipment_id).await?;
    Ok(Json(DataResponse { data: alerts }))
}

/// GET /maintenance-alerts/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MaintenanceAlert>> {
    let alert = MaintenanceAlertRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "MaintenanceAlert",
            id,
        })?;
    Ok(Json(alert))
}

/// PUT /maintenance-alerts/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateMaintenanceAlert>,
) -> AppResult<Json<MaintenanceAlert>> {
    let alert = MaintenanceAlertRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "MaintenanceAlert",
            id,
        })?;
    Ok(Json(alert))
}

/// DELETE /maintenance-alerts/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    MaintenanceAlertRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "MaintenanceAlert",
            id,
        })?;

    let pool = state.pool.clone();
    let outcome = attempt_delete(
        &state.engine,
        ENTITY_MAINTENANCE_ALERTS,
        id,
        || async move { MaintenanceAlertRepo::delete(&pool, id).await.map(|_| ()) },
    )
    .await?;

    match outcome {
        DeletionOutcome::Deleted => Ok(StatusCode::NO_CONTENT.into_response()),
        DeletionOutcome::Blocked(result) => Ok(blocked_response(&result)),
    }
}

//! Handlers for equipment endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use maintdesk_core::dependency::registry::ENTITY_EQUIPMENT;
use maintdesk_core::dependency::{attempt_delete, DeletionOutcome};
use maintdesk_core::error::CoreError;
use maintdesk_core::types::DbId;
use maintdesk_db::models::equipment::{CreateEquipment, Equipment, UpdateEquipment};
use maintdesk_db::repositories::EquipmentRepo;

use crate::error::AppResult;
use crate::handlers::dependencies::blocked_response;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /equipment
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateEquipment>,
) -> AppResult<(StatusCode, Json<Equipment>)> {
    let equipment = EquipmentRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(equipment)))
}

/// GET /companies/{company_id}/equipment
pub async fn list_by_company(
    State(state): State<AppState>,
    Path(company_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Equipment>>>> {
    let equipment = EquipmentRepo::list_by_company(&state.pool, company_id).await?;
    Ok(Json(DataResponse { data: equipment }))
}

/// GET /equipment/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Equipment>> {
    let equipment = EquipmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Equipment",
            id,
        })?;
    Ok(Json(equipment))
}

/// PUT /equipment/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEquipment>,
) -> AppResult<Json<Equipment>> {
    let equipment = EquipmentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Equipment",
            id,
        })?;
    Ok(Json(equipment))
}

/// DELETE /equipment/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    EquipmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Equipment",
            id,
        })?;

    let pool = state.pool.clone();
    let outcome = attempt_delete(&state.engine, ENTITY_EQUIPMENT, id, || async move {
        EquipmentRepo::delete(&pool, id).await.map(|_| ())
    })
    .await?;

    match outcome {
        DeletionOutcome::Deleted => Ok(StatusCode::NO_CONTENT.into_response()),
        DeletionOutcome::Blocked(result) => Ok(blocked_response(&result)),
    }
}

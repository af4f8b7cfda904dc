//! Handlers for sector endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use maintdesk_core::dependency::registry::ENTITY_SECTORS;
use maintdesk_core::dependency::{attempt_delete, DeletionOutcome};
use maintdesk_core::error::CoreError;
use maintdesk_core::types::DbId;
use maintdesk_db::models::sector::{CreateSector, Sector, UpdateSector};
use maintdesk_db::repositories::SectorRepo;

use crate::error::AppResult;
use crate::handlers::dependencies::blocked_response;
use crate::query::IncludeInactiveParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /sectors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSector>,
) -> AppResult<(StatusCode, Json<Sector>)> {
    let sector = SectorRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(sector)))
}

/// GET /companies/{company_id}/sectors
pub async fn list_by_company(
    State(state): State<AppState>,
    Path(company_id): Path<DbId>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<DataResponse<Vec<Sector>>>> {
    let sectors =
        SectorRepo::list_by_company(&state.pool, company_id, params.include_inactive).await?;
    Ok(Json(DataResponse { data: sectors }))
}

/// GET /sectors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Sector>> {
    let sector = SectorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Sector",
            id,
        })?;
    Ok(Json(sector))
}

/// PUT /sectors/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSector>,
) -> AppResult<Json<Sector>> {
    let sector = SectorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Sector",
            id,
        })?;
    Ok(Json(sector))
}

/// DELETE /sectors/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    SectorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Sector",
            id,
        })?;

    let pool = state.pool.clone();
    let outcome = attempt_delete(&state.engine, ENTITY_SECTORS, id, || async move {
        SectorRepo::delete(&pool, id).await.map(|_| ())
    })
    .await?;

    match outcome {
        DeletionOutcome::Deleted => Ok(StatusCode::NO_CONTENT.into_response()),
        DeletionOutcome::Blocked(result) => Ok(blocked_response(&result)),
    }
}

/// POST /sectors/{id}/deactivate
pub async fn deactivate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Sector>> {
    let sector = SectorRepo::deactivate(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Sector",
            id,
        })?;
    Ok(Json(sector))
}

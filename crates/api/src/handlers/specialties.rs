//! Handlers for specialty endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use maintdesk_core::dependency::registry::ENTITY_SPECIALTIES;
use maintdesk_core::dependency::{attempt_delete, DeletionOutcome};
use maintdesk_core::error::CoreError;
use maintdesk_core::types::DbId;
use maintdesk_db::models::specialty::{CreateSpecialty, Specialty, UpdateSpecialty};
use maintdesk_db::repositories::SpecialtyRepo;

use crate::error::AppResult;
use crate::handlers::dependencies::blocked_response;
use crate::query::IncludeInactiveParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /specialties
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateSpecialty>,
) -> AppResult<(StatusCode, Json<Specialty>)> {
    let specialty = SpecialtyRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(specialty)))
}

/// GET /specialties
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<DataResponse<Vec<Specialty>>>> {
    let specialties = SpecialtyRepo::list(&state.pool, params.include_inactive).await?;
    Ok(Json(DataResponse { data: specialties }))
}

/// GET /specialties/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Specialty>> {
    let specialty = SpecialtyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Specialty",
            id,
        })?;
    Ok(Json(specialty))
}

/// PUT /specialties/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSpecialty>,
) -> AppResult<Json<Specialty>> {
    let specialty = SpecialtyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Specialty",
            id,
        })?;
    Ok(Json(specialty))
}

/// DELETE /specialties/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    SpecialtyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Specialty",
            id,
        })?;

    let pool = state.pool.clone();
    let outcome = attempt_delete(&state.engine, ENTITY_SPECIALTIES, id, || async move {
        SpecialtyRepo::delete(&pool, id).await.map(|_| ())
    })
    .await?;

    match outcome {
        DeletionOutcome::Deleted => Ok(StatusCode::NO_CONTENT.into_response()),
        DeletionOutcome::Blocked(result) => Ok(blocked_response(&result)),
    }
}

/// POST /specialties/{id}/deactivate
pub async fn deactivate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Specialty>> {
    let specialty = SpecialtyRepo::deactivate(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Specialty",
            id,
        })?;
    Ok(Json(specialty))
}

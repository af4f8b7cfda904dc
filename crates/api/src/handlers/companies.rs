//! Handlers for company endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use maintdesk_core::dependency::registry::ENTITY_COMPANIES;
use maintdesk_core::dependency::{attempt_delete, DeletionOutcome};
use maintdesk_core::error::CoreError;
use maintdesk_core::types::DbId;
use maintdesk_db::models::company::{Company, CreateCompany, UpdateCompany};
use maintdesk_db::repositories::CompanyRepo;

use crate::error::AppResult;
use crate::handlers::dependencies::blocked_response;
use crate::query::IncludeInactiveParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /companies
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateCompany>,
) -> AppResult<(StatusCode, Json<Company>)> {
    let company = CompanyRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(company)))
}

/// GET /companies
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<DataResponse<Vec<Company>>>> {
    let companies = CompanyRepo::list(&state.pool, params.include_inactive).await?;
    Ok(Json(DataResponse { data: companies }))
}

/// GET /companies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Company>> {
    let company = CompanyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Company",
            id,
        })?;
    Ok(Json(company))
}

/// PUT /companies/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCompany>,
) -> AppResult<Json<Company>> {
    let company = CompanyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Company",
            id,
        })?;
    Ok(Json(company))
}

/// DELETE /companies/{id}
///
/// Returns 204 when the engine clears the deletion, 409 with the full
/// dependency report when it does not.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    CompanyRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Company",
            id,
        })?;

    let pool = state.pool.clone();
    let outcome = attempt_delete(&state.engine, ENTITY_COMPANIES, id, || async move {
        CompanyRepo::delete(&pool, id).await.map(|_| ())
    })
    .await?;

    match outcome {
        DeletionOutcome::Deleted => Ok(StatusCode::NO_CONTENT.into_response()),
        DeletionOutcome::Blocked(result) => Ok(blocked_response(&result)),
    }
}

/// POST /companies/{id}/deactivate
pub async fn deactivate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Company>> {
    let company = CompanyRepo::deactivate(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Company",
            id,
        })?;
    Ok(Json(company))
}

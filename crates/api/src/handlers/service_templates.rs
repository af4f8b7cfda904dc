//! Handlers for service template endpoints.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use maintdesk_core::dependency::registry::ENTITY_SERVICE_TEMPLATES;
use maintdesk_core::dependency::{attempt_delete, DeletionOutcome};
use maintdesk_core::error::CoreError;
use maintdesk_core::types::DbId;
use maintdesk_db::models::service_template::{
    CreateServiceTemplate, ServiceTemplate, UpdateServiceTemplate,
};
use maintdesk_db::repositories::ServiceTemplateRepo;

use crate::error::AppResult;
use crate::handlers::dependencies::blocked_response;
use crate::query::IncludeInactiveParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /service-templates
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateServiceTemplate>,
) -> AppResult<(StatusCode, Json<ServiceTemplate>)> {
    let template = ServiceTemplateRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(template)))
}

/// GET /service-templates
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<IncludeInactiveParams>,
) -> AppResult<Json<DataResponse<Vec<ServiceTemplate>>>> {
    let templates = ServiceTemplateRepo::list(&state.pool, params.include_inactive).await?;
    Ok(Json(DataResponse { data: templates }))
}

/// GET /service-templates/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ServiceTemplate>> {
    let template = ServiceTemplateRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "ServiceTemplate",
            id,
        })?;
    Ok(Json(template))
}

/// PUT /service-templates/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateServiceTemplate>,
) -> AppResult<Json<ServiceTemplate>> {
    let template = ServiceTemplateRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "ServiceTemplate",
            id,
        })?;
    Ok(Json(template))
}

/// DELETE /service-templates/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    ServiceTemplateRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "ServiceTemplate",
            id,
        })?;

    let pool = state.pool.clone();
    let outcome = attempt_delete(&state.engine, ENTITY_SERVICE_TEMPLATES, id, || async move {
        ServiceTemplateRepo::delete(&pool, id).await.map(|_| ())
    })
    .await?;

    match outcome {
        DeletionOutcome::Deleted => Ok(StatusCode::NO_CONTENT.into_response()),
        DeletionOutcome::Blocked(result) => Ok(blocked_response(&result)),
    }
}

/// POST /service-templates/{id}/deactivate
pub async fn deactivate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ServiceTemplate>> {
    let template = ServiceTemplateRepo::deactivate(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "ServiceTemplate",
            id,
        })?;
    Ok(Json(template))
}

//! Handlers for template category endpoints.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use maintdesk_core::dependency::registry::ENTITY_TEMPLATE_CATEGORIES;
use maintdesk_core::dependency::{attempt_delete, DeletionOutcome};
use maintdesk_core::error::CoreError;
use maintdesk_core::types::DbId;
use maintdesk_db::models::template_category::{
    CreateTemplateCategory, TemplateCategory, UpdateTemplateCategory,
};
use maintdesk_db::repositories::TemplateCategoryRepo;

use crate::error::AppResult;
use crate::handlers::dependencies::blocked_response;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /template-categories
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateTemplateCategory>,
) -> AppResult<(StatusCode, Json<TemplateCategory>)> {
    let category = TemplateCategoryRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /template-categories
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<TemplateCategory>>>> {
    let categories = TemplateCategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// GET /template-categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<TemplateCategory>> {
    let category = TemplateCategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "TemplateCategory",
            id,
        })?;
    Ok(Json(category))
}

/// PUT /template-categories/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTemplateCategory>,
) -> AppResult<Json<TemplateCategory>> {
    let category = TemplateCategoryRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "TemplateCategory",
            id,
        })?;
    Ok(Json(category))
}

/// DELETE /template-categories/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Response> {
    TemplateCategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "TemplateCategory",
            id,
        })?;

    let pool = state.pool.clone();
    let outcome = attempt_delete(
        &state.engine,
        ENTITY_TEMPLATE_CATEGORIES,
        id,
        || async move { TemplateCategoryRepo::delete(&pool, id).await.map(|_| ()) },
    )
    .await?;

    match outcome {
        DeletionOutcome::Deleted => Ok(StatusCode::NO_CONTENT.into_response()),
        DeletionOutcome::Blocked(result) => Ok(blocked_response(&result)),
    }
}

//! Handlers for dependency validation and drill-down.
//!
//! Also hosts [`blocked_response`], the 409 payload builder every entity
//! delete handler uses when the engine vetoes a deletion.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use maintdesk_core::dependency::registry::is_known_entity_type;
use maintdesk_core::dependency::{DependencyPage, ValidateOptions, ValidationResult};
use maintdesk_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body for `POST /validate-dependencies`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateDependenciesRequest {
    pub entity_type: String,
    pub entity_id: DbId,
    /// Also report advisory relationships and attach sample records.
    #[serde(default)]
    pub include_details: bool,
}

/// Query parameters for the dependency drill-down.
#[derive(Debug, Deserialize)]
pub struct DependencyPageParams {
    /// Dependent entity type selecting the relationship to page through.
    pub dependent: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// POST /api/v1/validate-dependencies
///
/// Returns 200 for every completed check, including `canDelete = false`:
/// a blocked verdict is a normal outcome, not a server error.
pub async fn validate(
    State(state): State<AppState>,
    Json(input): Json<ValidateDependenciesRequest>,
) -> AppResult<Json<ValidationResult>> {
    if !is_known_entity_type(&input.entity_type) {
        return Err(AppError::BadRequest(format!(
            "unknown entity type '{}'",
            input.entity_type
        )));
    }

    let result = state
        .engine
        .validate_with(
            &input.entity_type,
            input.entity_id,
            ValidateOptions {
                include_advisory: input.include_details,
                include_records: input.include_details,
            },
        )
        .await?;

    Ok(Json(result))
}

/// GET /api/v1/dependencies/{entity_type}/{entity_id}?dependent=&page=&limit=
pub async fn page(
    State(state): State<AppState>,
    Path((entity_type, entity_id)): Path<(String, DbId)>,
    Query(params): Query<DependencyPageParams>,
) -> AppResult<Json<DependencyPage>> {
    let dependent = params
        .dependent
        .ok_or_else(|| AppError::BadRequest("missing required 'dependent' parameter".into()))?;

    let page = state
        .engine
        .page_dependents(
            &entity_type,
            &dependent,
            entity_id,
            params.page.unwrap_or(1),
            params.limit.unwrap_or(20),
        )
        .await?;

    Ok(Json(page))
}

/// Build the 409 response for a deletion blocked by the engine.
///
/// `dependencyCount` mirrors the verdict's `totalCount`; UI clients key
/// their "cannot delete" dialog on the 409 status code.
pub fn blocked_response(result: &ValidationResult) -> Response {
    let body = json!({
        "error": "Deletion blocked by dependent records",
        "code": "DEPENDENCY_CONFLICT",
        "canDelete": result.can_delete,
        "dependencyCount": result.total_count,
        "dependencies": result.dependencies,
        "suggestions": result.suggestions,
        "customMessages": result.custom_messages,
    });
    (StatusCode::CONFLICT, Json(body)).into_response()
}

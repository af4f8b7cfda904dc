//! Dependency drill-down paginator.
//!
//! Backs the "view dependencies" UI: a paged listing of the rows of one
//! dependent entity that reference a given parent.

use serde::Serialize;

use crate::types::DbId;

use super::engine::{ValidationEngine, ValidationError};
use super::store::DependencyStore;

/// Drill-down requested for a (parent, dependent) pair with no
/// registered relationship rule.
#[derive(Debug, thiserror::Error)]
#[error("no relationship registered between '{parent_entity}' and '{dependent_entity}'")]
pub struct UnknownRelationshipError {
    pub parent_entity: String,
    pub dependent_entity: String,
}

/// Errors from [`ValidationEngine::page_dependents`].
#[derive(Debug, thiserror::Error)]
pub enum DetailError {
    #[error(transparent)]
    UnknownRelationship(#[from] UnknownRelationshipError),

    #[error("page size must be greater than zero, got {0}")]
    InvalidPageSize(i64),

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// One page of referencing rows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyPage {
    pub rows: Vec<serde_json::Value>,
    pub page: i64,
    pub total: i64,
    pub total_pages: i64,
    pub has_next: bool,
    pub has_prev: bool,
}

impl<S: DependencyStore> ValidationEngine<S> {
    /// Paged listing of the dependent rows for one relationship.
    ///
    /// `page` is 1-based. An out-of-range page returns an empty page
    /// with `has_next = false` rather than erroring.
    pub async fn page_dependents(
        &self,
        parent_entity: &str,
        dependent_entity: &str,
        parent_id: DbId,
        page: i64,
        page_size: i64,
    ) -> Result<DependencyPage, DetailError> {
        if page_size <= 0 {
            return Err(DetailError::InvalidPageSize(page_size));
        }
        let rule = self
            .registry()
            .rule_for_pair(parent_entity, dependent_entity)
            .ok_or_else(|| UnknownRelationshipError {
                parent_entity: parent_entity.to_string(),
                dependent_entity: dependent_entity.to_string(),
            })?;

        let page = page.max(1);
        let offset = (page - 1) * page_size;
        let (rows, total) = self
            .store()
            .select_where(
                rule.dependent_entity,
                rule.foreign_key,
                parent_id,
                page_size,
                offset,
            )
            .await
            .map_err(|source| ValidationError {
                dependent_entity: rule.dependent_entity.to_string(),
                source,
            })?;

        let total_pages = if total == 0 {
            0
        } else {
            (total + page_size - 1) / page_size
        };

        Ok(DependencyPage {
            rows,
            page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1 && total_pages > 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;
    use crate::dependency::engine::tests::{engine_with, FakeStore};
    use crate::dependency::registry::{ENTITY_COMPANIES, ENTITY_SECTORS};

    fn engine_with_sectors(count: i64) -> crate::dependency::engine::ValidationEngine<FakeStore> {
        engine_with(FakeStore::with_counts(&[(
            ENTITY_SECTORS,
            "company_id",
            5,
            count,
        )]))
    }

    #[tokio::test]
    async fn pages_concatenate_without_gaps_or_duplicates() {
        let engine = engine_with_sectors(7);
        let mut seen = Vec::new();

        for page in 1..=3 {
            let result = engine
                .page_dependents(ENTITY_COMPANIES, ENTITY_SECTORS, 5, page, 3)
                .await
                .unwrap();
            assert_eq!(result.total, 7);
            assert_eq!(result.total_pages, 3);
            assert_eq!(result.has_prev, page > 1);
            assert_eq!(result.has_next, page < 3);
            seen.extend(result.rows.iter().map(|r| r["id"].as_i64().unwrap()));
        }

        assert_eq!(seen, vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[tokio::test]
    async fn out_of_range_page_is_empty_not_an_error() {
        let engine = engine_with_sectors(4);
        let result = engine
            .page_dependents(ENTITY_COMPANIES, ENTITY_SECTORS, 5, 9, 3)
            .await
            .unwrap();

        assert!(result.rows.is_empty());
        assert!(!result.has_next);
        assert!(result.has_prev);
    }

    #[tokio::test]
    async fn unknown_pair_is_rejected() {
        let engine = engine_with_sectors(4);
        let err = engine
            .page_dependents(ENTITY_SECTORS, ENTITY_COMPANIES, 5, 1, 10)
            .await
            .unwrap_err();
        assert_matches!(err, DetailError::UnknownRelationship(_));
    }

    #[tokio::test]
    async fn non_positive_page_size_is_rejected() {
        let engine = engine_with_sectors(4);
        let err = engine
            .page_dependents(ENTITY_COMPANIES, ENTITY_SECTORS, 5, 1, 0)
            .await
            .unwrap_err();
        assert_matches!(err, DetailError::InvalidPageSize(0));
    }
}

//! The validation decision engine.
//!
//! Aggregates per-relationship dependent counts into a single verdict:
//! can this entity be deleted, what blocks it, and what remediation is
//! available. Counts are issued concurrently (the dependent tables are
//! disjoint) and the first storage failure aborts the whole check;
//! a failed check is never interpreted as "safe to delete".

use std::collections::BTreeMap;
use std::sync::Arc;

use futures::future::try_join_all;
use serde::Serialize;

use crate::types::DbId;

use super::registry::{RelationshipKind, RelationshipRegistry, RelationshipRule};
use super::store::{DependencyStore, StorageError};

/// Maximum sample rows attached per finding when detail is requested.
pub const DETAIL_SAMPLE_LIMIT: i64 = 5;

/// A dependency check that could not be completed.
///
/// Wraps the first [`StorageError`] observed while counting. Callers
/// must treat this as "do not delete", never as "no dependents".
#[derive(Debug, thiserror::Error)]
#[error("dependency check for '{dependent_entity}' failed: {source}")]
pub struct ValidationError {
    pub dependent_entity: String,
    #[source]
    pub source: StorageError,
}

/// One evaluated relationship with at least the dependent count.
///
/// Computed fresh on every validation call and never persisted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DependencyFinding {
    pub entity: String,
    pub entity_display_name: String,
    pub count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<Vec<serde_json::Value>>,
    #[serde(skip)]
    pub kind: RelationshipKind,
}

/// Remediation option kinds, ranked NAVIGATE > DEACTIVATE > MANUAL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Navigate,
    Deactivate,
    Manual,
}

/// Drill-down reference for a NAVIGATE suggestion.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionTarget {
    pub entity: String,
    pub parent_id: DbId,
}

/// One remediation option offered alongside a blocked verdict.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub kind: SuggestionKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<SuggestionTarget>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Suggestion {
    fn navigate(entity: &str, display_name: &str, parent_id: DbId) -> Self {
        Self {
            kind: SuggestionKind::Navigate,
            message: format!("View {display_name}"),
            target: Some(SuggestionTarget {
                entity: entity.to_string(),
                parent_id,
            }),
            description: None,
        }
    }

    fn deactivate() -> Self {
        Self {
            kind: SuggestionKind::Deactivate,
            message: "Deactivate instead of delete".to_string(),
            target: None,
            description: Some(
                "Keeps the record and its history but hides it from active listings."
                    .to_string(),
            ),
        }
    }

    fn manual(description: String) -> Self {
        Self {
            kind: SuggestionKind::Manual,
            message: "Resolve dependencies manually".to_string(),
            target: None,
            description: Some(description),
        }
    }
}

/// The aggregate verdict for one (entity type, id) deletion check.
///
/// `can_delete == true` implies `dependencies` holds no blocking
/// findings and `total_count == 0`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub can_delete: bool,
    pub dependencies: Vec<DependencyFinding>,
    pub total_count: i64,
    pub suggestions: Vec<Suggestion>,
    pub custom_messages: BTreeMap<String, String>,
}

impl ValidationResult {
    /// Verdict used when the check itself failed: nothing is known about
    /// the dependents, so deletion stays blocked with a MANUAL
    /// suggestion describing the failure.
    pub fn blocked_by_failure(error: &ValidationError) -> Self {
        Self {
            can_delete: false,
            dependencies: Vec::new(),
            total_count: 0,
            suggestions: vec![Suggestion::manual(format!(
                "The dependency check could not be completed ({error}). \
                 Deletion is blocked until it can be verified."
            ))],
            custom_messages: BTreeMap::new(),
        }
    }
}

/// Options for [`ValidationEngine::validate_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateOptions {
    /// Also evaluate and report ADVISORY relationships.
    pub include_advisory: bool,
    /// Attach up to [`DETAIL_SAMPLE_LIMIT`] sample rows per finding.
    pub include_records: bool,
}

/// The central decision engine: registry + store, no mutable state.
#[derive(Debug)]
pub struct ValidationEngine<S> {
    registry: Arc<RelationshipRegistry>,
    store: Arc<S>,
}

impl<S> ValidationEngine<S> {
    pub fn new(registry: Arc<RelationshipRegistry>, store: Arc<S>) -> Self {
        Self { registry, store }
    }

    pub fn registry(&self) -> &RelationshipRegistry {
        &self.registry
    }

    pub(crate) fn store(&self) -> &S {
        &self.store
    }
}

impl<S: DependencyStore> ValidationEngine<S> {
    /// Validate with default options (blocking relationships only).
    pub async fn validate(
        &self,
        parent_entity: &str,
        parent_id: DbId,
    ) -> Result<ValidationResult, ValidationError> {
        self.validate_with(parent_entity, parent_id, ValidateOptions::default())
            .await
    }

    /// Run the full decision algorithm for one (entity type, id).
    ///
    /// Counts all applicable relationships concurrently; the first
    /// storage failure wins and the remaining in-flight queries are
    /// dropped. Output order follows registry registration order, so
    /// repeated calls with no intervening writes are identical.
    pub async fn validate_with(
        &self,
        parent_entity: &str,
        parent_id: DbId,
        opts: ValidateOptions,
    ) -> Result<ValidationResult, ValidationError> {
        let rules: Vec<&RelationshipRule> = self
            .registry
            .rules_for(parent_entity)
            .filter(|r| opts.include_advisory || r.kind == RelationshipKind::Blocking)
            .collect();

        let counts = try_join_all(rules.iter().map(|rule| async move {
            let count = self
                .store
                .count_where(rule.dependent_entity, rule.foreign_key, parent_id)
                .await
                .map_err(|source| ValidationError {
                    dependent_entity: rule.dependent_entity.to_string(),
                    source,
                })?;
            Ok::<_, ValidationError>((*rule, count))
        }))
        .await?;

        let mut dependencies = Vec::new();
        let mut suggestions = Vec::new();
        let mut custom_messages = BTreeMap::new();
        let mut total_count = 0;
        let mut blocked = false;

        for (rule, count) in &counts {
            if *count == 0 {
                continue;
            }
            if rule.kind == RelationshipKind::Blocking {
                blocked = true;
                total_count += count;
                suggestions.push(Suggestion::navigate(
                    rule.dependent_entity,
                    rule.display_name,
                    parent_id,
                ));
            }
            dependencies.push(DependencyFinding {
                entity: rule.dependent_entity.to_string(),
                entity_display_name: rule.display_name.to_string(),
                count: *count,
                records: None,
                kind: rule.kind,
            });
            custom_messages.insert(
                rule.dependent_entity.to_string(),
                self.registry.message_template(rule.dependent_entity),
            );
        }

        if blocked {
            if self.registry.supports_deactivation(parent_entity) {
                suggestions.push(Suggestion::deactivate());
            }
            if suggestions.is_empty() {
                suggestions.push(Suggestion::manual(
                    "Review and detach the referencing records, then retry the deletion."
                        .to_string(),
                ));
            }
        } else {
            // A clean verdict carries no remediation.
            suggestions.clear();
        }

        if opts.include_records {
            let mut slot = 0;
            for (rule, count) in &counts {
                if *count == 0 {
                    continue;
                }
                let (rows, _total) = self
                    .store
                    .select_where(
                        rule.dependent_entity,
                        rule.foreign_key,
                        parent_id,
                        DETAIL_SAMPLE_LIMIT,
                        0,
                    )
                    .await
                    .map_err(|source| ValidationError {
                        dependent_entity: rule.dependent_entity.to_string(),
                        source,
                    })?;
                dependencies[slot].records = Some(rows);
                slot += 1;
            }
        }

        Ok(ValidationResult {
            can_delete: !blocked,
            dependencies,
            total_count,
            suggestions,
            custom_messages,
        })
    }
}

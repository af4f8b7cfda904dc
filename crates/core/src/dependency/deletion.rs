//! Deletion orchestration facade.
//!
//! Every entity delete flow calls [`attempt_delete`] instead of the
//! repository delete directly. The caller supplies the actual delete as
//! a closure; it runs at most once, and only after an explicit
//! `can_delete = true` verdict.

use std::future::Future;

use crate::types::DbId;

use super::engine::{ValidationEngine, ValidationResult};
use super::store::DependencyStore;

/// Outcome of a guarded delete attempt.
#[derive(Debug)]
pub enum DeletionOutcome {
    /// Validation passed and `delete_fn` completed.
    Deleted,
    /// Deletion was not performed; the verdict explains why.
    Blocked(ValidationResult),
}

/// Validate, then delete only on a clean verdict.
///
/// A failed validation (storage error, timeout) degrades to
/// [`DeletionOutcome::Blocked`] with a MANUAL suggestion describing the
/// infrastructure failure; it never falls through to `delete_fn`.
/// Errors from `delete_fn` itself propagate to the caller unchanged.
pub async fn attempt_delete<S, F, Fut, E>(
    engine: &ValidationEngine<S>,
    parent_entity: &str,
    parent_id: DbId,
    delete_fn: F,
) -> Result<DeletionOutcome, E>
where
    S: DependencyStore,
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<(), E>>,
{
    match engine.validate(parent_entity, parent_id).await {
        Ok(result) if result.can_delete => {
            delete_fn().await?;
            Ok(DeletionOutcome::Deleted)
        }
        Ok(result) => Ok(DeletionOutcome::Blocked(result)),
        Err(error) => Ok(DeletionOutcome::Blocked(ValidationResult::blocked_by_failure(
            &error,
        ))),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use assert_matches::assert_matches;

    use super::*;
    use crate::dependency::engine::tests::{engine_with, FakeStore};
    use crate::dependency::engine::SuggestionKind;
    use crate::dependency::registry::{ENTITY_COMPANIES, ENTITY_SECTORS, ENTITY_SPECIALTIES};

    #[tokio::test]
    async fn clean_verdict_invokes_delete_exactly_once() {
        let engine = engine_with(FakeStore::default());
        let calls = AtomicUsize::new(0);

        let outcome = attempt_delete(&engine, ENTITY_SPECIALTIES, 9, || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<(), &str>(())
        })
        .await
        .unwrap();

        assert_matches!(outcome, DeletionOutcome::Deleted);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn blocked_verdict_never_invokes_delete() {
        let engine = engine_with(FakeStore::with_counts(&[(
            ENTITY_SECTORS,
            "company_id",
            5,
            3,
        )]));
        let calls = AtomicUsize::new(0);

        let outcome = attempt_delete(&engine, ENTITY_COMPANIES, 5, || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<(), &str>(())
        })
        .await
        .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        let result = assert_matches!(outcome, DeletionOutcome::Blocked(result) => result);
        assert!(!result.can_delete);
        assert_eq!(result.total_count, 3);
    }

    #[tokio::test]
    async fn validation_failure_blocks_without_deleting() {
        let mut store = FakeStore::default();
        store.fail_table = Some(ENTITY_SECTORS);
        let engine = engine_with(store);
        let calls = AtomicUsize::new(0);

        let outcome = attempt_delete(&engine, ENTITY_COMPANIES, 5, || async {
            calls.fetch_add(1, Ordering::SeqCst);
            Ok::<(), &str>(())
        })
        .await
        .unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 0);
        let result = assert_matches!(outcome, DeletionOutcome::Blocked(result) => result);
        assert!(!result.can_delete);
        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(result.suggestions[0].kind, SuggestionKind::Manual);
    }

    #[tokio::test]
    async fn delete_errors_propagate() {
        let engine = engine_with(FakeStore::default());

        let result: Result<DeletionOutcome, &str> =
            attempt_delete(&engine, ENTITY_SPECIALTIES, 9, || async { Err("boom") }).await;

        assert_eq!(result.unwrap_err(), "boom");
    }
}

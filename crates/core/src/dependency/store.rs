//! Persistence port consumed by the validation engine.
//!
//! The engine never talks to the database directly; it counts and
//! samples dependent rows through this trait. `maintdesk-db` provides
//! the PostgreSQL implementation, and tests substitute an in-memory
//! fake.

use std::time::Duration;

use async_trait::async_trait;

use crate::types::DbId;

/// A failed count/sample query.
///
/// Deliberately distinct from "zero dependents": the engine treats any
/// storage failure as "cannot verify, deletion blocked".
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("dependency query failed: {0}")]
    Query(String),

    #[error("dependency query timed out after {0:?}")]
    Timeout(Duration),
}

/// Read-only access to dependent rows.
///
/// `table` and `column` always come from a validated
/// [`RelationshipRule`](super::registry::RelationshipRule), never from
/// request input.
#[async_trait]
pub trait DependencyStore: Send + Sync {
    /// Number of rows of `table` where `column = value`.
    async fn count_where(
        &self,
        table: &str,
        column: &str,
        value: DbId,
    ) -> Result<i64, StorageError>;

    /// A page of rows of `table` where `column = value`, plus the total
    /// row count. Rows are returned in a stable order (by id) so
    /// consecutive pages never overlap or skip records.
    async fn select_where(
        &self,
        table: &str,
        column: &str,
        value: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<serde_json::Value>, i64), StorageError>;
}

//! PostgreSQL implementation of the dependency-store port.
//!
//! Table and column identifiers are interpolated into the query text,
//! so they are restricted to the known entity set and to plain
//! snake_case identifiers; values always go through bind parameters.
//! Every query carries a bounded timeout; a slow database must surface
//! as a failed check, never as a hung delete request.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::time::timeout;

use maintdesk_core::dependency::registry::is_known_entity_type;
use maintdesk_core::dependency::{DependencyStore, StorageError};
use maintdesk_core::types::DbId;

/// Default bound on a single count/sample query.
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Counts and samples dependent rows for the validation engine.
#[derive(Debug, Clone)]
pub struct SqlDependencyStore {
    pool: PgPool,
    query_timeout: Duration,
}

impl SqlDependencyStore {
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }

    pub fn with_timeout(pool: PgPool, query_timeout: Duration) -> Self {
        Self {
            pool,
            query_timeout,
        }
    }

    fn check_identifiers(table: &str, column: &str) -> Result<(), StorageError> {
        if !is_known_entity_type(table) {
            tracing::warn!(table, "Refused dependency query against unknown table");
            return Err(StorageError::Query(format!(
                "refusing to query unknown table '{table}'"
            )));
        }
        if column.is_empty()
            || !column
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            tracing::warn!(column, "Refused dependency query with malformed column");
            return Err(StorageError::Query(format!(
                "refusing to query malformed column '{column}'"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl DependencyStore for SqlDependencyStore {
    async fn count_where(
        &self,
        table: &str,
        column: &str,
        value: DbId,
    ) -> Result<i64, StorageError> {
        Self::check_identifiers(table, column)?;
        let query = format!("SELECT COUNT(*) FROM {table} WHERE {column} = $1");
        let fut = sqlx::query_scalar::<_, i64>(&query)
            .bind(value)
            .fetch_one(&self.pool);

        match timeout(self.query_timeout, fut).await {
            Ok(Ok(count)) => Ok(count),
            Ok(Err(err)) => Err(StorageError::Query(err.to_string())),
            Err(_) => Err(StorageError::Timeout(self.query_timeout)),
        }
    }

    async fn select_where(
        &self,
        table: &str,
        column: &str,
        value: DbId,
        limit: i64,
        offset: i64,
    ) -> Result<(Vec<serde_json::Value>, i64), StorageError> {
        Self::check_identifiers(table, column)?;
        let total = self.count_where(table, column, value).await?;

        // Ordered by id so consecutive pages never overlap or skip rows.
        let query = format!(
            "SELECT to_jsonb(t) FROM {table} t \
             WHERE {column} = $1 \
             ORDER BY t.id \
             LIMIT $2 OFFSET $3"
        );
        let fut = sqlx::query_scalar::<_, serde_json::Value>(&query)
            .bind(value)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool);

        match timeout(self.query_timeout, fut).await {
            Ok(Ok(rows)) => Ok((rows, total)),
            Ok(Err(err)) => Err(StorageError::Query(err.to_string())),
            Err(_) => Err(StorageError::Timeout(self.query_timeout)),
        }
    }
}

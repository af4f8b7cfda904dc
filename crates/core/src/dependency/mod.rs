//! Rule-driven dependency validation for entity deletion.
//!
//! Before any entity is deleted, the engine consults a static
//! [`RelationshipRegistry`](registry::RelationshipRegistry) of
//! parent/dependent relationships, counts referencing rows through the
//! [`DependencyStore`](store::DependencyStore) port, and produces a
//! [`ValidationResult`](engine::ValidationResult) verdict with ranked
//! remediation suggestions. Deletion flows go through
//! [`attempt_delete`](deletion::attempt_delete), which only invokes the
//! caller's delete operation on an explicit `can_delete = true` verdict.
//!
//! The whole subsystem is read-only: the registry is immutable after
//! construction, findings are computed fresh per call, and the single
//! mutation (the actual delete) is performed by the caller's closure.

pub mod deletion;
pub mod detail;
pub mod engine;
pub mod registry;
pub mod store;

pub use deletion::{attempt_delete, DeletionOutcome};
pub use detail::{DependencyPage, DetailError, UnknownRelationshipError};
pub use engine::{
    DependencyFinding, Suggestion, SuggestionKind, SuggestionTarget, ValidateOptions,
    ValidationEngine, ValidationError, ValidationResult,
};
pub use registry::{RelationshipKind, RelationshipRegistry, RelationshipRule};
pub use store::{DependencyStore, StorageError};

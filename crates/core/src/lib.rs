//! Domain logic for the maintdesk back office.
//!
//! This crate has no dependency on the HTTP or persistence layers. Its
//! centerpiece is the [`dependency`] module: the rule-driven engine that
//! decides whether an entity can be deleted, what blocks it, and what the
//! caller can do about it.

pub mod dependency;
pub mod error;
pub mod pagination;
pub mod types;

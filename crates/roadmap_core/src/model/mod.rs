//! Board domain model.
//!
//! # Responsibility
//! - Define canonical data structures used by board business logic.
//! - Keep reference data (catalog) separate from mutable roadmap items.
//!
//! # Invariants
//! - Every roadmap item is identified by a stable `ItemId`.
//! - Items are never deleted within one session.

pub mod catalog;
pub mod item;

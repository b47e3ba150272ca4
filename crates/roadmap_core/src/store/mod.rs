//! Item storage contracts and in-memory implementation.
//!
//! # Responsibility
//! - Define the only mutation paths for roadmap items (`add`, `reassign`).
//! - Keep storage details out of the board service.
//!
//! # Invariants
//! - Item ids are unique for the lifetime of a store.
//! - Store APIs return semantic errors (`NotFound`) instead of ignoring
//!   unknown ids.

pub mod item_store;

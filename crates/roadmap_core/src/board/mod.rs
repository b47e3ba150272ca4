//! Board view state and derived projections.
//!
//! # Responsibility
//! - Hold the user's product/year focus (`selection`).
//! - Track the single in-flight drag (`drag`).
//! - Derive per-quarter columns from items and selection (`projector`).
//!
//! # Invariants
//! - Projection is a pure function of items and selection.
//! - At most one item is dragged at a time.

pub mod drag;
pub mod projector;
pub mod selection;

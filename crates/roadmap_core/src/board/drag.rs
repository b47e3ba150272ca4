//! Drag session state machine.
//!
//! # Invariants
//! - `Idle` is the initial state and the state after every drop or abandon.
//! - Starting a drag while one is in flight replaces the in-flight id.

use crate::model::item::ItemId;

/// Transient drag state for a single pointer.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging(ItemId),
}

impl DragSession {
    pub fn new() -> Self {
        Self::Idle
    }

    /// Idle -> Dragging(id). Unconditional.
    pub fn start(&mut self, id: ItemId) {
        *self = Self::Dragging(id);
    }

    /// Dragging -> Idle, returning the id that was in flight.
    ///
    /// Returns `None` when already idle.
    pub fn finish(&mut self) -> Option<ItemId> {
        match std::mem::take(self) {
            Self::Idle => None,
            Self::Dragging(id) => Some(id),
        }
    }

    pub fn dragging_id(&self) -> Option<&ItemId> {
        match self {
            Self::Idle => None,
            Self::Dragging(id) => Some(id),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Whether the card for `id` is the one being dragged.
    pub fn is_dragging(&self, id: &ItemId) -> bool {
        self.dragging_id() == Some(id)
    }
}

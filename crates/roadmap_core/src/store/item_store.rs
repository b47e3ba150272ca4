//! Item store contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide insertion-ordered storage for roadmap items.
//! - Replace an item's placement atomically on reassign.
//!
//! # Invariants
//! - `list_all` preserves insertion order.
//! - `reassign` overwrites quarter, product and year together or not at all.
//! - Items are never removed.

use crate::model::catalog::{ProductId, Quarter};
use crate::model::item::{ItemId, Placement, RoadmapItem};
use log::{debug, error};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Item store error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Reassign referenced an id the store never issued. Callers only pass
    /// ids of known cards, so this indicates a wiring bug.
    NotFound(ItemId),
    /// Seed data contained the same id twice.
    DuplicateId(ItemId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "roadmap item not found: {id}"),
            Self::DuplicateId(id) => write!(f, "duplicate roadmap item id: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Storage interface for roadmap items.
pub trait ItemStore {
    /// Appends a new item in `Q1` and returns it.
    ///
    /// Title emptiness is checked by callers; the store never rejects input.
    fn add(&mut self, title: &str, product_id: &ProductId, year: i32) -> RoadmapItem;

    /// Replaces placement of item `id` and returns the updated item.
    fn reassign(
        &mut self,
        id: &ItemId,
        quarter: Quarter,
        product_id: &ProductId,
        year: i32,
    ) -> StoreResult<RoadmapItem>;

    fn get(&self, id: &ItemId) -> Option<RoadmapItem>;

    /// Snapshot of every item in insertion order.
    fn list_all(&self) -> Vec<RoadmapItem>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `Vec`-backed item store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryItemStore {
    items: Vec<RoadmapItem>,
    ids: HashSet<ItemId>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `items`, keeping their ids.
    ///
    /// # Errors
    /// - Returns `StoreError::DuplicateId` when two seed items share an id.
    pub fn with_items(items: Vec<RoadmapItem>) -> StoreResult<Self> {
        let mut store = Self::new();
        for item in items {
            if !store.ids.insert(item.id.clone()) {
                return Err(StoreError::DuplicateId(item.id));
            }
            store.items.push(item);
        }
        debug!(
            "event=store_seed module=store status=ok items={}",
            store.items.len()
        );
        Ok(store)
    }

    fn fresh_id(&self) -> ItemId {
        loop {
            let id = ItemId::generate();
            if !self.ids.contains(&id) {
                return id;
            }
        }
    }
}

impl ItemStore for InMemoryItemStore {
    fn add(&mut self, title: &str, product_id: &ProductId, year: i32) -> RoadmapItem {
        let item = RoadmapItem::with_id(
            self.fresh_id(),
            title,
            product_id.clone(),
            year,
            Quarter::Q1,
        );
        self.ids.insert(item.id.clone());
        self.items.push(item.clone());
        debug!(
            "event=item_added module=store status=ok item_id={} product_id={} year={}",
            item.id, item.product_id, item.year
        );
        item
    }

    fn reassign(
        &mut self,
        id: &ItemId,
        quarter: Quarter,
        product_id: &ProductId,
        year: i32,
    ) -> StoreResult<RoadmapItem> {
        let Some(item) = self.items.iter_mut().find(|item| &item.id == id) else {
            error!("event=item_reassign module=store status=error error_code=not_found item_id={id}");
            return Err(StoreError::NotFound(id.clone()));
        };

        item.place(Placement::new(product_id.clone(), year, quarter));
        debug!(
            "event=item_reassign module=store status=ok item_id={} product_id={} year={} quarter={}",
            item.id, item.product_id, item.year, item.quarter
        );
        Ok(item.clone())
    }

    fn get(&self, id: &ItemId) -> Option<RoadmapItem> {
        self.items.iter().find(|item| &item.id == id).cloned()
    }

    fn list_all(&self) -> Vec<RoadmapItem> {
        self.items.clone()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

//! Roadmap item domain model.
//!
//! # Responsibility
//! - Define the record rendered as one card on the board.
//! - Keep the `(product, year, quarter)` placement a single replaceable value.
//!
//! # Invariants
//! - `id` is stable and never reused for another item.
//! - `title` is non-empty once the item exists.
//! - Placement fields change together through `RoadmapItem::place`.

use crate::model::catalog::{ProductId, Quarter};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const GENERATED_ID_PREFIX: &str = "item-";

/// Stable identifier for one roadmap item.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a fresh id. Only uniqueness is guaranteed, not the format.
    pub fn generate() -> Self {
        Self(format!("{GENERATED_ID_PREFIX}{}", Uuid::new_v4().simple()))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Where an item sits on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Placement {
    pub product_id: ProductId,
    pub year: i32,
    pub quarter: Quarter,
}

impl Placement {
    pub fn new(product_id: ProductId, year: i32, quarter: Quarter) -> Self {
        Self {
            product_id,
            year,
            quarter,
        }
    }
}

/// One roadmap card.
///
/// Serialized with camelCase keys (`productId`) to match the UI shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoadmapItem {
    pub id: ItemId,
    pub title: String,
    pub product_id: ProductId,
    pub year: i32,
    pub quarter: Quarter,
}

impl RoadmapItem {
    /// Creates an item with a caller-provided id.
    ///
    /// Used by seed data where identity already exists.
    pub fn with_id(
        id: ItemId,
        title: impl Into<String>,
        product_id: ProductId,
        year: i32,
        quarter: Quarter,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            product_id,
            year,
            quarter,
        }
    }

    /// Current placement as one value.
    pub fn placement(&self) -> Placement {
        Placement::new(self.product_id.clone(), self.year, self.quarter)
    }

    /// Replaces all placement fields at once.
    pub fn place(&mut self, placement: Placement) {
        let Placement {
            product_id,
            year,
            quarter,
        } = placement;
        self.product_id = product_id;
        self.year = year;
        self.quarter = quarter;
    }

    /// Whether this card belongs on the board for `product_id` / `year`.
    pub fn is_visible_in(&self, product_id: &ProductId, year: i32) -> bool {
        &self.product_id == product_id && self.year == year
    }
}

/// Seed items shown when a fresh session starts.
///
/// `current_year` anchors the first three items; the last one is planned for
/// the following year.
pub fn seed_items(current_year: i32) -> Vec<RoadmapItem> {
    vec![
        RoadmapItem::with_id(
            ItemId::from("item-1"),
            "Unified backlog governance",
            ProductId::from("prod-1"),
            current_year,
            Quarter::Q1,
        ),
        RoadmapItem::with_id(
            ItemId::from("item-2"),
            "New onboarding flow",
            ProductId::from("prod-2"),
            current_year,
            Quarter::Q2,
        ),
        RoadmapItem::with_id(
            ItemId::from("item-3"),
            "Usage analytics v2",
            ProductId::from("prod-3"),
            current_year,
            Quarter::Q3,
        ),
        RoadmapItem::with_id(
            ItemId::from("item-4"),
            "Enterprise SSO",
            ProductId::from("prod-1"),
            current_year.saturating_add(1),
            Quarter::Q1,
        ),
    ]
}

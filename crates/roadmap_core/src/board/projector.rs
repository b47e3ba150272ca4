//! Board projection: items grouped into quarter columns.
//!
//! # Responsibility
//! - Filter items to the current selection.
//! - Group the filtered set into one column per quarter.
//!
//! # Invariants
//! - Every quarter passed in has a column, possibly empty.
//! - Each filtered item appears in exactly one column.
//! - Within a column, items keep store insertion order.

use crate::board::selection::SelectionContext;
use crate::model::catalog::Quarter;
use crate::model::item::RoadmapItem;
use std::collections::BTreeMap;

/// Per-quarter view of the board for one selection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BoardProjection {
    columns: BTreeMap<Quarter, Vec<RoadmapItem>>,
}

impl BoardProjection {
    /// Items for `quarter`; empty when the quarter was not projected.
    pub fn column(&self, quarter: Quarter) -> &[RoadmapItem] {
        self.columns
            .get(&quarter)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Columns in quarter order.
    pub fn columns(&self) -> impl Iterator<Item = (Quarter, &[RoadmapItem])> {
        self.columns
            .iter()
            .map(|(quarter, items)| (*quarter, items.as_slice()))
    }

    pub fn column_count(&self, quarter: Quarter) -> usize {
        self.column(quarter).len()
    }

    /// Size of the filtered set across all columns.
    pub fn count(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }
}

/// Projects `items` onto the board for `selection`.
pub fn project(
    items: &[RoadmapItem],
    selection: &SelectionContext,
    quarters: &[Quarter],
) -> BoardProjection {
    let mut columns: BTreeMap<Quarter, Vec<RoadmapItem>> = quarters
        .iter()
        .map(|quarter| (*quarter, Vec::new()))
        .collect();

    for item in items
        .iter()
        .filter(|item| item.is_visible_in(&selection.product_id, selection.year))
    {
        if let Some(column) = columns.get_mut(&item.quarter) {
            column.push(item.clone());
        }
    }

    BoardProjection { columns }
}

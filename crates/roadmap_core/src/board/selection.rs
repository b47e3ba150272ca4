//! Current product/year focus.

use crate::model::catalog::ProductId;
use serde::{Deserialize, Serialize};

/// Product and year currently shown on the board.
///
/// Product ids are checked against the catalog by the board service before
/// they reach `set_product`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionContext {
    pub product_id: ProductId,
    pub year: i32,
}

impl SelectionContext {
    pub fn new(product_id: ProductId, year: i32) -> Self {
        Self { product_id, year }
    }

    pub fn set_product(&mut self, product_id: ProductId) {
        self.product_id = product_id;
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    /// Moves the year by `delta`. Years are unbounded; the shift only
    /// saturates at the `i32` range instead of overflowing.
    pub fn shift_year(&mut self, delta: i32) {
        self.year = self.year.saturating_add(delta);
    }
}

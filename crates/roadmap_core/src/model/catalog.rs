//! Catalog reference data: products and quarters.
//!
//! # Responsibility
//! - Provide the fixed, ordered product registry.
//! - Provide the four quarter labels in display order.
//!
//! # Invariants
//! - Product ids are unique and stable for the process lifetime.
//! - The catalog is read-only after construction.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable product identifier (`prod-1`, `prod-2`, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Product reference record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: ProductId::new(id),
            name: name.into(),
        }
    }
}

/// Planning quarter. Ordering is for display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Quarter {
    Q1,
    Q2,
    Q3,
    Q4,
}

/// All quarters in board column order.
pub const QUARTERS: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

impl Quarter {
    /// Stable label used by UI and FFI callers.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
        }
    }

    /// Parses a quarter label (`Q1`..`Q4`), ignoring case and surrounding
    /// whitespace.
    pub fn parse(value: &str) -> Result<Self, QuarterParseError> {
        match value.trim().to_ascii_uppercase().as_str() {
            "Q1" => Ok(Self::Q1),
            "Q2" => Ok(Self::Q2),
            "Q3" => Ok(Self::Q3),
            "Q4" => Ok(Self::Q4),
            _ => Err(QuarterParseError(value.to_string())),
        }
    }
}

impl Display for Quarter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Quarter label parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuarterParseError(pub String);

impl Display for QuarterParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unsupported quarter `{}`; expected Q1|Q2|Q3|Q4", self.0)
    }
}

impl Error for QuarterParseError {}

/// Read-only product and quarter registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from an ordered product list.
    ///
    /// Later duplicates of an already listed id are dropped so lookups stay
    /// unambiguous.
    pub fn new(products: Vec<Product>) -> Self {
        let mut unique: Vec<Product> = Vec::with_capacity(products.len());
        for product in products {
            if !unique.iter().any(|existing| existing.id == product.id) {
                unique.push(product);
            }
        }
        Self { products: unique }
    }

    /// Built-in product registry.
    pub fn builtin() -> Self {
        Self::new(vec![
            Product::new("prod-1", "Core Platform"),
            Product::new("prod-2", "Mobile App"),
            Product::new("prod-3", "Admin Console"),
        ])
    }

    /// Products in stable registry order.
    pub fn list_products(&self) -> &[Product] {
        &self.products
    }

    /// Quarters in column order.
    pub fn quarters(&self) -> [Quarter; 4] {
        QUARTERS
    }

    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|product| &product.id == id)
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.product(id).is_some()
    }

    /// First listed product, used as the initial selection.
    pub fn default_product(&self) -> Option<&Product> {
        self.products.first()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::{Catalog, Product, ProductId, Quarter};

    #[test]
    fn quarter_parse_accepts_labels_case_insensitively() {
        assert_eq!(Quarter::parse("q3").unwrap(), Quarter::Q3);
        assert_eq!(Quarter::parse(" Q4 ").unwrap(), Quarter::Q4);
        let err = Quarter::parse("Q5").unwrap_err();
        assert!(err.to_string().contains("Q5"));
    }

    #[test]
    fn quarters_are_ordered_for_display() {
        let quarters = Catalog::builtin().quarters();
        assert_eq!(quarters, [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4]);
        assert!(Quarter::Q1 < Quarter::Q4);
    }

    #[test]
    fn new_drops_duplicate_product_ids() {
        let catalog = Catalog::new(vec![
            Product::new("a", "First"),
            Product::new("a", "Shadow"),
            Product::new("b", "Second"),
        ]);
        assert_eq!(catalog.list_products().len(), 2);
        assert_eq!(catalog.product(&ProductId::from("a")).unwrap().name, "First");
    }
}

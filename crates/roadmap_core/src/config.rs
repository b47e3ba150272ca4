//! Board session configuration.
//!
//! # Responsibility
//! - Resolve the initial selection and seeding policy for a new session.
//! - Read optional overrides from environment variables.
//!
//! # Invariants
//! - Invalid or unknown override values fall back to defaults.
//! - Product resolution yields `None` only for an empty catalog.

use crate::model::catalog::{Catalog, ProductId};
use chrono::{Datelike, Local};
use log::warn;

/// Environment override for the initially selected product id.
pub const ENV_INITIAL_PRODUCT: &str = "ROADMAP_INITIAL_PRODUCT";
/// Environment override for the initially selected year.
pub const ENV_INITIAL_YEAR: &str = "ROADMAP_INITIAL_YEAR";
/// Environment switch for seed data (`0|false|no|off` disables).
pub const ENV_SEED: &str = "ROADMAP_SEED";

/// Options used to build a board session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// `None` selects the catalog's first product.
    pub initial_product: Option<ProductId>,
    /// `None` selects the current local year.
    pub initial_year: Option<i32>,
    /// Whether the session starts with the built-in seed items.
    pub seed: bool,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            initial_product: None,
            initial_year: None,
            seed: true,
        }
    }
}

impl BoardConfig {
    /// Reads overrides from process environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides through `lookup`, which maps a variable name to its
    /// raw value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let initial_product = lookup(ENV_INITIAL_PRODUCT)
            .map(|raw| raw.trim().to_string())
            .filter(|value| !value.is_empty())
            .map(ProductId::new);

        let initial_year = lookup(ENV_INITIAL_YEAR).and_then(|raw| {
            let trimmed = raw.trim().to_string();
            match trimmed.parse::<i32>() {
                Ok(year) => Some(year),
                Err(_) => {
                    warn!(
                        "event=config_resolve module=config status=fallback key={ENV_INITIAL_YEAR}"
                    );
                    None
                }
            }
        });

        let seed = lookup(ENV_SEED)
            .map(|raw| parse_switch(&raw))
            .unwrap_or(true);

        Self {
            initial_product,
            initial_year,
            seed,
        }
    }

    /// Product to select first, validated against `catalog`.
    ///
    /// Returns `None` when `catalog` lists no products.
    pub fn resolve_product(&self, catalog: &Catalog) -> Option<ProductId> {
        if let Some(product_id) = &self.initial_product {
            if catalog.contains(product_id) {
                return Some(product_id.clone());
            }
            warn!(
                "event=config_resolve module=config status=fallback key={ENV_INITIAL_PRODUCT} product_id={product_id}"
            );
        }

        catalog.default_product().map(|product| product.id.clone())
    }

    pub fn resolve_year(&self) -> i32 {
        self.initial_year.unwrap_or_else(current_year)
    }
}

/// Current year in local time.
pub fn current_year() -> i32 {
    Local::now().year()
}

fn parse_switch(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

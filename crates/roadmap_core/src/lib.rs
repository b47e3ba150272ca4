//! Core domain logic for the roadmap board.
//! This crate is the single source of truth for board invariants.

pub mod board;
pub mod config;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use board::drag::DragSession;
pub use board::projector::{project, BoardProjection};
pub use board::selection::SelectionContext;
pub use config::{current_year, BoardConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::catalog::{Catalog, Product, ProductId, Quarter, QuarterParseError, QUARTERS};
pub use model::item::{seed_items, ItemId, Placement, RoadmapItem};
pub use service::board_service::{
    BoardError, BoardResult, BoardService, BoardSummary, Outcome, SkipReason,
};
pub use store::item_store::{InMemoryItemStore, ItemStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

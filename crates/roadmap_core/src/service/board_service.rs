//! Board use-case service.
//!
//! # Responsibility
//! - Execute UI input events (select, drag, drop, create) as single steps.
//! - Expose selection, drag state, columns and summary for rendering.
//!
//! # Invariants
//! - Item mutations only go through `ItemStore::add` / `ItemStore::reassign`.
//! - A drop always returns the drag session to idle, even when reassign fails.
//! - Skipped inputs leave every piece of state unchanged.
//! - Every stored item and the selection reference a catalog product.

use crate::board::drag::DragSession;
use crate::board::projector::{project, BoardProjection};
use crate::board::selection::SelectionContext;
use crate::config::{current_year, BoardConfig};
use crate::model::catalog::{Catalog, ProductId, Quarter};
use crate::model::item::{seed_items, ItemId, RoadmapItem};
use crate::store::item_store::{InMemoryItemStore, ItemStore, StoreError, StoreResult};
use log::{debug, error, info, warn};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

const UNKNOWN_PRODUCT_NAME: &str = "Unknown product";

pub type BoardResult<T> = Result<T, BoardError>;

/// Board session construction error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// The catalog lists no products, so no selection can exist.
    EmptyCatalog,
    /// A stored item references a product missing from the catalog.
    DanglingProduct {
        item_id: ItemId,
        product_id: ProductId,
    },
    Store(StoreError),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCatalog => f.write_str("catalog lists no products"),
            Self::DanglingProduct {
                item_id,
                product_id,
            } => write!(f, "item {item_id} references unknown product: {product_id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for BoardError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Why an input was ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// Title was missing, empty or whitespace only.
    EmptyTitle,
    /// Product id is not listed in the catalog.
    UnknownProduct(ProductId),
    /// Drop arrived while no drag was in flight.
    NoActiveDrag,
}

impl Display for SkipReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => f.write_str("empty title"),
            Self::UnknownProduct(id) => write!(f, "unknown product: {id}"),
            Self::NoActiveDrag => f.write_str("no active drag"),
        }
    }
}

impl SkipReason {
    fn code(&self) -> &'static str {
        match self {
            Self::EmptyTitle => "empty_title",
            Self::UnknownProduct(_) => "unknown_product",
            Self::NoActiveDrag => "no_active_drag",
        }
    }
}

/// Result of an input that may be skipped without being an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    Applied(T),
    Skipped(SkipReason),
}

impl<T> Outcome<T> {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    pub fn applied(self) -> Option<T> {
        match self {
            Self::Applied(value) => Some(value),
            Self::Skipped(_) => None,
        }
    }

    pub fn skip_reason(&self) -> Option<&SkipReason> {
        match self {
            Self::Applied(_) => None,
            Self::Skipped(reason) => Some(reason),
        }
    }
}

/// Summary readout above the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSummary {
    pub product_id: ProductId,
    /// Falls back to `"Unknown product"` when the id is not in the catalog.
    pub product_name: String,
    pub year: i32,
    /// Number of items visible across all four columns.
    pub total_items: usize,
}

/// Board session facade over an item store.
pub struct BoardService<S: ItemStore> {
    catalog: Catalog,
    store: S,
    selection: SelectionContext,
    drag: DragSession,
}

impl BoardService<InMemoryItemStore> {
    /// Builds an in-memory session from `config` with the built-in catalog.
    ///
    /// # Errors
    /// - Returns `BoardError::Store` if seed data repeats an id.
    /// - Returns `BoardError::DanglingProduct` if seed data references a
    ///   product outside the catalog.
    pub fn from_config(config: &BoardConfig) -> BoardResult<Self> {
        let catalog = Catalog::builtin();
        let product_id = config
            .resolve_product(&catalog)
            .ok_or(BoardError::EmptyCatalog)?;
        let selection = SelectionContext::new(product_id, config.resolve_year());
        let store = if config.seed {
            InMemoryItemStore::with_items(seed_items(current_year()))?
        } else {
            InMemoryItemStore::new()
        };

        let board = Self::new(catalog, store, selection)?;
        info!(
            "event=board_init module=board status=ok product_id={} year={} items={}",
            board.selection.product_id,
            board.selection.year,
            board.store.len()
        );
        Ok(board)
    }
}

impl<S: ItemStore> BoardService<S> {
    /// Creates a service over `store`.
    ///
    /// A selection outside `catalog` is replaced by the catalog's default
    /// product; its year is kept.
    ///
    /// # Errors
    /// - Returns `BoardError::EmptyCatalog` when `catalog` has no products.
    /// - Returns `BoardError::DanglingProduct` for the first stored item whose
    ///   product is not listed.
    pub fn new(catalog: Catalog, store: S, mut selection: SelectionContext) -> BoardResult<Self> {
        let default_product = catalog
            .default_product()
            .map(|product| product.id.clone())
            .ok_or(BoardError::EmptyCatalog)?;

        if let Some(item) = store
            .list_all()
            .into_iter()
            .find(|item| !catalog.contains(&item.product_id))
        {
            error!(
                "event=board_init module=board status=error error_code=dangling_product item_id={} product_id={}",
                item.id, item.product_id
            );
            return Err(BoardError::DanglingProduct {
                item_id: item.id,
                product_id: item.product_id,
            });
        }

        if !catalog.contains(&selection.product_id) {
            warn!(
                "event=board_init module=board status=fallback product_id={} fallback={}",
                selection.product_id, default_product
            );
            selection.set_product(default_product);
        }

        Ok(Self {
            catalog,
            store,
            selection,
            drag: DragSession::new(),
        })
    }

    /// Switches the board to another product.
    ///
    /// Ids missing from the catalog are skipped.
    pub fn select_product(&mut self, product_id: ProductId) -> Outcome<()> {
        if !self.catalog.contains(&product_id) {
            return self.skip(SkipReason::UnknownProduct(product_id));
        }
        self.selection.set_product(product_id);
        Outcome::Applied(())
    }

    pub fn select_year(&mut self, year: i32) {
        self.selection.set_year(year);
    }

    pub fn shift_year(&mut self, delta: i32) {
        self.selection.shift_year(delta);
    }

    /// Begins dragging the card for `item_id`, replacing any in-flight drag.
    pub fn start_drag(&mut self, item_id: ItemId) {
        debug!("event=drag_start module=board status=ok item_id={item_id}");
        self.drag.start(item_id);
    }

    /// Drops the dragged card on `quarter`.
    ///
    /// The card is re-homed into the selected product and year along with the
    /// new quarter. The drag session is cleared before any error or skip is
    /// returned; a selection outside the catalog skips the move.
    ///
    /// # Errors
    /// - Returns `StoreError::NotFound` when the dragged id is unknown.
    pub fn drop_on_quarter(&mut self, quarter: Quarter) -> StoreResult<Outcome<RoadmapItem>> {
        let Some(item_id) = self.drag.finish() else {
            return Ok(self.skip(SkipReason::NoActiveDrag));
        };
        if let Err(reason) = self.listed_selection() {
            return Ok(self.skip(reason));
        }

        match self.store.reassign(
            &item_id,
            quarter,
            &self.selection.product_id,
            self.selection.year,
        ) {
            Ok(item) => {
                info!(
                    "event=item_dropped module=board status=ok item_id={} quarter={} product_id={} year={}",
                    item.id, item.quarter, item.product_id, item.year
                );
                Ok(Outcome::Applied(item))
            }
            Err(err) => {
                error!(
                    "event=item_dropped module=board status=error item_id={item_id} quarter={quarter} error={err}"
                );
                Err(err)
            }
        }
    }

    /// Ends a drag released outside any column.
    pub fn abandon_drag(&mut self) -> Option<ItemId> {
        let abandoned = self.drag.finish();
        if let Some(item_id) = &abandoned {
            debug!("event=drag_abandon module=board status=ok item_id={item_id}");
        }
        abandoned
    }

    /// Creates a card in `Q1` for the current selection.
    ///
    /// `None`, empty and whitespace-only titles are skipped, as is a
    /// selection outside the catalog. Titles are stored trimmed.
    pub fn create_item(&mut self, title: Option<&str>) -> Outcome<RoadmapItem> {
        let Some(title) = title.map(str::trim).filter(|value| !value.is_empty()) else {
            return self.skip(SkipReason::EmptyTitle);
        };
        if let Err(reason) = self.listed_selection() {
            return self.skip(reason);
        }

        let item = self
            .store
            .add(title, &self.selection.product_id, self.selection.year);
        info!(
            "event=item_created module=board status=ok item_id={} product_id={} year={}",
            item.id, item.product_id, item.year
        );
        Outcome::Applied(item)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionContext {
        &self.selection
    }

    pub fn drag_session(&self) -> &DragSession {
        &self.drag
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Columns for the current selection, recomputed on every call.
    pub fn board(&self) -> BoardProjection {
        project(
            &self.store.list_all(),
            &self.selection,
            &self.catalog.quarters(),
        )
    }

    pub fn summary(&self) -> BoardSummary {
        let product_name = product_name(&self.catalog, &self.selection.product_id);

        BoardSummary {
            product_id: self.selection.product_id.clone(),
            product_name,
            year: self.selection.year,
            total_items: self.board().count(),
        }
    }

    fn listed_selection(&self) -> Result<(), SkipReason> {
        if self.catalog.contains(&self.selection.product_id) {
            Ok(())
        } else {
            Err(SkipReason::UnknownProduct(self.selection.product_id.clone()))
        }
    }

    fn skip<T>(&self, reason: SkipReason) -> Outcome<T> {
        debug!(
            "event=input_skipped module=board status=skipped reason={}",
            reason.code()
        );
        Outcome::Skipped(reason)
    }
}

fn product_name(catalog: &Catalog, product_id: &ProductId) -> String {
    catalog
        .product(product_id)
        .map(|product| product.name.clone())
        .unwrap_or_else(|| UNKNOWN_PRODUCT_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::{product_name, BoardService, Outcome, SkipReason};
    use crate::board::selection::SelectionContext;
    use crate::model::catalog::{Catalog, ProductId, Quarter};
    use crate::model::item::{ItemId, RoadmapItem};
    use crate::store::item_store::{InMemoryItemStore, ItemStore};

    fn empty_board() -> BoardService<InMemoryItemStore> {
        BoardService::new(
            Catalog::builtin(),
            InMemoryItemStore::new(),
            SelectionContext::new(ProductId::from("prod-1"), 2024),
        )
        .unwrap()
    }

    #[test]
    fn unknown_product_is_skipped() {
        let mut board = empty_board();
        let outcome = board.select_product(ProductId::from("prod-9"));
        assert_eq!(
            outcome,
            Outcome::Skipped(SkipReason::UnknownProduct(ProductId::from("prod-9")))
        );
        assert_eq!(board.selection().product_id, ProductId::from("prod-1"));
    }

    #[test]
    fn whitespace_title_is_skipped() {
        let mut board = empty_board();
        assert_eq!(
            board.create_item(Some("   ")).skip_reason(),
            Some(&SkipReason::EmptyTitle)
        );
        assert_eq!(
            board.create_item(None).skip_reason(),
            Some(&SkipReason::EmptyTitle)
        );
        assert!(board.store().is_empty());
    }

    #[test]
    fn product_name_falls_back_for_unlisted_id() {
        let catalog = Catalog::builtin();
        assert_eq!(product_name(&catalog, &ProductId::from("prod-2")), "Mobile App");
        assert_eq!(
            product_name(&catalog, &ProductId::from("ghost")),
            "Unknown product"
        );
    }

    #[test]
    fn unlisted_selection_skips_create_and_drop() {
        let store = InMemoryItemStore::with_items(vec![RoadmapItem::with_id(
            ItemId::from("item-1"),
            "Unified backlog governance",
            ProductId::from("prod-1"),
            2024,
            Quarter::Q1,
        )])
        .unwrap();
        let mut board = BoardService::new(
            Catalog::builtin(),
            store,
            SelectionContext::new(ProductId::from("prod-1"), 2024),
        )
        .unwrap();
        // Only reachable from inside the module; the public API keeps the
        // selection listed.
        board.selection.set_product(ProductId::from("ghost"));
        let before = board.store().list_all();
        let ghost = SkipReason::UnknownProduct(ProductId::from("ghost"));

        assert_eq!(board.create_item(Some("X")), Outcome::Skipped(ghost.clone()));

        board.start_drag(ItemId::from("item-1"));
        assert_eq!(
            board.drop_on_quarter(Quarter::Q3).unwrap(),
            Outcome::Skipped(ghost)
        );
        assert!(board.drag_session().is_idle());
        assert_eq!(board.store().list_all(), before);
        assert_eq!(board.summary().product_name, "Unknown product");
    }

    #[test]
    fn drop_without_drag_is_skipped() {
        let mut board = empty_board();
        let outcome = board.drop_on_quarter(Quarter::Q2).unwrap();
        assert_eq!(outcome, Outcome::Skipped(SkipReason::NoActiveDrag));
    }
}

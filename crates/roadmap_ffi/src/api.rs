//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the board's input events and render snapshot to Dart via FRB.
//! - Own the process-wide board session.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every mutation returns an envelope; skipped inputs are `ok` but not
//!   `applied`.

use roadmap_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    BoardConfig, BoardService, InMemoryItemStore, ItemId, Outcome, ProductId, Quarter, SkipReason,
};
use std::sync::{Mutex, OnceLock};

type Board = BoardService<InMemoryItemStore>;

static BOARD: OnceLock<Mutex<Board>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Product picker entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductItem {
    pub product_id: String,
    pub name: String,
}

/// One card in a board column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCard {
    pub item_id: String,
    pub title: String,
    /// Whether this card is the one currently being dragged.
    pub dragging: bool,
}

/// One quarter column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardColumn {
    /// `Q1|Q2|Q3|Q4`.
    pub quarter: String,
    pub cards: Vec<BoardCard>,
}

/// Everything the board screen renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub product_id: String,
    pub product_name: String,
    pub year: i32,
    /// Cards visible across all columns.
    pub total_items: u32,
    pub dragging_item_id: Option<String>,
    /// Always four columns in quarter order; empty when the session failed.
    pub columns: Vec<BoardColumn>,
    /// Empty on success; error description otherwise.
    pub error: String,
}

/// Result envelope for board input events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    /// False only when the call failed (bad input or invariant breach).
    pub ok: bool,
    /// Whether state changed; false for skipped inputs.
    pub applied: bool,
    /// Affected item, when there is one.
    pub item_id: Option<String>,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
}

impl BoardActionResponse {
    fn applied(message: impl Into<String>, item_id: Option<String>) -> Self {
        Self {
            ok: true,
            applied: true,
            item_id,
            message: message.into(),
        }
    }

    fn skipped<T>(outcome: &Outcome<T>) -> Self {
        let reason = outcome
            .skip_reason()
            .map(ToString::to_string)
            .unwrap_or_default();
        Self {
            ok: true,
            applied: false,
            item_id: None,
            message: format!("Skipped: {reason}."),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            applied: false,
            item_id: None,
            message: message.into(),
        }
    }
}

/// Lists catalog products in picker order.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; returns an empty list when the session failed to start.
#[flutter_rust_bridge::frb(sync)]
pub fn list_products() -> Vec<ProductItem> {
    with_board(|board| products_of(board)).unwrap_or_default()
}

/// Returns the current board render state.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never panics; session failures are reported in `error`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_snapshot() -> BoardSnapshot {
    with_board(|board| snapshot_of(board)).unwrap_or_else(|err| BoardSnapshot {
        product_id: String::new(),
        product_name: String::new(),
        year: 0,
        total_items: 0,
        dragging_item_id: None,
        columns: Vec::new(),
        error: err,
    })
}

/// Switches the board to another catalog product.
///
/// # FFI contract
/// - Sync call, non-blocking; holds the session lock only for the update.
/// - Never panics; failures come back as `ok = false` with a message.
/// - Unlisted ids are skipped (`ok = true`, `applied = false`).
#[flutter_rust_bridge::frb(sync)]
pub fn select_product(product_id: String) -> BoardActionResponse {
    run_action("select_product", |board| {
        select_product_on(board, product_id)
    })
}

/// Sets the board year.
///
/// # FFI contract
/// - Sync call, non-blocking; holds the session lock only for the update.
/// - Never panics; failures come back as `ok = false` with a message.
#[flutter_rust_bridge::frb(sync)]
pub fn select_year(year: i32) -> BoardActionResponse {
    run_action("select_year", |board| {
        board.select_year(year);
        BoardActionResponse::applied(format!("Year set to {year}."), None)
    })
}

/// Moves the board year by `delta` (negative for earlier years).
///
/// # FFI contract
/// - Sync call, non-blocking; holds the session lock only for the update.
/// - Never panics; failures come back as `ok = false` with a message.
/// - Saturates at the `i32` range instead of overflowing.
#[flutter_rust_bridge::frb(sync)]
pub fn shift_year(delta: i32) -> BoardActionResponse {
    run_action("shift_year", |board| {
        board.shift_year(delta);
        let year = board.selection().year;
        BoardActionResponse::applied(format!("Year set to {year}."), None)
    })
}

/// Marks the card `item_id` as being dragged.
///
/// # FFI contract
/// - Sync call, non-blocking; holds the session lock only for the update.
/// - Never panics; failures come back as `ok = false` with a message.
/// - Replaces any drag already in flight; the id is checked on drop.
#[flutter_rust_bridge::frb(sync)]
pub fn start_drag(item_id: String) -> BoardActionResponse {
    run_action("start_drag", |board| {
        board.start_drag(ItemId::new(item_id.as_str()));
        BoardActionResponse::applied("Drag started.", Some(item_id))
    })
}

/// Drops the dragged card on column `quarter` (`Q1|Q2|Q3|Q4`).
///
/// # FFI contract
/// - Sync call, non-blocking; holds the session lock only for the update.
/// - Never panics; failures come back as `ok = false` with a message.
/// - Always ends the drag, including for an invalid `quarter` label.
/// - A drop while idle is skipped.
#[flutter_rust_bridge::frb(sync)]
pub fn drop_on_quarter(quarter: String) -> BoardActionResponse {
    run_action("drop_on_quarter", |board| {
        drop_on_quarter_on(board, quarter.as_str())
    })
}

/// Ends a drag released outside any column.
///
/// # FFI contract
/// - Sync call, non-blocking; holds the session lock only for the update.
/// - Never panics; failures come back as `ok = false` with a message.
/// - Skipped when no drag is in flight.
#[flutter_rust_bridge::frb(sync)]
pub fn abandon_drag() -> BoardActionResponse {
    run_action("abandon_drag", |board| match board.abandon_drag() {
        Some(item_id) => BoardActionResponse::applied("Drag abandoned.", Some(item_id.to_string())),
        None => BoardActionResponse::skipped(&Outcome::<()>::Skipped(SkipReason::NoActiveDrag)),
    })
}

/// Creates a card from the title prompt value.
///
/// `None` means the prompt was dismissed; it is skipped like an empty title.
///
/// # FFI contract
/// - Sync call, non-blocking; holds the session lock only for the update.
/// - Never panics; failures come back as `ok = false` with a message.
#[flutter_rust_bridge::frb(sync)]
pub fn create_item(title: Option<String>) -> BoardActionResponse {
    run_action("create_item", |board| create_item_on(board, title.as_deref()))
}

fn with_board<T>(f: impl FnOnce(&mut Board) -> T) -> Result<T, String> {
    let cell = match BOARD.get() {
        Some(cell) => cell,
        None => {
            let board = BoardService::from_config(&BoardConfig::from_env())
                .map_err(|err| format!("board init failed: {err}"))?;
            BOARD.get_or_init(|| Mutex::new(board))
        }
    };
    let mut board = cell
        .lock()
        .map_err(|_| "board session lock poisoned".to_string())?;
    Ok(f(&mut board))
}

fn run_action(
    name: &str,
    f: impl FnOnce(&mut Board) -> BoardActionResponse,
) -> BoardActionResponse {
    match with_board(f) {
        Ok(response) => response,
        Err(err) => {
            log::error!("event=ffi_call module=ffi status=error call={name} error={err}");
            BoardActionResponse::failure(format!("{name} failed: {err}"))
        }
    }
}

fn products_of(board: &Board) -> Vec<ProductItem> {
    board
        .catalog()
        .list_products()
        .iter()
        .map(|product| ProductItem {
            product_id: product.id.to_string(),
            name: product.name.clone(),
        })
        .collect()
}

fn snapshot_of(board: &Board) -> BoardSnapshot {
    let summary = board.summary();
    let drag = board.drag_session();
    let columns = board
        .board()
        .columns()
        .map(|(quarter, items)| BoardColumn {
            quarter: quarter.to_string(),
            cards: items
                .iter()
                .map(|item| BoardCard {
                    item_id: item.id.to_string(),
                    title: item.title.clone(),
                    dragging: drag.is_dragging(&item.id),
                })
                .collect(),
        })
        .collect();

    BoardSnapshot {
        product_id: summary.product_id.to_string(),
        product_name: summary.product_name,
        year: summary.year,
        total_items: u32::try_from(summary.total_items).unwrap_or(u32::MAX),
        dragging_item_id: drag.dragging_id().map(ToString::to_string),
        columns,
        error: String::new(),
    }
}

fn select_product_on(board: &mut Board, product_id: String) -> BoardActionResponse {
    match board.select_product(ProductId::new(product_id.trim())) {
        Outcome::Applied(()) => BoardActionResponse::applied("Product selected.", None),
        skipped => BoardActionResponse::skipped(&skipped),
    }
}

fn drop_on_quarter_on(board: &mut Board, quarter: &str) -> BoardActionResponse {
    let quarter = match Quarter::parse(quarter) {
        Ok(quarter) => quarter,
        Err(err) => {
            // A drop always ends the drag, even when the target is unusable.
            board.abandon_drag();
            return BoardActionResponse::failure(format!("drop_on_quarter failed: {err}"));
        }
    };

    match board.drop_on_quarter(quarter) {
        Ok(Outcome::Applied(item)) => BoardActionResponse::applied(
            format!("Moved to {}.", item.quarter),
            Some(item.id.to_string()),
        ),
        Ok(skipped) => BoardActionResponse::skipped(&skipped),
        Err(err) => BoardActionResponse::failure(format!("drop_on_quarter failed: {err}")),
    }
}

fn create_item_on(board: &mut Board, title: Option<&str>) -> BoardActionResponse {
    match board.create_item(title) {
        Outcome::Applied(item) => {
            BoardActionResponse::applied("Item created.", Some(item.id.to_string()))
        }
        skipped => BoardActionResponse::skipped(&skipped),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, create_item_on, drop_on_quarter_on, init_logging, list_products, ping,
        products_of, select_product_on, snapshot_of, Board,
    };
    use roadmap_core::{BoardConfig, BoardService, ItemId, ProductId};

    fn local_board() -> Board {
        BoardService::from_config(&BoardConfig {
            initial_product: Some(ProductId::from("prod-1")),
            initial_year: Some(2024),
            seed: false,
        })
        .expect("empty board builds")
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn list_products_exposes_catalog_order() {
        let names: Vec<String> = list_products().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["Core Platform", "Mobile App", "Admin Console"]);
        assert_eq!(products_of(&local_board()).len(), 3);
    }

    #[test]
    fn snapshot_always_has_four_columns() {
        let board = local_board();
        let snapshot = snapshot_of(&board);
        let quarters: Vec<&str> = snapshot
            .columns
            .iter()
            .map(|column| column.quarter.as_str())
            .collect();
        assert_eq!(quarters, vec!["Q1", "Q2", "Q3", "Q4"]);
        assert_eq!(snapshot.total_items, 0);
        assert_eq!(snapshot.product_name, "Core Platform");
        assert!(snapshot.error.is_empty());
    }

    #[test]
    fn create_then_drag_and_drop_moves_card() {
        let mut board = local_board();
        let created = create_item_on(&mut board, Some("Dark mode"));
        assert!(created.ok && created.applied, "{}", created.message);
        let item_id = created.item_id.expect("created item id");

        board.start_drag(ItemId::new(item_id.as_str()));
        let dragging = snapshot_of(&board);
        assert_eq!(dragging.dragging_item_id.as_deref(), Some(item_id.as_str()));
        assert!(dragging.columns[0].cards[0].dragging);

        let dropped = drop_on_quarter_on(&mut board, "q2");
        assert!(dropped.applied, "{}", dropped.message);

        let snapshot = snapshot_of(&board);
        assert_eq!(snapshot.dragging_item_id, None);
        assert!(snapshot.columns[0].cards.is_empty());
        assert_eq!(snapshot.columns[1].cards[0].item_id, item_id);
        assert_eq!(snapshot.total_items, 1);
    }

    #[test]
    fn dismissed_prompt_is_skipped_not_failed() {
        let mut board = local_board();
        let response = create_item_on(&mut board, None);
        assert!(response.ok);
        assert!(!response.applied);
        assert!(response.message.contains("empty title"));
    }

    #[test]
    fn invalid_quarter_fails_and_clears_drag() {
        let mut board = local_board();
        board.start_drag(ItemId::from("item-1"));
        let response = drop_on_quarter_on(&mut board, "Q9");
        assert!(!response.ok);
        assert!(response.message.contains("Q9"));
        assert!(board.drag_session().is_idle());
    }

    #[test]
    fn drop_of_unknown_item_reports_failure() {
        let mut board = local_board();
        board.start_drag(ItemId::from("ghost"));
        let response = drop_on_quarter_on(&mut board, "Q1");
        assert!(!response.ok);
        assert!(response.message.contains("not found"));
    }

    #[test]
    fn unknown_product_selection_is_skipped() {
        let mut board = local_board();
        let response = select_product_on(&mut board, "prod-404".to_string());
        assert!(response.ok);
        assert!(!response.applied);
        assert_eq!(board.selection().product_id, ProductId::from("prod-1"));
    }
}

//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `roadmap_core` linkage without the Flutter runtime.
//! - Print the board for the configured selection, optionally after one
//!   scripted move: `roadmap_cli <item-id> <quarter>`.

use roadmap_core::{BoardConfig, BoardService, InMemoryItemStore, ItemId, Outcome, Quarter};
use std::process::ExitCode;

fn main() -> ExitCode {
    println!("roadmap_core ping={}", roadmap_core::ping());
    println!("roadmap_core version={}", roadmap_core::core_version());

    let mut board = match BoardService::from_config(&BoardConfig::from_env()) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("board init failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let [item_id, quarter] = args.as_slice() {
        if let Err(message) = scripted_move(&mut board, item_id, quarter) {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    }

    print_board(&board);
    ExitCode::SUCCESS
}

fn scripted_move(
    board: &mut BoardService<InMemoryItemStore>,
    item_id: &str,
    quarter: &str,
) -> Result<(), String> {
    let quarter = Quarter::parse(quarter).map_err(|err| err.to_string())?;
    board.start_drag(ItemId::from(item_id));
    match board.drop_on_quarter(quarter) {
        Ok(Outcome::Applied(item)) => {
            println!("moved {} to {}", item.id, item.quarter);
            Ok(())
        }
        Ok(Outcome::Skipped(reason)) => Err(format!("move skipped: {reason}")),
        Err(err) => Err(format!("move failed: {err}")),
    }
}

fn print_board(board: &BoardService<InMemoryItemStore>) {
    let summary = board.summary();
    println!(
        "{} {} total_items={}",
        summary.product_name, summary.year, summary.total_items
    );
    for (quarter, items) in board.board().columns() {
        println!("[{quarter}] {}", items.len());
        for item in items {
            println!("  #{} {}", item.id, item.title);
        }
    }
}

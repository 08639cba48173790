//! Board row sweeping and stamping

use classic_tetris::core::{Board, Shape};
use classic_tetris::types::{Cell, CellStatus, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_new_board_is_clear() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.merged_count(), 0);
    assert!(board.cells().iter().all(|c| *c == Cell::CLEAR));
}

#[test]
fn test_out_of_bounds_is_never_clear() {
    let board = Board::new();
    for (x, y) in [(-1, 0), (10, 0), (0, -1), (0, 20), (-5, 25)] {
        assert!(board.is_out_of_bounds(x, y));
        assert!(!board.is_clear(x, y));
        assert_eq!(board.get(x, y), None);
    }
    assert!(board.is_clear(0, 0));
    assert!(board.is_clear(9, 19));
}

#[test]
fn test_sweep_without_full_rows_is_identity() {
    let board = Board::from_ascii(&[
        "....",
        "#...",
        "##.#",
        ".###",
    ]);
    let (swept, cleared) = board.swept();
    assert_eq!(cleared, 0);
    assert_eq!(swept, board);
}

#[test]
fn test_sweep_keeps_surviving_rows_in_order() {
    let mut board = Board::from_ascii(&[
        "#...",
        "####",
        ".#..",
        "####",
        "..#.",
        "####",
    ]);
    let cleared = board.clear_full_rows();
    assert_eq!(cleared, 3);
    assert_eq!(
        board.to_ascii(),
        vec!["....", "....", "....", "#...", ".#..", "..#."]
    );
}

#[test]
fn test_sweep_all_rows() {
    let mut board = Board::from_ascii(&["###", "###"]);
    assert_eq!(board.clear_full_rows(), 2);
    assert_eq!(board.merged_count(), 0);
}

#[test]
fn test_swept_leaves_original_untouched() {
    let board = Board::from_ascii(&["#..", "###"]);
    let (swept, cleared) = board.swept();
    assert_eq!(cleared, 1);
    assert_eq!(board.to_ascii(), vec!["#..", "###"]);
    assert_eq!(swept.to_ascii(), vec!["...", "#.."]);
}

#[test]
fn test_full_row_uses_occupancy_not_status() {
    let mut board = Board::with_size(3, 2);
    let falling = Cell {
        occupied: true,
        status: CellStatus::Clear,
        color: None,
    };
    for x in 0..3 {
        board.set(x, 1, falling);
    }
    assert!(board.is_row_full(1));
    assert_eq!(board.clear_full_rows(), 1);
}

#[test]
fn test_lock_piece_writes_only_occupied_cells() {
    let mut board = Board::from_ascii(&["....", "....", "#..."]);
    let shape = Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]);
    let color = Rgb::new(0x80, 0x00, 0x80);

    assert!(board.lock_piece(&shape, 1, 0, color));
    assert_eq!(board.to_ascii(), vec!["..#.", ".###", "#..."]);
    assert_eq!(board.get(2, 0).unwrap().color, Some(color));
    assert_eq!(board.get(2, 0).unwrap().status, CellStatus::Merged);
    // The pre-existing colorless block is preserved
    assert_eq!(board.get(0, 2).unwrap().color, None);
}

#[test]
fn test_lock_piece_reports_cells_outside() {
    let mut board = Board::with_size(4, 4);
    let shape = Shape::from_rows(&[&[1, 1], &[1, 1]]);
    assert!(!board.lock_piece(&shape, 3, 0, Rgb::new(1, 1, 1)));
    // The cells that did land are still written
    assert_eq!(board.merged_count(), 2);
}

//! Board tests - dealing, the padded grid, and removal

use tui_linkup::core::{Board, BoardError, SimpleRng};
use tui_linkup::types::{Kind, Pos, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH};

#[test]
fn test_default_deal_dimensions() {
    let mut rng = SimpleRng::new(12345);
    let board = Board::deal(DEFAULT_BOARD_WIDTH, DEFAULT_BOARD_HEIGHT, &mut rng).unwrap();

    assert_eq!(board.width(), DEFAULT_BOARD_WIDTH);
    assert_eq!(board.height(), DEFAULT_BOARD_HEIGHT);
    assert_eq!(board.padded_rows(), DEFAULT_BOARD_HEIGHT + 2);
    assert_eq!(board.padded_cols(), DEFAULT_BOARD_WIDTH + 2);
    assert_eq!(board.live_tiles(), DEFAULT_BOARD_WIDTH * DEFAULT_BOARD_HEIGHT);
    assert_eq!(board.kind_count(), DEFAULT_BOARD_WIDTH * DEFAULT_BOARD_HEIGHT / 2);
}

#[test]
fn test_deal_is_deterministic_per_seed() {
    let mut rng1 = SimpleRng::new(99);
    let mut rng2 = SimpleRng::new(99);
    let board1 = Board::deal(6, 4, &mut rng1).unwrap();
    let board2 = Board::deal(6, 4, &mut rng2).unwrap();
    assert_eq!(board1, board2);

    let mut rng3 = SimpleRng::new(100);
    let board3 = Board::deal(6, 4, &mut rng3).unwrap();
    assert_ne!(board1, board3);
}

#[test]
fn test_every_kind_dealt_exactly_twice() {
    let mut rng = SimpleRng::new(7);
    let board = Board::deal(6, 4, &mut rng).unwrap();

    let mut counts = vec![0usize; board.kind_count()];
    for (_, kind) in board.occupied_positions() {
        counts[kind.index()] += 1;
    }
    assert!(counts.iter().all(|&c| c == 2));
}

#[test]
fn test_border_corridor_stays_empty() {
    let mut rng = SimpleRng::new(3);
    let board = Board::deal(6, 4, &mut rng).unwrap();

    for col in 0..board.padded_cols() {
        assert_eq!(board.kind_at(Pos::new(0, col)).unwrap(), None);
        assert_eq!(
            board.kind_at(Pos::new(board.padded_rows() - 1, col)).unwrap(),
            None
        );
    }
    for row in 0..board.padded_rows() {
        assert_eq!(board.kind_at(Pos::new(row, 0)).unwrap(), None);
        assert_eq!(
            board.kind_at(Pos::new(row, board.padded_cols() - 1)).unwrap(),
            None
        );
    }
}

#[test]
fn test_remove_pair_conserves_remaining_kinds() {
    let mut rng = SimpleRng::new(21);
    let mut board = Board::deal(6, 4, &mut rng).unwrap();

    let (kind, (a, b)) = board.live_pairs().next().unwrap();
    assert_eq!(board.remove(a).unwrap(), kind);
    assert_eq!(board.remove(b).unwrap(), kind);

    assert_eq!(board.live_tiles(), 22);
    // The removed kind no longer appears; every other kind still has a pair
    assert!(board.live_pairs().all(|(k, _)| k != kind));
    assert_eq!(board.live_pairs().count(), 11);
}

#[test]
fn test_remove_twice_is_an_error() {
    let mut rng = SimpleRng::new(21);
    let mut board = Board::deal(6, 4, &mut rng).unwrap();
    let (pos, _) = board.occupied_positions().next().unwrap();

    board.remove(pos).unwrap();
    assert_eq!(
        board.remove(pos).unwrap_err(),
        BoardError::EmptyCell {
            row: pos.row,
            col: pos.col
        }
    );
}

#[test]
fn test_from_layout_accepts_holes() {
    let k = |id| Some(Kind::new(id));
    let board = Board::from_layout(3, 2, &[k(0), None, k(1), k(1), None, k(0)]).unwrap();

    assert_eq!(board.live_tiles(), 4);
    assert_eq!(board.kind_at(Pos::new(1, 2)).unwrap(), None);
    assert_eq!(board.kind_at(Pos::new(1, 1)).unwrap(), Some(Kind::new(0)));
}

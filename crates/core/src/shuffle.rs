//! Shuffle module - redeals tile faces in place until a move exists
//!
//! Occupancy never changes: the same cells stay occupied, only the kinds
//! sitting on them are permuted. Draws that leave the board stuck are
//! rejected and redrawn, so the board handed back always has at least one
//! legal move.

use tui_linkup_types::{Kind, Pos};

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::solver::has_any_move;

/// Permute the kinds over the occupied cells until the board is solvable.
/// Returns the number of draws taken; 0 means the board already had a move.
pub fn reshuffle(board: &mut Board, rng: &mut SimpleRng) -> u32 {
    let mut draws = 0;
    while !has_any_move(board) && !board.is_cleared() {
        let (positions, mut kinds): (Vec<Pos>, Vec<Kind>) =
            board.occupied_positions().unzip();
        rng.shuffle(&mut kinds);
        board.redistribute(&positions, &kinds);
        draws += 1;
    }
    draws
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_linkup_types::Cell;

    fn k(id: u16) -> Cell {
        Some(Kind::new(id))
    }

    #[test]
    fn test_solvable_board_is_left_alone() {
        let mut rng = SimpleRng::new(5);
        let mut board = Board::from_layout(2, 1, &[k(0), k(0)]).unwrap();
        let before = board.clone();

        assert_eq!(reshuffle(&mut board, &mut rng), 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_stuck_board_becomes_solvable() {
        let mut rng = SimpleRng::new(5);
        // A B / B A deadlock
        let mut board = Board::from_layout(2, 2, &[k(0), k(1), k(1), k(0)]).unwrap();
        assert!(!has_any_move(&board));

        let draws = reshuffle(&mut board, &mut rng);
        assert!(draws >= 1);
        assert!(has_any_move(&board));
    }

    #[test]
    fn test_occupancy_footprint_is_preserved() {
        let mut rng = SimpleRng::new(12);
        let mut board = Board::from_layout(2, 2, &[k(0), k(1), k(1), k(0)]).unwrap();
        let occupied_before: Vec<Pos> =
            board.occupied_positions().map(|(pos, _)| pos).collect();

        reshuffle(&mut board, &mut rng);

        let occupied_after: Vec<Pos> =
            board.occupied_positions().map(|(pos, _)| pos).collect();
        assert_eq!(occupied_before, occupied_after);
        assert_eq!(board.live_tiles(), 4);
    }

    #[test]
    fn test_kind_multiset_is_preserved() {
        let mut rng = SimpleRng::new(3);
        let mut board = Board::from_layout(2, 2, &[k(0), k(1), k(1), k(0)]).unwrap();
        reshuffle(&mut board, &mut rng);

        let mut kinds: Vec<Kind> = board.occupied_positions().map(|(_, kind)| kind).collect();
        kinds.sort();
        assert_eq!(
            kinds,
            vec![Kind::new(0), Kind::new(0), Kind::new(1), Kind::new(1)]
        );
    }

    #[test]
    fn test_cleared_board_terminates() {
        let mut rng = SimpleRng::new(1);
        let mut board = Board::from_layout(2, 1, &[k(0), k(0)]).unwrap();
        board.remove(Pos::new(1, 1)).unwrap();
        board.remove(Pos::new(1, 2)).unwrap();

        assert_eq!(reshuffle(&mut board, &mut rng), 0);
        assert!(board.is_cleared());
    }
}

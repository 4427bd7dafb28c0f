//! Solver module - answers "is there any legal move on this board?"
//!
//! Pairs are probed in kind-id order, so the move reported for a given board
//! is always the same one. The hint feature and the reshuffle check both sit
//! on top of this.

use tui_linkup_types::Pos;

use crate::board::Board;
use crate::path::find_path;

/// First connectable pair in kind-id order, or `None` when the board is
/// stuck. The returned positions are ordered top-left first.
pub fn find_any_move(board: &Board) -> Option<(Pos, Pos)> {
    board
        .live_pairs()
        .find(|&(_, (a, b))| find_path(board, a, b).is_some())
        .map(|(_, pair)| pair)
}

/// Whether at least one legal move exists
pub fn has_any_move(board: &Board) -> bool {
    find_any_move(board).is_some()
}

//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, rendering, persistence).
//!
//! # Board Dimensions
//!
//! The classic link-up playfield:
//!
//! - **Width**: 10 playable columns
//! - **Height**: 8 playable rows
//! - The board is stored with a one-cell empty border on every side, so the
//!   padded grid is 12x10. Paths may route through the border corridor.
//!
//! # Session Policy Constants
//!
//! Points and timing (seconds):
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_TIME_SECS` | 150 | Time budget at level 1 |
//! | `LEVEL_TIME_STEP_SECS` | 0.25 | Budget shrink per completed level |
//! | `POINTS_FOR_MATCH` | 10 | Awarded for a resolved pair |
//! | `POINTS_FOR_MISS` | 5 | Deducted for an invalid pair |
//! | `HINT_COST` | 50 | Point cost to request a hint |
//! | `HINT_TIME_PENALTY_SECS` | 2 | Clock penalty charged with a hint |
//! | `HINT_VISIBLE_SECS` | 1 | How long the hint highlight lasts |
//! | `TIME_BONUS_PER_SEC` | 2 | Level-completion bonus per remaining second |
//!
//! # Examples
//!
//! ```
//! use tui_linkup_types::{Direction, Kind, Pos};
//!
//! let kind = Kind::new(3);
//! assert_eq!(kind.id(), 3);
//!
//! let pos = Pos::new(2, 5);
//! assert_eq!(Direction::Up.offset(pos), Some(Pos::new(1, 5)));
//! ```

/// Default playable board dimensions (columns x rows)
pub const DEFAULT_BOARD_WIDTH: usize = 10;
pub const DEFAULT_BOARD_HEIGHT: usize = 8;

/// Time budget at level 1, in seconds
pub const BASE_TIME_SECS: f64 = 150.0;
/// The budget shrinks by this much for each completed level
pub const LEVEL_TIME_STEP_SECS: f64 = 0.25;

/// Point policy
pub const POINTS_FOR_MATCH: u32 = 10;
pub const POINTS_FOR_MISS: u32 = 5;
pub const HINT_COST: u32 = 50;

/// Hint timing (seconds)
pub const HINT_TIME_PENALTY_SECS: f64 = 2.0;
pub const HINT_VISIBLE_SECS: f64 = 1.0;

/// Level-completion bonus: points per whole second left on the clock
pub const TIME_BONUS_PER_SEC: u32 = 2;

/// Maximum direction changes allowed in a legal path
pub const PATH_TURN_BUDGET: usize = 2;

/// Maximum number of leaderboard entries retained
pub const LEADERBOARD_CAP: usize = 10;

/// Identity of a tile face. Exactly two live tiles share a kind until the
/// pair is removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Kind(u16);

impl Kind {
    pub const fn new(id: u16) -> Self {
        Kind(id)
    }

    pub const fn id(self) -> u16 {
        self.0
    }

    /// Index into kind-keyed tables
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Cell on the board (None = empty, Some = occupied by a tile of that kind)
pub type Cell = Option<Kind>;

/// A position in padded-grid coordinates. Row 0 and column 0 are part of the
/// permanently-empty border corridor; the playable area starts at (1, 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Pos { row, col }
    }
}

/// The four cardinal walk directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Canonical exploration order: horizontal before vertical, so paths
    /// cornering on the first endpoint's row win ties.
    pub const SCAN_ORDER: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Up,
        Direction::Down,
    ];

    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// The two directions a path may turn into from this one, in canonical
    /// order.
    pub const fn perpendicular(self) -> [Direction; 2] {
        if self.is_horizontal() {
            [Direction::Up, Direction::Down]
        } else {
            [Direction::Right, Direction::Left]
        }
    }

    /// Index into direction-keyed tables
    pub const fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// One step in this direction, or None if it would leave the grid on the
    /// low side. High-side bounds are the board's to check.
    pub fn offset(self, pos: Pos) -> Option<Pos> {
        match self {
            Direction::Up => pos.row.checked_sub(1).map(|row| Pos::new(row, pos.col)),
            Direction::Down => Some(Pos::new(pos.row + 1, pos.col)),
            Direction::Left => pos.col.checked_sub(1).map(|col| Pos::new(pos.row, col)),
            Direction::Right => Some(Pos::new(pos.row, pos.col + 1)),
        }
    }
}

/// Per-cell rendering tag for a resolved path. Pure presentation data: a
/// function of three consecutive cell coordinates, with no game semantics.
///
/// Straight tags carry the travel direction; corner tags name the shape of
/// the elbow; half tags mark the first/last cell, where the drawn line covers
/// only half the tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    Up,
    Down,
    Left,
    Right,
    HalfUp,
    HalfDown,
    HalfLeft,
    HalfRight,
    CornerLeftDown,
    CornerRightDown,
    CornerRightUp,
    CornerLeftUp,
}

/// Lifecycle of one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Paused,
    Won,
    GameOver,
}

impl GameStatus {
    pub const fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::GameOver)
    }
}

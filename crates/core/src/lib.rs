//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and board
//! search logic. It has **zero dependencies** on UI, networking, or I/O,
//! making it:
//!
//! - **Deterministic**: Same seed produces identical deals and reshuffles
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: padded tile grid with a kind index for O(1) pair lookup
//! - [`path`]: turn-budgeted connectivity search and path segment encoding
//! - [`solver`]: "any legal move?" probe backing hints and the stuck check
//! - [`shuffle`]: in-place redeal loop guaranteeing a solvable board
//! - [`game`]: one session - selection, moves, hints, the clock, level flow
//! - [`scoring`]: point counter, level tracking, the time budget curve
//! - [`rng`]: seeded LCG used for dealing and reshuffling
//!
//! # Game Rules
//!
//! - **Matching**: two tiles of the same kind are removed when an
//!   unobstructed path with at most two right-angle turns joins them
//! - **Border routing**: paths may leave the play area through the
//!   one-cell empty corridor around it
//! - **Always solvable**: a deal or a match that leaves the board without
//!   any legal move triggers an automatic reshuffle
//! - **Scoring**: points per match, a deduction per miss, a hint costs
//!   points plus clock time, and clearing the board pays a bonus per
//!   remaining second
//!
//! # Example
//!
//! ```
//! use tui_linkup_core::game::{Game, GameConfig, MoveOutcome};
//! use tui_linkup_core::solver::find_any_move;
//!
//! let mut game = Game::new(GameConfig::default()).unwrap();
//!
//! // Play the first connectable pair
//! let (a, b) = find_any_move(game.board()).unwrap();
//! game.select(a).unwrap();
//! assert_eq!(game.select(b).unwrap(), Some(MoveOutcome::Matched));
//! ```
//!
//! # Timing
//!
//! The clock is caller-driven: call [`Game::tick`](game::Game::tick) with
//! elapsed wall time. Each level's budget shrinks slightly below the base,
//! and running out of budget ends the game.

pub mod board;
pub mod game;
pub mod path;
pub mod rng;
pub mod scoring;
pub mod shuffle;
pub mod solver;

pub use tui_linkup_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, BoardError};
pub use game::{Game, GameConfig, MoveOutcome};
pub use path::{find_path, Path};
pub use rng::SimpleRng;
pub use scoring::{remaining_percent, time_budget_secs, ScoreCounter};
pub use shuffle::reshuffle;
pub use solver::{find_any_move, has_any_move};

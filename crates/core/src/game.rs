//! Game module - one playable session: selection, moves, hints, the clock
//!
//! The `Game` owns the board, the score counter and the RNG, and exposes the
//! few entry points a frontend needs: `select` for clicks, `tick` for the
//! clock, `request_hint`, pause/resume and level flow. Every board handed to
//! the player is guaranteed solvable; a match that leaves the board stuck
//! triggers an automatic reshuffle.

use arrayvec::ArrayVec;

use tui_linkup_types::{
    GameStatus, Kind, Pos, Segment, BASE_TIME_SECS, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH,
    HINT_COST, HINT_TIME_PENALTY_SECS, HINT_VISIBLE_SECS, POINTS_FOR_MATCH, POINTS_FOR_MISS,
};

use crate::board::{Board, BoardError};
use crate::path::{find_path, Path};
use crate::rng::SimpleRng;
use crate::scoring::{remaining_percent, time_budget_secs, ScoreCounter};
use crate::shuffle::reshuffle;
use crate::solver::find_any_move;

/// Session parameters. The seed pins the deal and every reshuffle, so a
/// whole game replays deterministically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub base_time_secs: f64,
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            base_time_secs: BASE_TIME_SECS,
            seed: 1,
        }
    }
}

/// How a completed two-tile selection resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Matched,
    Miss,
}

/// One game session
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    rng: SimpleRng,
    counter: ScoreCounter,
    status: GameStatus,
    selection: ArrayVec<Pos, 2>,
    hint: Option<(Pos, Pos)>,
    hint_expires_at: Option<f64>,
    last_move: Option<Path>,
    elapsed_secs: f64,
    budget_secs: f64,
    config: GameConfig,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, BoardError> {
        let mut rng = SimpleRng::new(config.seed);
        let mut board = Board::deal(config.width, config.height, &mut rng)?;
        reshuffle(&mut board, &mut rng);

        let counter = ScoreCounter::new();
        let budget_secs = time_budget_secs(config.base_time_secs, counter.level());
        Ok(Self {
            board,
            rng,
            counter,
            status: GameStatus::Playing,
            selection: ArrayVec::new(),
            hint: None,
            hint_expires_at: None,
            last_move: None,
            elapsed_secs: 0.0,
            budget_secs,
            config,
        })
    }

    /// Handle a click on a cell. Clicks on empty cells, the border corridor
    /// or outside the grid are ignored; clicking a selected tile deselects
    /// it. The second distinct tile resolves the pair as a move.
    pub fn select(&mut self, pos: Pos) -> Result<Option<MoveOutcome>, BoardError> {
        if self.status != GameStatus::Playing || !self.board.is_occupied(pos) {
            return Ok(None);
        }
        if let Some(slot) = self.selection.iter().position(|p| *p == pos) {
            self.selection.remove(slot);
            return Ok(None);
        }

        self.selection.push(pos);
        if self.selection.len() < 2 {
            return Ok(None);
        }
        self.resolve().map(Some)
    }

    fn resolve(&mut self) -> Result<MoveOutcome, BoardError> {
        let (a, b) = (self.selection[0], self.selection[1]);
        self.selection.clear();

        let path = match find_path(&self.board, a, b) {
            Some(path) => path,
            None => {
                self.counter.decrease_points(POINTS_FOR_MISS);
                self.last_move = None;
                return Ok(MoveOutcome::Miss);
            }
        };

        self.board.remove(a)?;
        self.board.remove(b)?;
        self.counter.increase_points(POINTS_FOR_MATCH);
        self.last_move = Some(path);
        self.hint = None;
        self.hint_expires_at = None;

        if self.board.is_cleared() {
            self.status = GameStatus::Won;
            self.counter.won_level(self.budget_secs - self.elapsed_secs);
        } else {
            reshuffle(&mut self.board, &mut self.rng);
        }
        Ok(MoveOutcome::Matched)
    }

    /// Advance the clock. Expires the hint highlight and ends the game when
    /// the budget runs out. Does nothing unless the game is in play.
    pub fn tick(&mut self, dt_secs: f64) {
        if self.status != GameStatus::Playing {
            return;
        }
        self.elapsed_secs += dt_secs;

        if let Some(deadline) = self.hint_expires_at {
            if self.elapsed_secs >= deadline {
                self.hint = None;
                self.hint_expires_at = None;
            }
        }
        self.check_timeout();
    }

    /// Ends the session when the clock has run out. Returns whether it did.
    fn check_timeout(&mut self) -> bool {
        if self.elapsed_secs < self.budget_secs {
            return false;
        }
        self.status = GameStatus::GameOver;
        self.selection.clear();
        self.hint = None;
        self.hint_expires_at = None;
        true
    }

    /// Highlight a connectable pair for a short while, charging points and
    /// clock time. Refused (with nothing charged) when the game is not in
    /// play or the player cannot afford it. The clock penalty can itself run
    /// the budget out, ending the session with the charge kept and no
    /// highlight shown.
    pub fn request_hint(&mut self) -> Option<(Pos, Pos)> {
        if self.status != GameStatus::Playing || !self.counter.points_at_least(HINT_COST) {
            return None;
        }
        let pair = find_any_move(&self.board)?;

        self.counter.decrease_points(HINT_COST);
        self.elapsed_secs += HINT_TIME_PENALTY_SECS;
        if self.check_timeout() {
            return None;
        }
        self.hint = Some(pair);
        self.hint_expires_at = Some(self.elapsed_secs + HINT_VISIBLE_SECS);
        Some(pair)
    }

    pub fn pause(&mut self) {
        if self.status == GameStatus::Playing {
            self.status = GameStatus::Paused;
        }
    }

    pub fn resume(&mut self) {
        if self.status == GameStatus::Paused {
            self.status = GameStatus::Playing;
        }
    }

    /// Deal the next level's board. Only valid after a win; ignored
    /// otherwise.
    pub fn next_level(&mut self) -> Result<(), BoardError> {
        if self.status != GameStatus::Won {
            return Ok(());
        }
        self.counter.advance_level();
        self.start_level()
    }

    /// Fresh session: score and level wiped, new board dealt
    pub fn restart(&mut self) -> Result<(), BoardError> {
        self.counter.reset();
        self.start_level()
    }

    fn start_level(&mut self) -> Result<(), BoardError> {
        self.board = Board::deal(self.config.width, self.config.height, &mut self.rng)?;
        reshuffle(&mut self.board, &mut self.rng);
        self.budget_secs = time_budget_secs(self.config.base_time_secs, self.counter.level());
        self.elapsed_secs = 0.0;
        self.selection.clear();
        self.hint = None;
        self.hint_expires_at = None;
        self.last_move = None;
        self.status = GameStatus::Playing;
        Ok(())
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn level(&self) -> u32 {
        self.counter.level()
    }

    pub fn points(&self) -> u32 {
        self.counter.points()
    }

    pub fn live_tiles(&self) -> usize {
        self.board.live_tiles()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn kind_at(&self, pos: Pos) -> Result<Option<Kind>, BoardError> {
        self.board.kind_at(pos)
    }

    pub fn is_selected(&self, pos: Pos) -> bool {
        self.selection.contains(&pos)
    }

    pub fn is_hint_tile(&self, pos: Pos) -> bool {
        matches!(self.hint, Some((a, b)) if a == pos || b == pos)
    }

    /// Remaining clock as a percentage of this level's budget
    pub fn time_percent(&self) -> f64 {
        remaining_percent(self.elapsed_secs, self.budget_secs)
    }

    /// The path of the most recent match, for drawing the connection
    pub fn last_move_path(&self) -> Option<&Path> {
        self.last_move.as_ref()
    }

    /// Rendering tags for the most recent match, empty after a miss
    pub fn last_move_segments(&self) -> Vec<Segment> {
        self.last_move
            .as_ref()
            .map(Path::segments)
            .unwrap_or_default()
    }
}

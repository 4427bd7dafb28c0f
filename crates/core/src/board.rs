//! Board module - manages the padded tile grid and the kind index
//!
//! The board stores the playable `height x width` area inside a grid padded
//! with one permanently-empty row/column on every side, so the path search
//! can route through the border corridor without special cases. Cells hold
//! `Option<Kind>` values; a `Kind -> positions` index makes pair lookup O(1).
//! Grid and index are mutated together and never observable out of sync.

use arrayvec::ArrayVec;
use thiserror::Error;

use tui_linkup_types::{Cell, Kind, Pos};

use crate::rng::SimpleRng;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("a {width}x{height} board does not hold an even number of tiles")]
    OddCellCount { width: usize, height: usize },
    #[error("position ({row}, {col}) is outside the {rows}x{cols} padded grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    #[error("cell ({row}, {col}) is already empty")]
    EmptyCell { row: usize, col: usize },
    #[error("kind {0:?} does not have a live pair; grid and index are out of sync")]
    PairBroken(Kind),
    #[error("layout holds {got} cells, expected {expected}")]
    BadLayout { got: usize, expected: usize },
}

/// The tile board: padded cell grid plus kind index
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Playable columns
    width: usize,
    /// Playable rows
    height: usize,
    /// Padded grid, `(height + 2) * (width + 2)` cells, row-major
    cells: Vec<Cell>,
    /// Live positions per kind id; capacity 2 because a kind never has more
    index: Vec<ArrayVec<Pos, 2>>,
    live_tiles: usize,
}

impl Board {
    /// Deal a fresh board: two tiles of each of `width * height / 2` kinds,
    /// shuffled over the playable area.
    pub fn deal(width: usize, height: usize, rng: &mut SimpleRng) -> Result<Self, BoardError> {
        if (width * height) % 2 != 0 {
            return Err(BoardError::OddCellCount { width, height });
        }

        let kind_count = width * height / 2;
        let mut faces: Vec<Kind> = (0..kind_count)
            .flat_map(|id| {
                let kind = Kind::new(id as u16);
                [kind, kind]
            })
            .collect();
        rng.shuffle(&mut faces);

        let mut board = Self::empty(width, height, kind_count);
        let slots: Vec<Pos> = board.interior_positions().collect();
        for (slot, kind) in slots.into_iter().zip(faces) {
            board.place(slot, kind);
        }
        Ok(board)
    }

    /// Build a board from an explicit interior layout (row-major over the
    /// playable area). Intended for tests, replays and puzzle setups.
    pub fn from_layout(
        width: usize,
        height: usize,
        interior: &[Cell],
    ) -> Result<Self, BoardError> {
        if (width * height) % 2 != 0 {
            return Err(BoardError::OddCellCount { width, height });
        }
        if interior.len() != width * height {
            return Err(BoardError::BadLayout {
                got: interior.len(),
                expected: width * height,
            });
        }

        let kind_count = width * height / 2;
        let mut board = Self::empty(width, height, kind_count);
        let slots: Vec<Pos> = board.interior_positions().collect();
        for (slot, cell) in slots.into_iter().zip(interior) {
            if let Some(kind) = *cell {
                if kind.index() >= kind_count || board.index[kind.index()].is_full() {
                    return Err(BoardError::PairBroken(kind));
                }
                board.place(slot, kind);
            }
        }
        Ok(board)
    }

    fn empty(width: usize, height: usize, kind_count: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; (height + 2) * (width + 2)],
            index: vec![ArrayVec::new(); kind_count],
            live_tiles: 0,
        }
    }

    fn place(&mut self, pos: Pos, kind: Kind) {
        let idx = self.flat(pos);
        self.cells[idx] = Some(kind);
        self.index[kind.index()].push(pos);
        self.live_tiles += 1;
    }

    /// Playable width (columns)
    pub fn width(&self) -> usize {
        self.width
    }

    /// Playable height (rows)
    pub fn height(&self) -> usize {
        self.height
    }

    /// Rows in the padded grid, border corridor included
    pub fn padded_rows(&self) -> usize {
        self.height + 2
    }

    /// Columns in the padded grid, border corridor included
    pub fn padded_cols(&self) -> usize {
        self.width + 2
    }

    /// Number of distinct kinds this board was dealt with
    pub fn kind_count(&self) -> usize {
        self.index.len()
    }

    pub fn live_tiles(&self) -> usize {
        self.live_tiles
    }

    /// True once every tile has been removed
    pub fn is_cleared(&self) -> bool {
        self.live_tiles == 0
    }

    /// Whether a position lies inside the padded grid
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.padded_rows() && pos.col < self.padded_cols()
    }

    /// Flat index into the cell vector. Callers check bounds first.
    pub(crate) fn flat(&self, pos: Pos) -> usize {
        pos.row * self.padded_cols() + pos.col
    }

    /// Kind at a position, or `None` for an empty cell. Out-of-range
    /// coordinates are a contract violation, reported as `OutOfBounds` -
    /// never clamped.
    pub fn kind_at(&self, pos: Pos) -> Result<Option<Kind>, BoardError> {
        self.check_bounds(pos)?;
        Ok(self.cells[self.flat(pos)])
    }

    /// Occupancy probe used by the path search: border cells and anything
    /// outside the padded grid count as empty.
    pub fn is_occupied(&self, pos: Pos) -> bool {
        self.contains(pos) && self.cells[self.flat(pos)].is_some()
    }

    fn check_bounds(&self, pos: Pos) -> Result<(), BoardError> {
        if self.contains(pos) {
            Ok(())
        } else {
            Err(BoardError::OutOfBounds {
                row: pos.row,
                col: pos.col,
                rows: self.padded_rows(),
                cols: self.padded_cols(),
            })
        }
    }

    /// Remove the tile at `pos`, updating grid and index as one step.
    /// Nothing is mutated on any error path.
    pub fn remove(&mut self, pos: Pos) -> Result<Kind, BoardError> {
        self.check_bounds(pos)?;
        let idx = self.flat(pos);
        let kind = self.cells[idx].ok_or(BoardError::EmptyCell {
            row: pos.row,
            col: pos.col,
        })?;

        let entry = &mut self.index[kind.index()];
        let slot = entry
            .iter()
            .position(|p| *p == pos)
            .ok_or(BoardError::PairBroken(kind))?;
        entry.swap_remove(slot);
        self.cells[idx] = None;
        self.live_tiles -= 1;
        Ok(kind)
    }

    /// The two live positions of a kind, ordered top-left first.
    /// `PairBroken` signals a desynchronized index, not "no path".
    pub fn pair_of(&self, kind: Kind) -> Result<(Pos, Pos), BoardError> {
        let entry = self
            .index
            .get(kind.index())
            .ok_or(BoardError::PairBroken(kind))?;
        if entry.len() != 2 {
            return Err(BoardError::PairBroken(kind));
        }
        Ok(Self::ordered(entry[0], entry[1]))
    }

    /// Kinds that still have both tiles on the board, kind-id ascending,
    /// each pair ordered top-left first.
    pub fn live_pairs(&self) -> impl Iterator<Item = (Kind, (Pos, Pos))> + '_ {
        self.index.iter().enumerate().filter_map(|(id, entry)| {
            if entry.len() == 2 {
                Some((Kind::new(id as u16), Self::ordered(entry[0], entry[1])))
            } else {
                None
            }
        })
    }

    fn ordered(a: Pos, b: Pos) -> (Pos, Pos) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Every occupied position with its kind, row-major over the interior
    pub fn occupied_positions(&self) -> impl Iterator<Item = (Pos, Kind)> + '_ {
        self.interior_positions().filter_map(|pos| {
            self.cells[self.flat(pos)].map(|kind| (pos, kind))
        })
    }

    fn interior_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        let (width, height) = (self.width, self.height);
        (1..=height).flat_map(move |row| (1..=width).map(move |col| Pos::new(row, col)))
    }

    /// Rewrite the kinds sitting at the given positions, rebuilding the
    /// index. The shuffle engine passes exactly the current occupied set, so
    /// the occupancy footprint is unchanged.
    pub(crate) fn redistribute(&mut self, positions: &[Pos], kinds: &[Kind]) {
        debug_assert_eq!(positions.len(), kinds.len());
        for entry in &mut self.index {
            entry.clear();
        }
        for (&pos, &kind) in positions.iter().zip(kinds) {
            let idx = self.flat(pos);
            debug_assert!(self.cells[idx].is_some());
            self.cells[idx] = Some(kind);
            self.index[kind.index()].push(pos);
        }
    }
}

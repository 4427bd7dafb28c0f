//! Records module - the top-score leaderboard and its JSON persistence
//!
//! A small fixed-capacity leaderboard: entries are ranked by points, the
//! lowest entry is evicted when a qualifying score arrives and the board is
//! full. `JsonStore` reads and writes the whole table as one JSON file; a
//! missing file simply means an empty board.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use tui_linkup_types::LEADERBOARD_CAP;

/// One leaderboard entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub level: u32,
    pub points: u32,
}

/// Ranked top scores, at most [`LEADERBOARD_CAP`] of them
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Leaderboard {
    records: Vec<ScoreRecord>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a score would make it onto the board: there is room, or it
    /// beats the current lowest entry.
    pub fn qualifies(&self, points: u32) -> bool {
        if self.records.len() < LEADERBOARD_CAP {
            return true;
        }
        match self.records.last() {
            Some(lowest) => points > lowest.points,
            None => true,
        }
    }

    /// Insert a record, evicting the lowest entry if the board is full.
    /// Returns whether the record made it in. Equal scores rank in arrival
    /// order, newest last.
    pub fn insert(&mut self, record: ScoreRecord) -> bool {
        if !self.qualifies(record.points) {
            return false;
        }
        self.records.push(record);
        self.records.sort_by(|a, b| b.points.cmp(&a.points));
        self.records.truncate(LEADERBOARD_CAP);
        true
    }

    /// Entries in rank order, best first
    pub fn ranked(&self) -> &[ScoreRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

/// Leaderboard persistence: one JSON file holding the whole table
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the leaderboard; a missing file yields an empty one
    pub fn load(&self) -> anyhow::Result<Leaderboard> {
        if !self.path.exists() {
            return Ok(Leaderboard::new());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("reading leaderboard from {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("parsing leaderboard in {}", self.path.display()))
    }

    /// Write the leaderboard, creating parent directories as needed
    pub fn save(&self, board: &Leaderboard) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
        let raw = serde_json::to_string_pretty(board).context("serializing leaderboard")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("writing leaderboard to {}", self.path.display()))
    }
}

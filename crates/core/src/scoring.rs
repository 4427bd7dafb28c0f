//! Scoring module - point counter, level tracking, and the time budget curve
//!
//! Points never go below zero; deductions saturate. The per-level time
//! budget shrinks linearly from the base, never compounding.

use tui_linkup_types::{LEVEL_TIME_STEP_SECS, TIME_BONUS_PER_SEC};

/// Points and level progression for one player session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreCounter {
    level: u32,
    points: u32,
}

impl ScoreCounter {
    pub fn new() -> Self {
        Self {
            level: 1,
            points: 0,
        }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn increase_points(&mut self, amount: u32) {
        self.points += amount;
    }

    /// Deduct points, clamping at zero
    pub fn decrease_points(&mut self, amount: u32) {
        self.points = self.points.saturating_sub(amount);
    }

    /// Whether the player can afford a charge of `amount`
    pub fn points_at_least(&self, amount: u32) -> bool {
        self.points >= amount
    }

    /// Credit the level-completion bonus: a fixed rate per whole second left
    /// on the clock. Negative remainders credit nothing.
    pub fn won_level(&mut self, remaining_secs: f64) {
        let whole_secs = remaining_secs.max(0.0) as u32;
        self.points += whole_secs * TIME_BONUS_PER_SEC;
    }

    pub fn advance_level(&mut self) {
        self.level += 1;
    }

    /// Back to level 1 with zero points
    pub fn reset(&mut self) {
        self.level = 1;
        self.points = 0;
    }
}

impl Default for ScoreCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Time budget for a level: the base shrinks by a fixed step per completed
/// level, measured from the base rather than the previous level's budget.
pub fn time_budget_secs(base_secs: f64, level: u32) -> f64 {
    base_secs - level.saturating_sub(1) as f64 * LEVEL_TIME_STEP_SECS
}

/// Remaining time as a percentage of the budget, clamped to [0, 100]
pub fn remaining_percent(elapsed_secs: f64, budget_secs: f64) -> f64 {
    if elapsed_secs >= budget_secs {
        0.0
    } else {
        100.0 - elapsed_secs * 100.0 / budget_secs
    }
}

//! Score, lives, level index and the run clock

use serde::{Deserialize, Serialize};

/// Why a run ended in defeat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LossReason {
    OutOfLives,
    OutOfTime,
    /// The next level's map could not be loaded
    LevelUnavailable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    pub score: u64,
    pub lives: u8,
    /// 1-based level index
    pub level: u32,
    pub level_count: u32,
    /// Mirrors the current map's collectible count
    pub remaining_items: usize,
    pub elapsed_ticks: u64,
    pub time_budget_ticks: u64,
}

impl Progress {
    pub fn new(level: u32, level_count: u32, lives: u8, time_budget_ticks: u64) -> Self {
        let level_count = level_count.max(1);
        Self {
            score: 0,
            lives,
            level: level.clamp(1, level_count),
            level_count,
            remaining_items: 0,
            elapsed_ticks: 0,
            time_budget_ticks,
        }
    }

    pub fn add_reward(&mut self, reward: u32) {
        self.score += u64::from(reward);
    }

    /// Take one life. Returns `true` when none are left.
    pub fn lose_life(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }

    pub fn is_final_level(&self) -> bool {
        self.level >= self.level_count
    }

    pub fn level_cleared(&self) -> bool {
        self.remaining_items == 0
    }

    /// Count one tick. Returns `true` once the time budget is spent.
    pub fn tick_clock(&mut self) -> bool {
        self.elapsed_ticks += 1;
        self.elapsed_ticks >= self.time_budget_ticks
    }
}

//! Data-driven game balance
//!
//! Every gameplay number the simulation uses, loadable from JSON so levels can
//! be rebalanced without a rebuild. Missing fields fall back to the defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_RATE_HZ;

/// Environment variable naming an alternate tuning file
pub const TUNING_ENV: &str = "BOUNCE_TUNING";
/// Default tuning file location
pub const DEFAULT_TUNING_PATH: &str = "config/tuning.json";

/// Patrol parameters for the level enemy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    pub start_x: f32,
    pub y: f32,
    pub speed: f32,
    pub left_bound: f32,
    pub right_bound: f32,
    /// Half the enemy's square size, used for contact tests
    pub half_size: f32,
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            start_x: 300.0,
            y: 300.0,
            speed: 2.0,
            left_bound: 200.0,
            right_bound: 600.0,
            half_size: 20.0,
        }
    }
}

/// Gameplay balance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Added to vertical velocity every airborne tick (negative pulls down)
    pub gravity: f32,
    /// Vertical velocity set by a jump
    pub jump_impulse: f32,
    /// Pixels moved per left/right key press
    pub move_step: f32,
    pub ball_radius: f32,
    pub starting_lives: u8,
    /// Ticks a run may last before it is lost
    pub time_budget_ticks: u64,
    /// Ticks a jump press stays pending while waiting for ground contact
    pub jump_buffer_ticks: u32,
    /// How far below the map's bottom edge the ball may drop before it is lost
    pub fall_margin: f32,
    /// Ball position used when a map has no spawn marker
    pub default_spawn: (f32, f32),
    pub enemy: EnemyTuning,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: -0.2,
            jump_impulse: 8.0,
            move_step: 10.0,
            ball_radius: 20.0,
            starting_lives: 3,
            time_budget_ticks: 5 * 60 * TICK_RATE_HZ as u64,
            jump_buffer_ticks: 10,
            fall_margin: 200.0,
            default_spawn: (100.0, 300.0),
            enemy: EnemyTuning::default(),
        }
    }
}

impl Tuning {
    /// Load tuning from `BOUNCE_TUNING` or the default path.
    pub fn load() -> Self {
        let path = std::env::var(TUNING_ENV).unwrap_or_else(|_| DEFAULT_TUNING_PATH.to_string());
        Self::load_from(Path::new(&path))
    }

    /// Load tuning from a file. Falls back to defaults if the file is missing
    /// or unparseable.
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str::<Tuning>(&content) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(e) => {
                    log::warn!("Failed to parse {}: {e}, using defaults", path.display());
                    Tuning::default()
                }
            },
            Err(_) => Tuning::default(),
        }
    }

    /// Seconds of play left for a given elapsed tick count
    pub fn seconds_left(&self, elapsed_ticks: u64) -> u64 {
        self.time_budget_ticks.saturating_sub(elapsed_ticks) / TICK_RATE_HZ as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_budget_is_five_minutes() {
        let tuning = Tuning::default();
        assert_eq!(tuning.time_budget_ticks, 18_000);
        assert_eq!(tuning.seconds_left(0), 300);
        assert_eq!(tuning.seconds_left(17_999), 0);
        assert_eq!(tuning.seconds_left(20_000), 0);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "gravity": -0.5, "enemy": {{ "speed": 4.0 }} }}"#).unwrap();

        let tuning = Tuning::load_from(file.path());
        assert_eq!(tuning.gravity, -0.5);
        assert_eq!(tuning.enemy.speed, 4.0);
        assert_eq!(tuning.enemy.left_bound, 200.0);
        assert_eq!(tuning.jump_impulse, 8.0);
    }

    #[test]
    fn test_garbage_falls_back() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert_eq!(Tuning::load_from(file.path()), Tuning::default());
    }

    #[test]
    fn test_missing_file_falls_back() {
        let tuning = Tuning::load_from(Path::new("/definitely/not/here.json"));
        assert_eq!(tuning, Tuning::default());
    }
}

//! Per-playthrough state
//!
//! Everything a run mutates lives in one `Session`. The state machine creates
//! a fresh one for every new game and drops it on reset.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::Ball;
use super::camera::Camera;
use super::enemy::Enemy;
use super::levels::LevelSource;
use super::progress::{LossReason, Progress};
use super::tilemap::TileMap;
use crate::error::MapLoadError;
use crate::tuning::Tuning;

/// Things that happened during a tick, for sound and logging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    ItemCollected { reward: u32 },
    Jumped,
    /// Enemy contact or fall; `lives_left` after the hit
    PlayerHit { lives_left: u8 },
    LevelAdvanced { level: u32 },
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunEnd {
    Victory,
    Defeat(LossReason),
}

/// Complete state of one playthrough
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub map: TileMap,
    pub ball: Ball,
    pub enemy: Enemy,
    pub camera: Camera,
    pub progress: Progress,
    /// Where the ball respawns on this level
    pub start_pos: Vec2,
}

impl Session {
    /// Start a new run at `level`
    pub fn new(
        levels: &dyn LevelSource,
        level: u32,
        tuning: &Tuning,
    ) -> Result<Self, MapLoadError> {
        let progress = Progress::new(
            level,
            levels.level_count(),
            tuning.starting_lives,
            tuning.time_budget_ticks,
        );
        let map = levels.load(progress.level)?;
        let start_pos = spawn_point(&map, tuning);

        let mut session = Self {
            ball: Ball::new(start_pos, tuning.ball_radius),
            enemy: Enemy::new(&tuning.enemy),
            camera: Camera::default(),
            progress,
            start_pos,
            map,
        };
        session.progress.remaining_items = session.map.remaining_items();
        log::info!("Run started at level {}", session.progress.level);
        Ok(session)
    }

    /// Swap in the map for the next level, keeping score, lives and clock.
    pub fn advance_level(
        &mut self,
        levels: &dyn LevelSource,
        tuning: &Tuning,
    ) -> Result<(), MapLoadError> {
        let next = self.progress.level + 1;
        let map = levels.load(next)?;
        self.install_map(map, tuning);
        self.progress.level = next;
        log::info!("Advanced to level {next}");
        Ok(())
    }

    fn install_map(&mut self, map: TileMap, tuning: &Tuning) {
        self.start_pos = spawn_point(&map, tuning);
        self.map = map;
        self.progress.remaining_items = self.map.remaining_items();
        self.ball.respawn(self.start_pos);
        self.enemy = Enemy::new(&tuning.enemy);
        self.camera.reset();
    }

    /// Put the ball back at the level start with zero velocity
    pub fn respawn_ball(&mut self) {
        self.ball.respawn(self.start_pos);
    }

    /// Ball has dropped clear of the map
    pub fn ball_fell_out(&self, margin: f32) -> bool {
        let map_bottom = crate::cell_origin(self.map.rows() as i32 - 1, 0).y;
        self.ball.pos.y + self.ball.radius < map_bottom - margin
    }
}

fn spawn_point(map: &TileMap, tuning: &Tuning) -> Vec2 {
    map.spawn().unwrap_or_else(|| {
        log::warn!("Map has no spawn marker, using default spawn");
        Vec2::from(tuning.default_spawn)
    })
}

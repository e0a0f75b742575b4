//! The player's ball
//!
//! Step collision model: a vertical move that would overlap a solid tile is
//! not taken at all, velocity drops to zero and the ball counts as grounded,
//! whichever face was hit. Horizontal moves are all-or-nothing.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::overlaps_solid;
use super::tilemap::TileMap;

/// The player-controlled ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Centre in world space (y up)
    pub pos: Vec2,
    /// Vertical velocity in pixels per tick
    pub vel_y: f32,
    pub radius: f32,
    /// Downward motion was arrested by a solid tile on the last tick
    pub grounded: bool,
    /// Ticks left on a pending jump request (0 = none)
    pub jump_pending: u32,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel_y: 0.0,
            radius,
            grounded: false,
            jump_pending: 0,
        }
    }

    fn half_extent(&self) -> Vec2 {
        Vec2::splat(self.radius)
    }

    /// Place the ball at `pos` at rest
    pub fn respawn(&mut self, pos: Vec2) {
        self.pos = pos;
        self.vel_y = 0.0;
        self.grounded = false;
        self.jump_pending = 0;
    }

    /// Apply one tick of vertical motion.
    ///
    /// Returns `true` if the move was blocked.
    pub fn integrate_vertical(&mut self, map: &TileMap, gravity: f32) -> bool {
        let candidate = Vec2::new(self.pos.x, self.pos.y + self.vel_y);
        if overlaps_solid(map, candidate, self.half_extent()) {
            self.vel_y = 0.0;
            self.grounded = true;
            true
        } else {
            self.pos = candidate;
            self.vel_y += gravity;
            self.grounded = false;
            false
        }
    }

    /// Try to shift the ball horizontally by `dx`. The move is taken whole or
    /// not at all.
    pub fn try_move_horizontal(&mut self, map: &TileMap, dx: f32) -> bool {
        let candidate = Vec2::new(self.pos.x + dx, self.pos.y);
        if overlaps_solid(map, candidate, self.half_extent()) {
            return false;
        }
        self.pos = candidate;
        true
    }

    /// Register a jump key press; it stays pending for `buffer_ticks` ticks.
    pub fn request_jump(&mut self, buffer_ticks: u32) {
        self.jump_pending = buffer_ticks.max(1);
    }

    /// Fire a pending jump if grounded. Returns `true` if the ball jumped.
    pub fn try_jump(&mut self, impulse: f32) -> bool {
        if self.jump_pending == 0 {
            return false;
        }
        if self.grounded {
            self.vel_y = impulse;
            self.grounded = false;
            self.jump_pending = 0;
            return true;
        }
        self.jump_pending -= 1;
        false
    }
}

//! Bounce Classic - A tile-based side-scrolling ball platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (tile map, physics, enemy, progress)
//! - `game`: Mode state machine and per-mode dispatch table
//! - `scheduler`: Fixed-period tick source
//! - `render`: Draw collaborator contract and per-mode render strategies
//! - `audio`: Fire-and-forget sound collaborator
//! - `highscores` / `settings` / `tuning`: Persistence and data-driven balance

pub mod audio;
pub mod error;
pub mod game;
pub mod highscores;
pub mod input;
pub mod render;
pub mod scheduler;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use error::{AssetLoadError, MapLoadError, PersistenceError};
pub use game::{Flow, Game, Mode};
pub use highscores::HighScore;
pub use settings::Settings;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Window size in pixels
    pub const SCREEN_WIDTH: f32 = 1000.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Edge length of one map tile in pixels
    pub const BLOCK_SIZE: f32 = 50.0;
    /// Map dimension limits (extra rows/columns are dropped)
    pub const MAX_ROWS: usize = 20;
    pub const MAX_COLS: usize = 100;

    /// Score awarded per collectible
    pub const ITEM_REWARD: u32 = 10;
    /// Extra reach beyond the ball radius when picking up an item
    pub const PICKUP_TOLERANCE: f32 = 10.0;

    /// Longest player name accepted on the entry screen
    pub const MAX_NAME_LENGTH: usize = 49;

    /// Levels shipped in `maps/`
    pub const TOTAL_LEVELS: u32 = 4;

    /// Fixed simulation rate
    pub const TICK_RATE_HZ: u32 = 60;
    /// Maximum ticks run for one wall-clock update to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}

use consts::{BLOCK_SIZE, SCREEN_HEIGHT};

// World space is y-up with the top edge of map row 0 at SCREEN_HEIGHT.
// Map rows count downwards from there; mouse input counts downwards from the
// top of the window. Every conversion between the three goes through here.

/// Cell (row, col) containing a world position. May be outside the grid.
#[inline]
pub fn world_to_cell(pos: Vec2) -> (i32, i32) {
    let row = ((SCREEN_HEIGHT - pos.y) / BLOCK_SIZE).floor() as i32;
    let col = (pos.x / BLOCK_SIZE).floor() as i32;
    (row, col)
}

/// Bottom-left corner of a cell in world space
#[inline]
pub fn cell_origin(row: i32, col: i32) -> Vec2 {
    Vec2::new(
        col as f32 * BLOCK_SIZE,
        SCREEN_HEIGHT - (row + 1) as f32 * BLOCK_SIZE,
    )
}

/// Centre of a cell in world space
#[inline]
pub fn cell_center(row: i32, col: i32) -> Vec2 {
    cell_origin(row, col) + Vec2::splat(BLOCK_SIZE / 2.0)
}

/// Project a world position onto the screen for a given camera offset
#[inline]
pub fn world_to_screen(pos: Vec2, camera_x: f32) -> Vec2 {
    Vec2::new(pos.x - camera_x, pos.y)
}

/// Convert a mouse position (y grows downwards) to UI space (y grows upwards)
#[inline]
pub fn mouse_to_ui(mx: f32, my: f32) -> Vec2 {
    Vec2::new(mx, SCREEN_HEIGHT - my)
}

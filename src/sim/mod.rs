//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - No randomness
//! - Stable iteration order (row-major over the grid)
//! - No rendering or platform dependencies

pub mod body;
pub mod camera;
pub mod collision;
pub mod enemy;
pub mod levels;
pub mod progress;
pub mod state;
pub mod tick;
pub mod tilemap;

pub use body::Ball;
pub use camera::Camera;
pub use collision::{boxes_overlap, overlaps_solid, within_reach};
pub use enemy::Enemy;
pub use levels::{InMemoryLevels, LevelSource, MapDirectory};
pub use progress::{LossReason, Progress};
pub use state::{GameEvent, RunEnd, Session};
pub use tick::{TickInput, TickReport, tick};
pub use tilemap::{Cell, TileMap};

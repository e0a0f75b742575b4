//! Box tests against the tile grid
//!
//! The ball is treated as an axis-aligned box with half extent = radius, both
//! for vertical resolution and for gating horizontal moves.

use glam::Vec2;

use super::tilemap::{Cell, TileMap};
use crate::consts::BLOCK_SIZE;
use crate::{cell_origin, world_to_cell};

/// True if the box centred at `center` intersects any solid tile.
/// Touching edges do not count as overlap.
pub fn overlaps_solid(map: &TileMap, center: Vec2, half_extent: Vec2) -> bool {
    let min = center - half_extent;
    let max = center + half_extent;

    // Tile range covering the box (rows grow downwards)
    let (top, left) = world_to_cell(Vec2::new(min.x, max.y));
    let (bottom, right) = world_to_cell(Vec2::new(max.x, min.y));

    for row in top..=bottom {
        for col in left..=right {
            if map.cell(row, col) != Cell::Solid {
                continue;
            }
            let tile_min = cell_origin(row, col);
            let tile_max = tile_min + Vec2::splat(BLOCK_SIZE);
            if boxes_overlap(min, max, tile_min, tile_max) {
                return true;
            }
        }
    }
    false
}

/// Strict AABB intersection
#[inline]
pub fn boxes_overlap(a_min: Vec2, a_max: Vec2, b_min: Vec2, b_max: Vec2) -> bool {
    a_max.x > b_min.x && a_min.x < b_max.x && a_max.y > b_min.y && a_min.y < b_max.y
}

/// Contact test between two centred squares: both axis distances must be
/// below `reach`.
#[inline]
pub fn within_reach(a: Vec2, b: Vec2, reach: f32) -> bool {
    let d = (a - b).abs();
    d.x < reach && d.y < reach
}

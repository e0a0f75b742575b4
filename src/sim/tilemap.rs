//! Level grid parsed from text
//!
//! `#` is a solid block, `*` a collectible, `@` the spawn point. Anything else
//! is open space. Rows beyond `MAX_ROWS` and columns beyond `MAX_COLS` are
//! dropped without error.

use std::io::BufRead;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BLOCK_SIZE, ITEM_REWARD, MAX_COLS, MAX_ROWS, PICKUP_TOLERANCE};
use crate::error::MapLoadError;
use crate::{cell_center, world_to_cell};

const SOLID: u8 = b'#';
const COLLECTIBLE: u8 = b'*';
const SPAWN: u8 = b'@';

/// Contents of one map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Solid,
    Collectible,
}

impl Cell {
    fn from_byte(b: u8) -> Self {
        match b {
            SOLID => Cell::Solid,
            COLLECTIBLE => Cell::Collectible,
            _ => Cell::Empty,
        }
    }
}

/// A parsed level grid
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TileMap {
    rows: usize,
    cols: usize,
    /// Cells stored row-major (row * cols + col), row 0 at the top
    cells: Vec<Cell>,
    /// Cached count of `Cell::Collectible` cells
    remaining: usize,
    /// Centre of the spawn cell, if the source had one
    spawn: Option<Vec2>,
}

impl TileMap {
    /// Read a map from a line source. The source is taken as raw bytes, so
    /// text that is not UTF-8 still loads.
    pub fn load<R: BufRead>(source: R) -> Result<Self, MapLoadError> {
        let mut lines = Vec::with_capacity(MAX_ROWS);
        for line in source.split(b'\n').take(MAX_ROWS) {
            lines.push(line?);
        }
        Ok(Self::from_lines(lines.iter().map(Vec::as_slice)))
    }

    /// Parse a map held in memory.
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.lines().take(MAX_ROWS).map(str::as_bytes))
    }

    fn from_lines<'a>(lines: impl Iterator<Item = &'a [u8]>) -> Self {
        let rows: Vec<&[u8]> = lines
            .map(|line| {
                let line = line.strip_suffix(b"\r").unwrap_or(line);
                &line[..line.len().min(MAX_COLS)]
            })
            .collect();

        let cols = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut map = Self {
            rows: rows.len(),
            cols,
            cells: vec![Cell::Empty; rows.len() * cols],
            remaining: 0,
            spawn: None,
        };

        for (r, row) in rows.iter().enumerate() {
            for (c, &byte) in row.iter().enumerate() {
                if byte == SPAWN {
                    // First marker wins
                    if map.spawn.is_none() {
                        map.spawn = Some(cell_center(r as i32, c as i32));
                    } else {
                        log::warn!("Ignoring extra spawn marker at row {r}, col {c}");
                    }
                    continue;
                }
                let cell = Cell::from_byte(byte);
                if cell == Cell::Collectible {
                    map.remaining += 1;
                }
                map.cells[r * cols + c] = cell;
            }
        }

        map
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Map width in world pixels
    pub fn width_px(&self) -> f32 {
        self.cols as f32 * BLOCK_SIZE
    }

    /// Spawn position from the `@` marker
    pub fn spawn(&self) -> Option<Vec2> {
        self.spawn
    }

    /// Cell at (row, col); anything outside the grid is empty
    pub fn cell(&self, row: i32, col: i32) -> Cell {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return Cell::Empty;
        }
        self.cells[row as usize * self.cols + col as usize]
    }

    /// Whether the cell under a world position is solid
    pub fn is_solid(&self, x: f32, y: f32) -> bool {
        let (row, col) = world_to_cell(Vec2::new(x, y));
        self.cell(row, col) == Cell::Solid
    }

    /// Pick up the first collectible (row-major) whose centre lies within
    /// reach of `pos`. Returns the reward, consuming at most one cell.
    pub fn collect_at(&mut self, x: f32, y: f32, radius: f32) -> Option<u32> {
        let pos = Vec2::new(x, y);
        let reach = radius + PICKUP_TOLERANCE;

        // Only cells whose centre could be within reach
        let (top, left) = world_to_cell(pos + Vec2::new(-reach, reach));
        let (bottom, right) = world_to_cell(pos + Vec2::new(reach, -reach));

        for row in top.max(0)..=bottom.min(self.rows as i32 - 1) {
            for col in left.max(0)..=right.min(self.cols as i32 - 1) {
                if self.cell(row, col) != Cell::Collectible {
                    continue;
                }
                if cell_center(row, col).distance(pos) < reach {
                    self.cells[row as usize * self.cols + col as usize] = Cell::Empty;
                    self.remaining -= 1;
                    return Some(ITEM_REWARD);
                }
            }
        }
        None
    }

    /// Collectibles still on the map
    pub fn remaining_items(&self) -> usize {
        self.remaining
    }

    /// Iterate non-empty cells as (row, col, cell)
    pub fn occupied(&self) -> impl Iterator<Item = (i32, i32, Cell)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, &cell)| {
            (cell != Cell::Empty).then(|| ((i / self.cols) as i32, (i % self.cols) as i32, cell))
        })
    }
}

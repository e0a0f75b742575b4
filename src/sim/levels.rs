//! Where level maps come from

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use super::tilemap::TileMap;
use crate::consts::TOTAL_LEVELS;
use crate::error::MapLoadError;

/// Supplies the map for each 1-based level index
pub trait LevelSource {
    fn level_count(&self) -> u32;
    fn load(&self, level: u32) -> Result<TileMap, MapLoadError>;
}

/// Maps stored as `<root>/level<N>.txt`
#[derive(Debug, Clone)]
pub struct MapDirectory {
    root: PathBuf,
    count: u32,
}

impl MapDirectory {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            count: TOTAL_LEVELS,
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    pub fn path_for(&self, level: u32) -> PathBuf {
        self.root.join(format!("level{level}.txt"))
    }
}

impl LevelSource for MapDirectory {
    fn level_count(&self) -> u32 {
        self.count
    }

    fn load(&self, level: u32) -> Result<TileMap, MapLoadError> {
        let path = self.path_for(level);
        let file = File::open(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => MapLoadError::NotFound { level, path: path.clone() },
            _ => MapLoadError::Io(e),
        })?;
        let map = TileMap::load(BufReader::new(file))?;
        log::info!(
            "Loaded {} ({}x{}, {} items)",
            path.display(),
            map.cols(),
            map.rows(),
            map.remaining_items()
        );
        Ok(map)
    }
}

/// Maps held in memory, level 1 first
#[derive(Debug, Clone, Default)]
pub struct InMemoryLevels {
    maps: Vec<String>,
}

impl InMemoryLevels {
    pub fn new<S: Into<String>>(maps: impl IntoIterator<Item = S>) -> Self {
        Self {
            maps: maps.into_iter().map(Into::into).collect(),
        }
    }
}

impl LevelSource for InMemoryLevels {
    fn level_count(&self) -> u32 {
        self.maps.len() as u32
    }

    fn load(&self, level: u32) -> Result<TileMap, MapLoadError> {
        level
            .checked_sub(1)
            .and_then(|i| self.maps.get(i as usize))
            .map(|text| TileMap::parse(text))
            .ok_or_else(|| MapLoadError::NotFound {
                level,
                path: PathBuf::from(format!("<memory>/level{level}")),
            })
    }
}

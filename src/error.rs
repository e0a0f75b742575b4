//! Recoverable error types
//!
//! Nothing here is fatal: callers log and fall back.

use std::path::PathBuf;

/// A level map could not be read
#[derive(Debug)]
pub enum MapLoadError {
    /// No map exists for the requested level
    NotFound { level: u32, path: PathBuf },
    /// The source existed but reading it failed
    Io(std::io::Error),
}

impl std::fmt::Display for MapLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { level, path } => {
                write!(f, "no map for level {level} at {}", path.display())
            }
            Self::Io(e) => write!(f, "failed to read map: {e}"),
        }
    }
}

impl std::error::Error for MapLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<std::io::Error> for MapLoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// High score or settings file could not be read or written
#[derive(Debug)]
pub enum PersistenceError {
    Io(std::io::Error),
    Parse(String),
    Serialize(serde_json::Error),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "{e}"),
            Self::Parse(m) => write!(f, "malformed contents: {m}"),
            Self::Serialize(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<std::io::Error> for PersistenceError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e)
    }
}

/// An image or sound asset was unavailable to a collaborator
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetLoadError {
    Missing(String),
}

impl std::fmt::Display for AssetLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Missing(name) => write!(f, "asset not found: {name}"),
        }
    }
}

impl std::error::Error for AssetLoadError {}

use thiserror::Error;

use crate::entry::EntryType;
use crate::generators::{Bias, GeneratorKind};

/// Everything the generation pipeline needs to know, validated up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MazeConfig {
    /// Logical maze width in cells (physical grid width for Wilson).
    pub width: u16,
    /// Logical maze height in cells (physical grid height for Wilson).
    pub height: u16,
    pub entry_type: EntryType,
    pub bias: Bias,
    pub generator: GeneratorKind,
    /// How many extra walls to knock out after the spanning tree is carved.
    pub remove_walls: u32,
    /// Retry budget for wall removal attempts.
    pub max_walls_remove: u32,
}

impl Default for MazeConfig {
    fn default() -> Self {
        MazeConfig {
            width: 20,
            height: 20,
            entry_type: EntryType::default(),
            bias: Bias::default(),
            generator: GeneratorKind::default(),
            remove_walls: 0,
            max_walls_remove: 300,
        }
    }
}

impl MazeConfig {
    /// Rejects configurations no generator can work with. Called before any
    /// generation work so an invalid config never produces partial output.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

/// Configuration mistakes reported before generation starts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("maze dimensions must be positive, got {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },
    #[error("unknown entry type {0:?}, expected diagonal, horizontal or vertical")]
    UnknownEntryType(String),
    #[error("unknown bias {0:?}, expected none, horizontal or vertical")]
    UnknownBias(String),
    #[error("unknown generator {0:?}, expected backtracker or wilson")]
    UnknownGenerator(String),
}

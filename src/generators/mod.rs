use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

mod backtrack;
mod wilson;

use crate::config::{ConfigError, MazeConfig};
use crate::maze::{CellGrid, WallMatrix};

pub use backtrack::biased_backtracker;
pub use wilson::wilson;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Which spanning-tree algorithm carves the maze.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorKind {
    /// Iterative backtracker with optional directional bias.
    #[default]
    Backtracker,
    /// Wilson's loop-erased random walk, statistically unbiased.
    Wilson,
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorKind::Backtracker => write!(f, "Biased Iterative Backtracker"),
            GeneratorKind::Wilson => write!(f, "Wilson's Algorithm (Loop-Erased Random Walk)"),
        }
    }
}

impl FromStr for GeneratorKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "backtracker" => Ok(GeneratorKind::Backtracker),
            "wilson" => Ok(GeneratorKind::Wilson),
            other => Err(ConfigError::UnknownGenerator(other.to_string())),
        }
    }
}

/// Directional bias applied by the backtracker to elongate corridors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Bias {
    #[default]
    None,
    Horizontal,
    Vertical,
}

impl fmt::Display for Bias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Bias::None => "none",
            Bias::Horizontal => "horizontal",
            Bias::Vertical => "vertical",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Bias {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Bias::None),
            "horizontal" => Ok(Bias::Horizontal),
            "vertical" => Ok(Bias::Vertical),
            other => Err(ConfigError::UnknownBias(other.to_string())),
        }
    }
}

/// Runs the configured spanning-tree algorithm and returns the physical
/// wall matrix it produced.
///
/// The backtracker carves a logical lattice and expands it afterwards; the
/// Wilson variant writes the physical matrix directly. Both outputs feed the
/// wall remover, planner, and serializer uniformly.
pub fn generate(config: &MazeConfig, rng: &mut StdRng) -> WallMatrix {
    tracing::info!(
        generator = %config.generator,
        width = config.width,
        height = config.height,
        bias = %config.bias,
        "generating maze"
    );
    match config.generator {
        GeneratorKind::Backtracker => {
            let mut grid = CellGrid::new(config.width, config.height);
            biased_backtracker(&mut grid, config.bias, rng);
            WallMatrix::from_grid(&grid)
        }
        GeneratorKind::Wilson => wilson(config.width, config.height, rng),
    }
}

/// Pick one element of `candidates` uniformly at random.
pub(crate) fn pick<T: Copy>(candidates: &[T], rng: &mut StdRng) -> T {
    candidates[rng.random_range(0..candidates.len())]
}

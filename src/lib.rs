//! Maze generation engine.
//!
//! Generates perfect (acyclic, fully connected) mazes over a rectangular
//! grid with one of two randomized spanning-tree algorithms, optionally
//! introduces cycles by removing walls under local-connectivity checks, and
//! serializes the result as a plain-text character grid (`X` = wall,
//! `.` = open) with entry/exit gates punched through the boundary.
//!
//! ```no_run
//! use mazegen::{MazeConfig, generate};
//!
//! let maze = generate(&MazeConfig::default(), Some(42)).unwrap();
//! println!("{maze}");
//! ```

pub mod config;
pub mod entry;
pub mod generators;
pub mod maze;
pub mod walls;

pub use config::{ConfigError, MazeConfig};
pub use entry::{EntryNodes, EntryType};
pub use generators::{Bias, GeneratorKind};
pub use maze::{Maze, WallMatrix};

/// Runs the full generation pipeline: carve a spanning tree, plan the entry
/// gates, then knock out any requested extra walls.
///
/// Deterministic for a given `seed`; with `None` the generator is seeded
/// from OS entropy. Fails fast on an invalid configuration without
/// producing partial output.
pub fn generate(config: &MazeConfig, seed: Option<u64>) -> Result<Maze, ConfigError> {
    config.validate()?;

    let mut rng = generators::get_rng(seed);
    let mut matrix = generators::generate(config, &mut rng);
    let entry = EntryNodes::plan(matrix.cols(), matrix.rows(), config.entry_type);
    let removed = walls::remove_walls(
        &mut matrix,
        config.remove_walls,
        config.max_walls_remove,
        &mut rng,
    );

    tracing::info!(
        cols = matrix.cols(),
        rows = matrix.rows(),
        walls_removed = removed,
        "maze ready"
    );
    Ok(Maze::new(matrix, entry, removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    fn config(width: u16, height: u16) -> MazeConfig {
        MazeConfig {
            width,
            height,
            ..MazeConfig::default()
        }
    }

    /// Open cells reachable from `start` in the serialized grid.
    fn reachable(lines: &[&str], start: (usize, usize)) -> usize {
        let grid: Vec<Vec<bool>> = lines
            .iter()
            .map(|l| l.chars().map(|c| c == '.').collect())
            .collect();
        let (cols, rows) = (grid[0].len(), grid.len());
        let mut seen = vec![false; cols * rows];
        let mut queue = VecDeque::from([start]);
        seen[start.1 * cols + start.0] = true;
        let mut count = 1;
        while let Some((x, y)) = queue.pop_front() {
            let mut push = |nx: usize, ny: usize, queue: &mut VecDeque<(usize, usize)>| {
                if grid[ny][nx] && !seen[ny * cols + nx] {
                    seen[ny * cols + nx] = true;
                    count += 1;
                    queue.push_back((nx, ny));
                }
            };
            if y > 0 {
                push(x, y - 1, &mut queue);
            }
            if y + 1 < rows {
                push(x, y + 1, &mut queue);
            }
            if x > 0 {
                push(x - 1, y, &mut queue);
            }
            if x + 1 < cols {
                push(x + 1, y, &mut queue);
            }
        }
        count
    }

    #[test]
    fn test_perfect_4x4_scenario() {
        let maze = generate(&config(4, 4), Some(42)).unwrap();
        let text = maze.to_string();
        let lines: Vec<&str> = text.lines().collect();

        // 9x9 character grid
        assert_eq!(lines.len(), 9);
        assert!(lines.iter().all(|l| l.chars().count() == 9));

        // Spanning tree: 15 open adjacencies, no walls removed
        assert_eq!(maze.walls_removed(), 0);
        assert_eq!(maze.matrix().open_adjacencies(), 15);

        // Both gates are open and every open cell is reachable from the
        // start gate
        let start = maze.entry_nodes().start.gate;
        let end = maze.entry_nodes().end.gate;
        assert_eq!(lines[start.y].chars().nth(start.x), Some('.'));
        assert_eq!(lines[end.y].chars().nth(end.x), Some('.'));
        let open_total = text.chars().filter(|&c| c == '.').count();
        assert_eq!(reachable(&lines, (start.x, start.y)), open_total);
    }

    #[test]
    fn test_wall_removal_preserves_connectivity() {
        let removal = MazeConfig {
            remove_walls: 5,
            max_walls_remove: 300,
            ..config(8, 8)
        };
        let maze = generate(&removal, Some(7)).unwrap();

        // Best-effort, but an 8x8 maze has plenty of removable walls
        let removed = maze.walls_removed();
        assert!(removed >= 1 && removed <= 5);

        // Every removal adds exactly one adjacency, i.e. one cycle
        assert_eq!(
            maze.matrix().open_adjacencies(),
            8 * 8 - 1 + removed as usize
        );

        // Still fully connected
        let text = maze.to_string();
        let lines: Vec<&str> = text.lines().collect();
        let start = maze.entry_nodes().start.gate;
        let open_total = text.chars().filter(|&c| c == '.').count();
        assert_eq!(reachable(&lines, (start.x, start.y)), open_total);
    }

    #[test]
    fn test_wilson_scenario() {
        let wilson = MazeConfig {
            generator: GeneratorKind::Wilson,
            width: 5,
            height: 5,
            ..MazeConfig::default()
        };
        let maze = generate(&wilson, Some(3)).unwrap();
        let text = maze.to_string();
        let lines: Vec<&str> = text.lines().collect();

        // Odd-adjusted physical dimensions, not 2w+1
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.chars().count() == 5));

        // Every even-even cell is in-tree and the whole thing is connected
        for y in (0..5).step_by(2) {
            for x in (0..5).step_by(2) {
                assert!(!maze.matrix().is_wall(x, y));
            }
        }
        let open_total = text.chars().filter(|&c| c == '.').count();
        assert_eq!(reachable(&lines, (0, 0)), open_total);
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        assert!(matches!(
            generate(&config(0, 5), Some(1)),
            Err(ConfigError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            generate(&config(5, 0), Some(1)),
            Err(ConfigError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_deterministic_output_under_seed() {
        let a = generate(&config(12, 7), Some(99)).unwrap().to_string();
        let b = generate(&config(12, 7), Some(99)).unwrap().to_string();
        assert_eq!(a, b);
    }

    #[test]
    fn test_round_trip_through_serialization() {
        let maze = generate(&config(6, 5), Some(13)).unwrap();
        let parsed: WallMatrix = maze.to_string().parse().unwrap();
        for y in 0..maze.matrix().rows() {
            for x in 0..maze.matrix().cols() {
                if maze.entry_nodes().is_gate(x, y) {
                    assert!(!parsed.is_wall(x, y));
                } else {
                    assert_eq!(parsed.is_wall(x, y), maze.matrix().is_wall(x, y));
                }
            }
        }
    }

    #[test]
    fn test_horizontal_entry_gates_on_side_borders() {
        let horizontal = MazeConfig {
            entry_type: EntryType::Horizontal,
            ..config(6, 6)
        };
        let maze = generate(&horizontal, Some(11)).unwrap();
        let nodes = maze.entry_nodes();
        assert_eq!(nodes.start.gate.x, 0);
        assert_eq!(nodes.end.gate.x, maze.matrix().cols() - 1);
        assert_eq!(nodes.start.gate.y, nodes.end.gate.y);
    }
}

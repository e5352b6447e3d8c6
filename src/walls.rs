use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::maze::WallMatrix;

/// Knocks out up to `target` interior walls to introduce cycles.
///
/// Each attempt picks a random interior row, gathers its remaining walls in
/// random order, and removes the first one whose local pattern allows it.
/// The base structure is a spanning tree, so every removal merges two
/// already-connected regions; the legality checks only exist to avoid
/// leaving isolated wall stubs behind. Attempts are bounded by `budget`;
/// running out is not an error. Returns the number of walls removed.
pub fn remove_walls(matrix: &mut WallMatrix, target: u32, budget: u32, rng: &mut StdRng) -> u32 {
    let rows = matrix.rows();
    let cols = matrix.cols();
    if target == 0 || rows < 3 || cols < 3 {
        return 0;
    }
    let mut removed = 0;
    let mut tries = 0;

    while tries < budget && removed < target {
        tries += 1;

        let y = rng.random_range(1..rows - 1);
        let mut candidates: Vec<usize> = (1..cols - 1).filter(|&x| matrix.is_wall(x, y)).collect();
        candidates.shuffle(rng);

        for x in candidates {
            if try_remove(matrix, x, y) {
                removed += 1;
                tracing::debug!(x, y, removed, "removed wall");
                break;
            }
        }
    }

    if removed < target {
        tracing::info!(
            removed,
            target,
            budget,
            "wall removal budget exhausted before reaching target"
        );
    }
    removed
}

/// Applies the local legality check to the wall at `(x, y)` and removes it
/// when the check passes.
///
/// A wall segment flanked by collinear walls on both sides is always safe to
/// drop. When only one side continues, the segment may still go if a
/// diagonal neighbor on the discontinued side holds a wall; otherwise the
/// removal would expose a free-standing stub. Probes past the matrix edge
/// count as border walls. Junctions and cell interiors are never removed.
fn try_remove(matrix: &mut WallMatrix, x: usize, y: usize) -> bool {
    if !matrix.is_wall(x, y) {
        return false;
    }

    let rows = matrix.rows();
    let cols = matrix.cols();
    let even_row = y % 2 == 0;
    let even_col = x % 2 == 0;

    if !even_row && even_col {
        // Vertical segment between two horizontally adjacent cells
        let has_top = y >= 3 && matrix.is_wall(x, y - 2);
        let has_bottom = y + 2 < rows && matrix.is_wall(x, y + 2);

        if has_top && has_bottom {
            matrix.carve(x, y);
            return true;
        }
        if !has_top && has_bottom && (matrix.is_wall(x - 1, y - 1) || matrix.is_wall(x + 1, y - 1))
        {
            matrix.carve(x, y);
            return true;
        }
        if has_top && !has_bottom && (matrix.is_wall(x - 1, y + 1) || matrix.is_wall(x + 1, y + 1))
        {
            matrix.carve(x, y);
            return true;
        }
    } else if even_row && !even_col {
        // Horizontal segment between two vertically adjacent cells
        let has_left = x < 2 || matrix.is_wall(x - 2, y);
        let has_right = x + 2 >= cols || matrix.is_wall(x + 2, y);

        if has_left && has_right {
            matrix.carve(x, y);
            return true;
        }
        if !has_left && has_right && (matrix.is_wall(x - 1, y - 1) || matrix.is_wall(x - 1, y + 1))
        {
            matrix.carve(x, y);
            return true;
        }
        if has_left && !has_right && (matrix.is_wall(x + 1, y - 1) || matrix.is_wall(x + 1, y + 1))
        {
            matrix.carve(x, y);
            return true;
        }
    }

    false
}

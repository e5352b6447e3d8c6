use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::pick;
use crate::maze::WallMatrix;

/// Carves a uniformly random spanning tree with Wilson's algorithm.
///
/// Unlike the backtracker, this variant writes the physical matrix directly:
/// dimensions are forced odd, cells sit at even-even positions, and the
/// connectors between them open as walks commit. One random cell seeds the
/// tree; every other cell starts a loop-erased random walk that joins the
/// tree where it first touches it. Loop erasure (truncating the walk back to
/// an earlier self-intersection) is what makes every spanning tree equally
/// likely.
///
/// The two default gate cells at `(1, 0)` and `(cols - 2, rows - 1)` are
/// force-opened before returning.
pub fn wilson(width: u16, height: u16, rng: &mut StdRng) -> WallMatrix {
    let cols = odd(width as usize);
    let rows = odd(height as usize);
    let mut matrix = WallMatrix::solid(cols, rows);

    let mut cells: Vec<(usize, usize)> = (0..rows)
        .step_by(2)
        .flat_map(|y| (0..cols).step_by(2).map(move |x| (x, y)))
        .collect();
    cells.shuffle(rng);

    // Seed the tree with one cell; everything else walks its way in
    let (x, y) = cells[0];
    matrix.carve(x, y);

    let mut walks = 0;
    for &start in &cells[1..] {
        if !matrix.is_wall(start.0, start.1) {
            continue;
        }
        random_walk(&mut matrix, start, rng);
        walks += 1;
    }

    // Default entry and exit for this variant; a single-column grid has no
    // connector slot to open
    if cols >= 3 {
        matrix.carve(1, 0);
        matrix.carve(cols - 2, rows - 1);
    }

    tracing::debug!(cols, rows, walks, "wilson finished");
    matrix
}

fn odd(n: usize) -> usize {
    if n % 2 == 0 { n + 1 } else { n }
}

/// Walks from `start` until the tree is reached, erasing any loop the walk
/// closes, then commits the surviving path and its connectors.
fn random_walk(matrix: &mut WallMatrix, start: (usize, usize), rng: &mut StdRng) {
    let mut path = vec![start];
    let mut position = start;

    loop {
        let next = pick(&step_candidates(matrix, position), rng);

        if let Some(earlier) = path.iter().position(|&c| c == next) {
            // The walk crossed itself: drop the whole loop
            path.truncate(earlier + 1);
            position = next;
            continue;
        }

        if !matrix.is_wall(next.0, next.1) {
            // Reached the tree: commit the path and the connectors between
            // consecutive steps
            for (k, &(x, y)) in path.iter().enumerate() {
                let (nx, ny) = if k + 1 < path.len() { path[k + 1] } else { next };
                matrix.carve(x, y);
                matrix.carve((x + nx) / 2, (y + ny) / 2);
            }
            return;
        }

        path.push(next);
        position = next;
    }
}

/// Cells two steps away in each cardinal direction, clipped to the grid.
fn step_candidates(matrix: &WallMatrix, position: (usize, usize)) -> Vec<(usize, usize)> {
    let (x, y) = position;
    let mut candidates = Vec::with_capacity(4);
    if y >= 2 {
        candidates.push((x, y - 2));
    }
    if y + 2 < matrix.rows() {
        candidates.push((x, y + 2));
    }
    if x >= 2 {
        candidates.push((x - 2, y));
    }
    if x + 2 < matrix.cols() {
        candidates.push((x + 2, y));
    }
    candidates
}

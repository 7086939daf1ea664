//! Recursive-backtracker maze generation.
//!
//! The grid is read at double spacing. Cells with two even coordinates are
//! *rooms*; the cells between them are walls that the carver may knock
//! through. A randomized depth-first walk over the rooms opens one wall per
//! newly visited room, which yields a spanning tree: exactly one simple
//! path between any two floor cells.

use std::collections::HashSet;

use labyrinth_core::{Maze, MazeError, Position};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};

/// Offsets from a room to its neighbouring rooms, in probe order.
const ROOM_STEPS: [(i32, i32); 4] = [(2, 0), (-2, 0), (0, 2), (0, -2)];

/// Number of rooms in a `width` x `height` grid.
pub fn room_count(width: i32, height: i32) -> usize {
    let rooms_along = |n: i32| (n.max(0) as usize).div_ceil(2);
    rooms_along(width).saturating_mul(rooms_along(height))
}

/// Row-major index of `p` in a grid `width` cells wide.
#[inline]
fn flat_index(width: usize, p: Position) -> usize {
    p.y as usize * width + p.x as usize
}

/// Maze generator driven by a caller-supplied random source.
pub struct MazeGen<R: Rng> {
    pub rng: R,
}

impl MazeGen<StdRng> {
    /// A generator over a `StdRng` seeded with `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MazeGen<R> {
    /// A generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Carve a `width` x `height` perfect maze.
    ///
    /// The start is the top-left corner and the end the bottom-right one.
    /// When both sides are even the end corner falls on a wall position
    /// that no room borders, so the cell to its left is opened as well.
    pub fn generate(&mut self, width: i32, height: i32) -> Result<Maze, MazeError> {
        if width < 2 || height < 2 {
            return Err(MazeError::InvalidDimensions { width, height });
        }

        let start = Position::ZERO;
        let end = Position::new(width - 1, height - 1);
        let expected = room_count(width, height);
        let in_bounds = |p: Position| p.x >= 0 && p.x < width && p.y >= 0 && p.y < height;
        let w = width as usize;
        let idx = |p: Position| flat_index(w, p);

        let mut floor = vec![false; w * height as usize];
        floor[idx(start)] = true;

        let mut visited: HashSet<Position> = HashSet::with_capacity(expected);
        visited.insert(start);
        let mut stack: Vec<Position> = Vec::new();
        let mut unvisited: Vec<Position> = Vec::with_capacity(ROOM_STEPS.len());
        let mut current = start;

        while visited.len() < expected {
            unvisited.clear();
            unvisited.extend(
                ROOM_STEPS
                    .iter()
                    .map(|&(dx, dy)| current.shift(dx, dy))
                    .filter(|&p| in_bounds(p) && !visited.contains(&p)),
            );

            if unvisited.is_empty() {
                // Dead end: backtrack.
                match stack.pop() {
                    Some(p) => current = p,
                    None => {
                        log::warn!(
                            "backtracker stalled at {current} after {} of {expected} rooms",
                            visited.len()
                        );
                        return Err(MazeError::GenerationInvariantViolated {
                            visited: visited.len(),
                            expected,
                        });
                    }
                }
                continue;
            }

            stack.push(current);
            let next = unvisited[self.rng.random_range(0..unvisited.len())];
            let wall = Position::new((current.x + next.x) / 2, (current.y + next.y) / 2);
            floor[idx(next)] = true;
            floor[idx(wall)] = true;
            visited.insert(next);
            current = next;
        }

        if width % 2 == 0 && height % 2 == 0 {
            floor[idx(end.shift(-1, 0))] = true;
        }
        floor[idx(end)] = true;

        log::debug!("carved {width}x{height} maze with {expected} rooms");
        Maze::with_passability(width, height, start, end, |p| floor[idx(p)])
    }
}

/// Generate a `width` x `height` maze.
///
/// With `seed` the layout is reproducible. Without one a seed is drawn from
/// the thread RNG. Either way the seed is logged at debug level.
pub fn generate(width: i32, height: i32, seed: Option<u64>) -> Result<Maze, MazeError> {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    log::debug!("generating {width}x{height} maze with seed {seed}");
    MazeGen::seeded(seed).generate(width, height)
}

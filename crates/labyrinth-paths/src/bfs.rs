//! Solvability probe.

use std::collections::VecDeque;

use labyrinth_core::{Maze, Neighbors};

/// Whether the maze's end can be reached from its start.
///
/// A breadth-first flood over passable cells with 4-directional adjacency.
/// It touches no cell bookkeeping, so it can run before or between searches.
/// An impassable start or end is never solvable.
pub fn is_solvable(maze: &Maze) -> bool {
    let start = maze.start();
    let end = maze.end();
    if !maze.is_passable(start) || !maze.is_passable(end) {
        return false;
    }

    let mut visited = vec![false; maze.cell_count()];
    let mut queue = VecDeque::new();
    let mut nb = Neighbors::new();

    visited[maze.start_index()] = true;
    queue.push_back(start);

    while let Some(p) = queue.pop_front() {
        if p == end {
            return true;
        }
        for &n in nb.cardinal(p, |q| maze.is_passable(q)) {
            let Some(ni) = maze.idx(n) else {
                continue;
            };
            if !visited[ni] {
                visited[ni] = true;
                queue.push_back(n);
            }
        }
    }

    false
}

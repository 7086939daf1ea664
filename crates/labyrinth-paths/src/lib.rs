//! Shortest paths through labyrinth mazes.
//!
//! This crate provides the search side of *labyrinth*:
//!
//! - **A\*** informed search ([`Strategy::AStar`])
//! - **Dijkstra** uniform-cost search ([`Strategy::Dijkstra`])
//! - **Heuristics**: Manhattan, Euclidean and Diagonal (octile) ([`Heuristic`])
//! - **Solvability probe**: a cheap 4-directional BFS ([`is_solvable`])
//!
//! Both engines run through [`Solver`], which reuses its open heap and
//! closed tables across runs. The open set is a binary heap with lazy
//! deletion: improved cells are pushed again and superseded entries are
//! skipped on pop. Ties on priority pop in insertion order, so results are
//! deterministic.
//!
//! ```
//! use labyrinth_core::{Maze, Position};
//! use labyrinth_paths::{Heuristic, Strategy, solve};
//!
//! let rows = vec![vec![true; 5]; 5];
//! let mut maze = Maze::from_passability(&rows, Position::new(0, 0), Position::new(4, 4)).unwrap();
//! let path = solve(&mut maze, Heuristic::Diagonal, Strategy::AStar).unwrap();
//! assert_eq!(path.cost(), 4 * 141);
//! ```

mod astar;
mod bfs;
mod dijkstra;
mod heuristic;
mod path;
mod queue;
mod solver;

pub use bfs::is_solvable;
pub use heuristic::{Heuristic, ParseHeuristicError};
pub use path::Path;
pub use solver::{ParseStrategyError, SearchConfig, SearchStats, Solver, Strategy, solve};

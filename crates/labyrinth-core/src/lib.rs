//! **labyrinth-core**: the grid maze model.
//!
//! This crate provides the types shared by the *labyrinth* crates: grid
//! positions, cells with search bookkeeping, the [`Maze`] container with
//! its step cost and reachability rules, and the plain-text encoding.
//!
//! Mazes are built either from a passability matrix
//! ([`Maze::from_passability`]), from text ([`text::decode`]), or by the
//! generator in `labyrinth-gen`.

pub mod cell;
pub mod cost;
pub mod error;
pub mod geom;
pub mod maze;
pub mod neighbors;
pub mod text;

pub use cell::{Cell, CellIndex};
pub use cost::{Cost, DIAGONAL_COST, STRAIGHT_COST, UNREACHABLE};
pub use error::MazeError;
pub use geom::Position;
pub use maze::{Maze, MazeId, Node};
pub use neighbors::Neighbors;
pub use text::TextError;

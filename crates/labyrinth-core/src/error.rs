//! Errors raised while building or comparing mazes.

use std::fmt;

use crate::geom::Position;

/// Errors that can occur when constructing a maze or relating its cells.
///
/// A search that finds no path is not an error; engines report it as `None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    /// Width or height below 2.
    InvalidDimensions { width: i32, height: i32 },
    /// No start or no end was designated during import.
    MissingEndpoint,
    /// A position outside the grid.
    OutOfBounds(Position),
    /// Two cells from different maze instances were compared.
    CrossMazeComparison,
    /// The carver ran out of backtrack stack before visiting every room.
    GenerationInvariantViolated { visited: usize, expected: usize },
    /// A passability matrix row has a different length from the first row.
    RaggedRows {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "maze dimensions {width}x{height} are too small (minimum 2x2)")
            }
            Self::MissingEndpoint => write!(f, "maze has no start or no end"),
            Self::OutOfBounds(p) => write!(f, "position {p} is outside the maze"),
            Self::CrossMazeComparison => write!(f, "cells belong to different mazes"),
            Self::GenerationInvariantViolated { visited, expected } => write!(
                f,
                "maze generation stalled after visiting {visited} of {expected} rooms"
            ),
            Self::RaggedRows {
                row,
                expected,
                found,
            } => write!(
                f,
                "passability row {row} has {found} columns, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for MazeError {}

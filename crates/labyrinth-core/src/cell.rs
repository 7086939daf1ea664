//! The [`Cell`] type: one grid location plus search bookkeeping.

use crate::cost::Cost;
use crate::geom::Position;

/// Flat row-major index of a cell inside its [`Maze`](crate::Maze).
pub type CellIndex = usize;

/// A single maze location.
///
/// Position and passability are fixed once the maze is built. `g`, `h` and
/// `parent` are scratch state written by search engines and cleared by
/// [`Maze::reset_nodes`](crate::Maze::reset_nodes).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pos: Position,
    passable: bool,
    /// Best known cost from the start.
    pub g: Cost,
    /// Heuristic estimate to the end from the last search that touched it.
    pub h: Cost,
    /// Predecessor on the best known path, by index.
    pub parent: Option<CellIndex>,
}

impl Cell {
    /// Create a cell with cleared bookkeeping.
    #[inline]
    pub const fn new(pos: Position, passable: bool) -> Self {
        Self {
            pos,
            passable,
            g: 0,
            h: 0,
            parent: None,
        }
    }

    #[inline]
    pub const fn position(&self) -> Position {
        self.pos
    }

    #[inline]
    pub const fn is_passable(&self) -> bool {
        self.passable
    }

    /// Total estimated cost `g + h`, saturating.
    #[inline]
    pub const fn f(&self) -> Cost {
        self.g.saturating_add(self.h)
    }

    /// Clear `g`, `h` and `parent`.
    #[inline]
    pub fn reset(&mut self) {
        self.g = 0;
        self.h = 0;
        self.parent = None;
    }
}

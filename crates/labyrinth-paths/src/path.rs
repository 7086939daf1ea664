use labyrinth_core::{CellIndex, Cost, Maze, Position};

/// A solved route through a maze, ordered from start to end.
///
/// Both endpoints are included and every consecutive pair is grid-adjacent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    positions: Vec<Position>,
    cost: Cost,
}

impl Path {
    /// The ordered positions, start first.
    #[inline]
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Total step cost from start to end.
    #[inline]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Number of cells on the path, endpoints included.
    #[inline]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn start(&self) -> Option<Position> {
        self.positions.first().copied()
    }

    pub fn end(&self) -> Option<Position> {
        self.positions.last().copied()
    }

    pub fn contains(&self, p: Position) -> bool {
        self.positions.contains(&p)
    }

    pub fn into_positions(self) -> Vec<Position> {
        self.positions
    }

    /// Follow parent links from the maze's end cell back to its start.
    ///
    /// Returns `None` if a link is missing before the start is reached, or
    /// if the chain is longer than the number of cells (a cycle).
    pub(crate) fn reconstruct(maze: &Maze) -> Option<Path> {
        let start = maze.start_index();
        let end = maze.end_index();
        let limit = maze.cell_count();

        let mut positions = Vec::new();
        let mut ci: CellIndex = end;
        loop {
            positions.push(maze.position(ci));
            if ci == start {
                break;
            }
            if positions.len() > limit {
                log::error!("parent chain from {} exceeds {limit} cells", maze.end());
                return None;
            }
            ci = maze.cell_at(ci)?.parent?;
        }
        positions.reverse();

        let cost = maze.cell_at(end)?.g;
        Some(Path { positions, cost })
    }
}

impl IntoIterator for Path {
    type Item = Position;
    type IntoIter = std::vec::IntoIter<Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.into_iter()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Position;
    type IntoIter = std::slice::Iter<'a, Position>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

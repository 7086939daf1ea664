//! The [`Maze`] grid container and the borrowed [`Node`] handle.
//!
//! A maze owns a rectangular row-major array of [`Cell`]s together with a
//! designated start and end. Cells never escape the array: callers address
//! them by [`Position`] or [`CellIndex`], and search engines record parents
//! as indices rather than references.

use std::ops::{Index, IndexMut};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::cell::{Cell, CellIndex};
use crate::cost::{Cost, DIAGONAL_COST, STRAIGHT_COST};
use crate::error::MazeError;
use crate::geom::Position;

static NEXT_MAZE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one maze instance.
///
/// Every construction (including `Clone`) draws a fresh id, so cells of two
/// distinct instances never compare as belonging to the same maze.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MazeId(u64);

impl MazeId {
    fn fresh() -> Self {
        Self(NEXT_MAZE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A rectangular grid maze with a start and an end cell.
#[derive(Debug)]
pub struct Maze {
    id: MazeId,
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    start: CellIndex,
    end: CellIndex,
}

impl Clone for Maze {
    fn clone(&self) -> Self {
        Self {
            id: MazeId::fresh(),
            width: self.width,
            height: self.height,
            cells: self.cells.clone(),
            start: self.start,
            end: self.end,
        }
    }
}

impl Maze {
    /// Build a maze whose passability is decided by `passable` for every
    /// position.
    ///
    /// Fails with [`MazeError::InvalidDimensions`] if either side is below 2
    /// and with [`MazeError::OutOfBounds`] if `start` or `end` lies outside
    /// the grid. Endpoint passability is kept as given.
    pub fn with_passability(
        width: i32,
        height: i32,
        start: Position,
        end: Position,
        mut passable: impl FnMut(Position) -> bool,
    ) -> Result<Self, MazeError> {
        if width < 2 || height < 2 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        let in_bounds = |p: Position| p.x >= 0 && p.x < width && p.y >= 0 && p.y < height;
        if !in_bounds(start) {
            return Err(MazeError::OutOfBounds(start));
        }
        if !in_bounds(end) {
            return Err(MazeError::OutOfBounds(end));
        }

        let mut cells = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                let p = Position::new(x, y);
                cells.push(Cell::new(p, passable(p)));
            }
        }

        let w = width as usize;
        log::debug!("maze {width}x{height}, start {start}, end {end}");
        Ok(Self {
            id: MazeId::fresh(),
            width,
            height,
            cells,
            start: start.y as usize * w + start.x as usize,
            end: end.y as usize * w + end.x as usize,
        })
    }

    /// Build a maze from an externally supplied passability matrix.
    ///
    /// `rows[y][x]` is `true` for floor. Every row must have the same length.
    pub fn from_passability<R: AsRef<[bool]>>(
        rows: &[R],
        start: Position,
        end: Position,
    ) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.as_ref().len());
        for (row, r) in rows.iter().enumerate() {
            let found = r.as_ref().len();
            if found != width {
                return Err(MazeError::RaggedRows {
                    row,
                    expected: width,
                    found,
                });
            }
        }
        let (w, h) = (to_i32(width), to_i32(height));
        Self::with_passability(w, h, start, end, |p| {
            rows[p.y as usize].as_ref()[p.x as usize]
        })
    }

    /// Identity of this instance.
    #[inline]
    pub fn id(&self) -> MazeId {
        self.id
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of cells (`width * height`).
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Whether `p` lies inside the grid.
    #[inline]
    pub fn contains(&self, p: Position) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    /// Convert a position to a flat index. Returns `None` if out of bounds.
    #[inline]
    pub fn idx(&self, p: Position) -> Option<CellIndex> {
        if !self.contains(p) {
            return None;
        }
        Some(p.y as usize * self.width as usize + p.x as usize)
    }

    /// Convert a flat index back to a position.
    #[inline]
    pub fn position(&self, idx: CellIndex) -> Position {
        let w = self.width as usize;
        Position::new((idx % w) as i32, (idx / w) as i32)
    }

    /// The cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn cell(&self, p: Position) -> Option<&Cell> {
        self.idx(p).map(|i| &self.cells[i])
    }

    /// The cell at flat index `idx`, or `None` if out of range.
    #[inline]
    pub fn cell_at(&self, idx: CellIndex) -> Option<&Cell> {
        self.cells.get(idx)
    }

    /// Mutable access to a cell's search bookkeeping.
    #[inline]
    pub fn cell_mut(&mut self, idx: CellIndex) -> Option<&mut Cell> {
        self.cells.get_mut(idx)
    }

    /// All cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Whether `p` is inside the grid and passable.
    #[inline]
    pub fn is_passable(&self, p: Position) -> bool {
        self.cell(p).is_some_and(Cell::is_passable)
    }

    /// Number of passable cells.
    pub fn passable_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_passable()).count()
    }

    /// Position of the start cell.
    #[inline]
    pub fn start(&self) -> Position {
        self.cells[self.start].position()
    }

    /// Position of the end cell.
    #[inline]
    pub fn end(&self) -> Position {
        self.cells[self.end].position()
    }

    /// Flat index of the start cell.
    #[inline]
    pub fn start_index(&self) -> CellIndex {
        self.start
    }

    /// Flat index of the end cell.
    #[inline]
    pub fn end_index(&self) -> CellIndex {
        self.end
    }

    /// Borrowed handle to the cell at `p`.
    pub fn node(&self, p: Position) -> Option<Node<'_>> {
        self.idx(p).map(|idx| Node { maze: self, idx })
    }

    /// Borrowed handle to the start cell.
    pub fn start_node(&self) -> Node<'_> {
        Node {
            maze: self,
            idx: self.start,
        }
    }

    /// Borrowed handle to the end cell.
    pub fn end_node(&self) -> Node<'_> {
        Node {
            maze: self,
            idx: self.end,
        }
    }

    /// Clear `g`, `h` and `parent` on every cell.
    pub fn reset_nodes(&mut self) {
        log::trace!("reset {} cells", self.cells.len());
        for c in self.cells.iter_mut() {
            c.reset();
        }
    }

    /// Append the in-bounds neighbour indices of `idx` into `buf`.
    ///
    /// Eight candidates with `diagonal`, four otherwise. `buf` is cleared
    /// first. Passability is not checked; see [`can_reach`](Self::can_reach).
    pub fn neighbors(&self, idx: CellIndex, diagonal: bool, buf: &mut Vec<CellIndex>) {
        buf.clear();
        let p = self.position(idx);
        if diagonal {
            buf.extend(p.neighbors_8().into_iter().filter_map(|n| self.idx(n)));
        } else {
            buf.extend(p.neighbors_4().into_iter().filter_map(|n| self.idx(n)));
        }
    }

    /// Whether a single step from `from` to `to` is legal.
    ///
    /// The cells must be adjacent and `to` passable. A diagonal step also
    /// needs both orthogonal cells beside it to be passable (no corner
    /// cutting).
    pub fn can_reach(&self, from: CellIndex, to: CellIndex) -> bool {
        let (Some(a), Some(b)) = (self.cells.get(from), self.cells.get(to)) else {
            return false;
        };
        let (pa, pb) = (a.position(), b.position());
        if !b.is_passable() || !pa.is_adjacent(pb) {
            return false;
        }
        if pa.is_diagonal(pb) {
            self.is_passable(Position::new(pb.x, pa.y)) && self.is_passable(Position::new(pa.x, pb.y))
        } else {
            true
        }
    }

    /// Cost of stepping between two adjacent cells.
    #[inline]
    pub fn step_cost(&self, from: CellIndex, to: CellIndex) -> Cost {
        if self.position(from).is_diagonal(self.position(to)) {
            DIAGONAL_COST
        } else {
            STRAIGHT_COST
        }
    }
}

impl Index<CellIndex> for Maze {
    type Output = Cell;

    #[inline]
    fn index(&self, idx: CellIndex) -> &Cell {
        &self.cells[idx]
    }
}

impl IndexMut<CellIndex> for Maze {
    #[inline]
    fn index_mut(&mut self, idx: CellIndex) -> &mut Cell {
        &mut self.cells[idx]
    }
}

fn to_i32(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A cell addressed together with the maze that owns it.
///
/// Cells carry no back-reference to their maze; a `Node` pairs the two so
/// that cross-cell operations can check both sides come from the same
/// instance.
#[derive(Copy, Clone, Debug)]
pub struct Node<'a> {
    maze: &'a Maze,
    idx: CellIndex,
}

impl<'a> Node<'a> {
    /// The maze this handle points into.
    #[inline]
    pub fn maze(self) -> &'a Maze {
        self.maze
    }

    /// Flat index of the cell.
    #[inline]
    pub fn index(self) -> CellIndex {
        self.idx
    }

    /// The cell itself.
    #[inline]
    pub fn cell(self) -> &'a Cell {
        &self.maze.cells[self.idx]
    }

    /// Grid position of the cell.
    #[inline]
    pub fn position(self) -> Position {
        self.cell().position()
    }

    /// Whether both handles point into the same maze instance.
    #[inline]
    pub fn same_maze(self, other: Node<'_>) -> bool {
        self.maze.id == other.maze.id
    }

    /// Whether a single step from `self` to `other` is legal.
    ///
    /// Fails with [`MazeError::CrossMazeComparison`] if the nodes come from
    /// different mazes.
    pub fn can_reach(self, other: Node<'_>) -> Result<bool, MazeError> {
        if !self.same_maze(other) {
            return Err(MazeError::CrossMazeComparison);
        }
        Ok(self.maze.can_reach(self.idx, other.idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(w: usize, h: usize) -> Vec<Vec<bool>> {
        vec![vec![true; w]; h]
    }

    #[test]
    fn from_passability_layout() {
        let rows = vec![vec![true, false, true], vec![true, true, false]];
        let m = Maze::from_passability(&rows, Position::new(0, 0), Position::new(1, 1)).unwrap();
        assert_eq!((m.width(), m.height()), (3, 2));
        assert_eq!(m.cell_count(), 6);
        assert!(!m.is_passable(Position::new(1, 0)));
        assert!(!m.is_passable(Position::new(2, 1)));
        assert!(m.is_passable(Position::new(2, 0)));
        assert_eq!(m.start(), Position::new(0, 0));
        assert_eq!(m.end(), Position::new(1, 1));
        assert_eq!(m.end_index(), 4);
        assert_eq!(m.passable_count(), 4);
    }

    #[test]
    fn index_round_trip() {
        let m = Maze::from_passability(&open(4, 3), Position::ZERO, Position::new(3, 2)).unwrap();
        for (i, c) in m.cells().iter().enumerate() {
            assert_eq!(m.idx(c.position()), Some(i));
            assert_eq!(m.position(i), c.position());
        }
        assert_eq!(m.idx(Position::new(4, 0)), None);
        assert_eq!(m.idx(Position::new(0, -1)), None);
    }

    #[test]
    fn rejects_small_dimensions() {
        let rows = vec![vec![true, true]];
        let err = Maze::from_passability(&rows, Position::ZERO, Position::new(1, 0)).unwrap_err();
        assert_eq!(
            err,
            MazeError::InvalidDimensions {
                width: 2,
                height: 1
            }
        );
        let empty: Vec<Vec<bool>> = Vec::new();
        assert!(matches!(
            Maze::from_passability(&empty, Position::ZERO, Position::ZERO),
            Err(MazeError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn rejects_out_of_bounds_endpoints() {
        let rows = open(3, 3);
        assert_eq!(
            Maze::from_passability(&rows, Position::new(3, 0), Position::ZERO).unwrap_err(),
            MazeError::OutOfBounds(Position::new(3, 0))
        );
        assert_eq!(
            Maze::from_passability(&rows, Position::ZERO, Position::new(-1, 2)).unwrap_err(),
            MazeError::OutOfBounds(Position::new(-1, 2))
        );
    }

    #[test]
    fn rejects_ragged_rows() {
        let rows = vec![vec![true, true, true], vec![true, true]];
        assert_eq!(
            Maze::from_passability(&rows, Position::ZERO, Position::new(1, 1)).unwrap_err(),
            MazeError::RaggedRows {
                row: 1,
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn neighbour_counts() {
        let m = Maze::from_passability(&open(3, 3), Position::ZERO, Position::new(2, 2)).unwrap();
        let mut buf = Vec::new();
        let centre = m.idx(Position::new(1, 1)).unwrap();
        m.neighbors(centre, true, &mut buf);
        assert_eq!(buf.len(), 8);
        m.neighbors(centre, false, &mut buf);
        assert_eq!(buf.len(), 4);
        m.neighbors(0, true, &mut buf);
        assert_eq!(buf.len(), 3);
        m.neighbors(0, false, &mut buf);
        assert_eq!(buf.len(), 2);
    }

    #[test]
    fn corner_cutting_is_rejected() {
        // . X .
        // X . .
        // . . .
        let rows = vec![
            vec![true, false, true],
            vec![false, true, true],
            vec![true, true, true],
        ];
        let m = Maze::from_passability(&rows, Position::ZERO, Position::new(2, 2)).unwrap();
        let a = m.idx(Position::new(0, 0)).unwrap();
        let b = m.idx(Position::new(1, 1)).unwrap();
        assert!(m.is_passable(Position::new(1, 1)));
        assert!(!m.can_reach(a, b));
        // The reverse diagonal is blocked by the same two walls.
        assert!(!m.can_reach(b, a));
        // An unobstructed diagonal is fine.
        let c = m.idx(Position::new(2, 2)).unwrap();
        assert!(m.can_reach(b, c));
        // One wall beside the diagonal is enough to block it.
        let d = m.idx(Position::new(2, 0)).unwrap();
        assert!(!m.can_reach(b, d));
    }

    #[test]
    fn can_reach_requires_passable_adjacent_target() {
        let rows = vec![vec![true, false], vec![true, true]];
        let m = Maze::from_passability(&rows, Position::ZERO, Position::new(1, 1)).unwrap();
        assert!(!m.can_reach(0, 1));
        assert!(m.can_reach(0, 2));
        assert!(!m.can_reach(0, 0));
        assert!(!m.can_reach(0, 99));
    }

    #[test]
    fn step_costs() {
        let m = Maze::from_passability(&open(3, 3), Position::ZERO, Position::new(2, 2)).unwrap();
        assert_eq!(m.step_cost(0, 1), STRAIGHT_COST);
        assert_eq!(m.step_cost(0, 3), STRAIGHT_COST);
        assert_eq!(m.step_cost(0, 4), DIAGONAL_COST);
    }

    #[test]
    fn reset_nodes_clears_everything() {
        let mut m = Maze::from_passability(&open(2, 2), Position::ZERO, Position::new(1, 1)).unwrap();
        for i in 0..m.cell_count() {
            let c = m.cell_mut(i).unwrap();
            c.g = 5;
            c.h = 6;
            c.parent = Some(0);
        }
        m.reset_nodes();
        assert!(m.cells().iter().all(|c| c.g == 0 && c.h == 0 && c.parent.is_none()));
    }

    #[test]
    fn clones_are_distinct_instances() {
        let m = Maze::from_passability(&open(2, 2), Position::ZERO, Position::new(1, 1)).unwrap();
        let c = m.clone();
        assert_ne!(m.id(), c.id());
        assert_eq!(m.cells(), c.cells());
        assert!(!m.start_node().same_maze(c.start_node()));
        assert!(m.start_node().same_maze(m.end_node()));
    }

    #[test]
    fn node_can_reach_checks_maze_identity() {
        let a = Maze::from_passability(&open(2, 2), Position::ZERO, Position::new(1, 1)).unwrap();
        let b = Maze::from_passability(&open(2, 2), Position::ZERO, Position::new(1, 1)).unwrap();
        let from = a.start_node();
        assert_eq!(from.can_reach(a.end_node()), Ok(true));
        assert_eq!(
            from.can_reach(b.end_node()),
            Err(MazeError::CrossMazeComparison)
        );
        assert!(a.node(Position::new(2, 0)).is_none());
    }
}

use std::collections::BinaryHeap;
use std::fmt;
use std::str::FromStr;

use labyrinth_core::{CellIndex, Cost, Maze};

use crate::heuristic::Heuristic;
use crate::path::Path;
use crate::queue::NodeRef;

/// Search engine used by a [`Solver`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    /// Informed search ordered by `g + h`.
    #[default]
    AStar,
    /// Uniform-cost search ordered by `g`; ignores the heuristic.
    Dijkstra,
}

impl Strategy {
    /// Lowercase name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Self::AStar => "astar",
            Self::Dijkstra => "dijkstra",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    /// Accepts full names or their first letter, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "astar" | "a*" => Ok(Self::AStar),
            "d" | "dijkstra" => Ok(Self::Dijkstra),
            _ => Err(ParseStrategyError(s.to_string())),
        }
    }
}

/// An unrecognised strategy name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseStrategyError(pub String);

impl fmt::Display for ParseStrategyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown search strategy \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for ParseStrategyError {}

/// Tunables for a search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchConfig {
    /// Allow 8-directional movement (diagonal steps cost 141).
    pub allow_diagonal: bool,
    /// Give up and report no path after this many expansions.
    pub max_iterations: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            allow_diagonal: true,
            max_iterations: None,
        }
    }
}

impl SearchConfig {
    /// Enable or disable diagonal steps.
    pub fn with_diagonal(mut self, allow: bool) -> Self {
        self.allow_diagonal = allow;
        self
    }

    /// Cap the number of expansions, or lift the cap with `None`.
    pub fn with_max_iterations(mut self, cap: Option<usize>) -> Self {
        self.max_iterations = cap;
        self
    }
}

/// Counters from the most recent run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Cells moved into the closed set.
    pub expanded: usize,
    /// Entries pushed onto the open heap, stale ones included.
    pub pushed: usize,
}

/// Runs A* or Dijkstra over a [`Maze`].
///
/// The solver owns its open heap, closed table and neighbour buffer and
/// reuses them across runs, so repeated searches only allocate when a
/// larger maze comes along. Each run starts with
/// [`Maze::reset_nodes`], which makes re-running on the same maze
/// reproduce the same path.
#[derive(Debug, Clone)]
pub struct Solver {
    heuristic: Heuristic,
    strategy: Strategy,
    config: SearchConfig,
    stats: SearchStats,
    pub(crate) open: BinaryHeap<NodeRef>,
    pub(crate) closed: Vec<bool>,
    pub(crate) in_open: Vec<bool>,
    pub(crate) nbuf: Vec<CellIndex>,
    seq: u64,
}

impl Solver {
    /// A solver with the default [`SearchConfig`].
    pub fn new(heuristic: Heuristic, strategy: Strategy) -> Self {
        Self {
            heuristic,
            strategy,
            config: SearchConfig::default(),
            stats: SearchStats::default(),
            open: BinaryHeap::new(),
            closed: Vec::new(),
            in_open: Vec::new(),
            nbuf: Vec::with_capacity(8),
            seq: 0,
        }
    }

    /// Replace the search configuration.
    pub fn with_config(mut self, config: SearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Heuristic used by A* runs.
    #[inline]
    pub fn heuristic(&self) -> Heuristic {
        self.heuristic
    }

    /// Engine this solver runs.
    #[inline]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Current configuration.
    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Counters from the last call to [`solve`](Self::solve).
    #[inline]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Find a path from the maze's start to its end.
    ///
    /// Returns `None` when no path exists, when start or end is impassable,
    /// or when the iteration cap is reached.
    pub fn solve(&mut self, maze: &mut Maze) -> Option<Path> {
        self.prepare(maze);

        if !maze.is_passable(maze.start()) || !maze.is_passable(maze.end()) {
            log::debug!(
                "{}: start {} or end {} is impassable",
                self.strategy,
                maze.start(),
                maze.end()
            );
            return None;
        }

        let found = match self.strategy {
            Strategy::AStar => self.astar(maze),
            Strategy::Dijkstra => self.dijkstra(maze),
        };
        let path = if found { Path::reconstruct(maze) } else { None };

        match &path {
            Some(p) => log::debug!(
                "{} ({}): path of {} cells, cost {}, {} expanded",
                self.strategy,
                self.heuristic,
                p.len(),
                p.cost(),
                self.stats.expanded
            ),
            None => log::debug!(
                "{} ({}): no path after {} expanded",
                self.strategy,
                self.heuristic,
                self.stats.expanded
            ),
        }
        path
    }

    fn prepare(&mut self, maze: &mut Maze) {
        maze.reset_nodes();
        let n = maze.cell_count();
        self.open.clear();
        self.closed.clear();
        self.closed.resize(n, false);
        self.in_open.clear();
        self.in_open.resize(n, false);
        self.seq = 0;
        self.stats = SearchStats::default();
    }

    pub(crate) fn push(&mut self, idx: CellIndex, f: Cost, g: Cost) {
        self.open.push(NodeRef {
            idx,
            f,
            g,
            seq: self.seq,
        });
        self.seq += 1;
        self.stats.pushed += 1;
    }

    /// Move `idx` into the closed set, unless the iteration cap is spent.
    pub(crate) fn close(&mut self, idx: CellIndex) -> bool {
        if let Some(cap) = self.config.max_iterations {
            if self.stats.expanded >= cap {
                log::warn!("{}: iteration cap of {cap} reached", self.strategy);
                return false;
            }
        }
        self.closed[idx] = true;
        self.in_open[idx] = false;
        self.stats.expanded += 1;
        true
    }
}

/// Solve `maze` with the default [`SearchConfig`].
pub fn solve(maze: &mut Maze, heuristic: Heuristic, strategy: Strategy) -> Option<Path> {
    Solver::new(heuristic, strategy).solve(maze)
}

use labyrinth_core::{Maze, UNREACHABLE};

use crate::solver::Solver;

impl Solver {
    /// Uniform-cost search from the maze's start to its end.
    ///
    /// Every passable cell enters the queue at [`UNREACHABLE`]; the start is
    /// then re-queued at 0. Popping an `UNREACHABLE` entry means nothing
    /// left in the queue can be reached. Returns whether the end was popped.
    pub(crate) fn dijkstra(&mut self, maze: &mut Maze) -> bool {
        let start = maze.start_index();
        let end = maze.end_index();
        let diagonal = self.config().allow_diagonal;

        for i in 0..maze.cell_count() {
            if !maze[i].is_passable() {
                continue;
            }
            maze[i].g = UNREACHABLE;
            self.push(i, UNREACHABLE, UNREACHABLE);
        }
        maze[start].g = 0;
        self.push(start, 0, 0);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = loop {
            let Some(current) = self.open.pop() else {
                break false;
            };
            let ci = current.idx;
            if self.closed[ci] || current.g != maze[ci].g {
                continue;
            }
            if current.g == UNREACHABLE {
                log::trace!("dijkstra: {} and beyond are unreachable", maze.position(ci));
                break false;
            }
            if !self.close(ci) {
                break false;
            }
            if ci == end {
                break true;
            }

            maze.neighbors(ci, diagonal, &mut nbuf);
            for &ni in nbuf.iter() {
                if self.closed[ni] || !maze.can_reach(ci, ni) {
                    continue;
                }
                let alt = current.g + maze.step_cost(ci, ni);
                if alt < maze[ni].g {
                    maze[ni].g = alt;
                    maze[ni].parent = Some(ci);
                    self.push(ni, alt, alt);
                }
            }
        };

        self.nbuf = nbuf;
        found
    }
}

#[cfg(test)]
mod tests {
    use crate::{Heuristic, SearchConfig, Solver, Strategy};
    use labyrinth_core::{Maze, Position, UNREACHABLE, text};

    #[test]
    fn unreached_cells_keep_sentinel() {
        let mut m = text::decode(
            "\
#######
#S  X #
#   XE#
#   X #
#######
",
        )
        .unwrap();
        let mut solver = Solver::new(Heuristic::Manhattan, Strategy::Dijkstra);
        assert!(solver.solve(&mut m).is_none());
        let end = &m[m.end_index()];
        assert_eq!(end.g, UNREACHABLE);
        assert_eq!(end.parent, None);
        // Every cell left of the wall was settled.
        assert_eq!(solver.stats().expanded, 9);
    }

    #[test]
    fn heuristic_is_ignored() {
        let rows = vec![vec![true; 7]; 5];
        let mut costs = Vec::new();
        for h in Heuristic::ALL {
            let mut m = Maze::from_passability(&rows, Position::ZERO, Position::new(6, 4)).unwrap();
            let mut solver = Solver::new(h, Strategy::Dijkstra);
            let path = solver.solve(&mut m).unwrap();
            costs.push((path.cost(), solver.stats().expanded));
            // Dijkstra never writes estimates.
            assert!(m.cells().iter().all(|c| c.h == 0));
        }
        assert!(costs.windows(2).all(|w| w[0] == w[1]));
        assert_eq!(costs[0].0, 4 * 141 + 2 * 100);
    }

    #[test]
    fn orthogonal_only() {
        let rows = vec![vec![true; 3]; 3];
        let mut m = Maze::from_passability(&rows, Position::ZERO, Position::new(2, 2)).unwrap();
        let path = Solver::new(Heuristic::Diagonal, Strategy::Dijkstra)
            .with_config(SearchConfig::default().with_diagonal(false))
            .solve(&mut m)
            .unwrap();
        assert_eq!(path.cost(), 400);
        assert!(path
            .positions()
            .windows(2)
            .all(|w| !w[0].is_diagonal(w[1])));
    }
}

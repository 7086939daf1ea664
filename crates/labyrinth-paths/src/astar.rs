use labyrinth_core::Maze;

use crate::solver::Solver;

impl Solver {
    /// A* from the maze's start to its end.
    ///
    /// Leaves `g`, `h` and `parent` on the touched cells and returns whether
    /// the end was closed. The caller has already reset the maze and the
    /// solver's tables.
    pub(crate) fn astar(&mut self, maze: &mut Maze) -> bool {
        let start = maze.start_index();
        let end = maze.end_index();
        let goal = maze.end();
        let heuristic = self.heuristic();
        let diagonal = self.config().allow_diagonal;

        let h = heuristic.estimate(maze.start(), goal);
        maze[start].g = 0;
        maze[start].h = h;
        self.in_open[start] = true;
        self.push(start, h, 0);

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = self.open.pop() else {
                break 'search false;
            };
            let ci = current.idx;

            // Skip entries superseded by a cheaper push.
            if self.closed[ci] || current.g != maze[ci].g {
                continue;
            }

            if !self.close(ci) {
                break 'search false;
            }
            log::trace!(
                "astar: close {} g={} f={}",
                maze.position(ci),
                current.g,
                current.f
            );

            if ci == end {
                break 'search true;
            }

            maze.neighbors(ci, diagonal, &mut nbuf);
            for &ni in nbuf.iter() {
                if self.closed[ni] || !maze.can_reach(ci, ni) {
                    continue;
                }
                let tentative = current.g + maze.step_cost(ci, ni);
                if self.in_open[ni] && tentative >= maze[ni].g {
                    continue;
                }

                let h = heuristic.estimate(maze.position(ni), goal);
                let n = &mut maze[ni];
                n.parent = Some(ci);
                n.g = tentative;
                n.h = h;
                let f = n.f();
                self.in_open[ni] = true;
                self.push(ni, f, tentative);
            }
        };

        self.nbuf = nbuf;
        found
    }
}

use crate::geom::Position;

/// Reusable neighbour enumeration helper for position-based floods.
///
/// Yields the cardinal neighbours of a position that pass a predicate, into
/// an internal buffer that is reused between calls. Index-based 8-way
/// enumeration lives on [`Maze::neighbors`](crate::Maze::neighbors).
pub struct Neighbors {
    buf: Vec<Position>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// An empty helper with room for one neighbourhood.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// 4-directional neighbours of `p` for which `keep` returns `true`.
    pub fn cardinal(&mut self, p: Position, keep: impl Fn(Position) -> bool) -> &[Position] {
        self.buf.clear();
        self.buf.extend(p.neighbors_4().into_iter().filter(|&n| keep(n)));
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_filters() {
        let mut n = Neighbors::new();
        let got = n.cardinal(Position::new(0, 0), |q| q.x >= 0 && q.y >= 0);
        assert_eq!(got, &[Position::new(1, 0), Position::new(0, 1)]);
    }

    #[test]
    fn cardinal_reuses_buffer() {
        let mut n = Neighbors::new();
        assert_eq!(n.cardinal(Position::new(4, 4), |_| true).len(), 4);
        let got = n.cardinal(Position::new(4, 4), |q| q.y == 4);
        assert_eq!(got, &[Position::new(5, 4), Position::new(3, 4)]);
    }
}

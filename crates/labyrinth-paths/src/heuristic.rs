use std::fmt;
use std::str::FromStr;

use labyrinth_core::{Cost, MazeError, Node, Position, STRAIGHT_COST};

/// Extra cost of a diagonal step over a straight one (141 - 100).
const DIAGONAL_SURPLUS: Cost = 41;

/// Cost estimate between two cells of the same maze.
///
/// All variants scale by 100 units per orthogonal step so that they compare
/// directly with the step cost model.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heuristic {
    /// `(|dx| + |dy|) * 100`.
    Manhattan,
    /// `round(sqrt((|dx|*100)^2 + (|dy|*100)^2))`.
    Euclidean,
    /// Octile distance `100 * max + 41 * min` of the axis deltas.
    ///
    /// Equals the true cost on an open grid with diagonal moves, so it never
    /// overestimates under the 100/141 step model.
    #[default]
    Diagonal,
}

impl Heuristic {
    /// Every variant, in declaration order.
    pub const ALL: [Heuristic; 3] = [Self::Manhattan, Self::Euclidean, Self::Diagonal];

    /// Estimate the cost from `origin` to `target`.
    ///
    /// Fails with [`MazeError::CrossMazeComparison`] if the nodes belong to
    /// different mazes.
    pub fn distance(self, origin: Node<'_>, target: Node<'_>) -> Result<Cost, MazeError> {
        if !origin.same_maze(target) {
            return Err(MazeError::CrossMazeComparison);
        }
        Ok(self.estimate(origin.position(), target.position()))
    }

    /// Estimate between raw positions, without the maze check.
    pub fn estimate(self, from: Position, to: Position) -> Cost {
        let dx = from.x.abs_diff(to.x);
        let dy = from.y.abs_diff(to.y);
        match self {
            Self::Manhattan => dx.saturating_add(dy).saturating_mul(STRAIGHT_COST),
            Self::Euclidean => {
                let h = f64::from(dx) * f64::from(STRAIGHT_COST);
                let v = f64::from(dy) * f64::from(STRAIGHT_COST);
                h.hypot(v).round() as Cost
            }
            Self::Diagonal => {
                let (lo, hi) = if dx < dy { (dx, dy) } else { (dy, dx) };
                hi.saturating_mul(STRAIGHT_COST)
                    .saturating_add(lo.saturating_mul(DIAGONAL_SURPLUS))
            }
        }
    }

    /// Lowercase name, as accepted by `FromStr`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Euclidean => "euclidean",
            Self::Diagonal => "diagonal",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Heuristic {
    type Err = ParseHeuristicError;

    /// Accepts full names or their first letter, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "manhattan" => Ok(Self::Manhattan),
            "e" | "euclidean" => Ok(Self::Euclidean),
            "d" | "diagonal" | "octile" => Ok(Self::Diagonal),
            _ => Err(ParseHeuristicError(s.to_string())),
        }
    }
}

/// An unrecognised heuristic name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHeuristicError(pub String);

impl fmt::Display for ParseHeuristicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown heuristic \u{201c}{}\u{201d}", self.0)
    }
}

impl std::error::Error for ParseHeuristicError {}

//! The fixed step cost model.

/// Integral traversal cost. 100 units per orthogonal step.
pub type Cost = u32;

/// Cost of an orthogonal step between adjacent cells.
pub const STRAIGHT_COST: Cost = 100;

/// Cost of a diagonal step, 100 × √2 pre-rounded.
pub const DIAGONAL_COST: Cost = 141;

/// Sentinel meaning "not reached".
pub const UNREACHABLE: Cost = Cost::MAX;

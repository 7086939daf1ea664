//! Plain-text maze encoding.
//!
//! ```text
//! #######
//! #S X  #
//! #  X X#
//! #X   E#
//! #######
//! ```
//!
//! `#` border, `X` wall, `S` start, `E` end, space floor. When a solved path
//! is drawn its floor cells are marked `.`; decoding reads `.` as floor.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::MazeError;
use crate::geom::Position;
use crate::maze::Maze;

const BORDER: char = '#';
const WALL: char = 'X';
const FLOOR: char = ' ';
const START: char = 'S';
const END: char = 'E';
const TRAIL: char = '.';

/// Render `maze` as text.
///
/// The alphabet has no mark for a walled endpoint or for a start that is
/// also the end, so such mazes fail with [`TextError::WalledEndpoint`] or
/// [`TextError::SharedEndpoint`] rather than encode to a different maze.
pub fn encode(maze: &Maze) -> Result<String, TextError> {
    render(maze, |_| false)
}

/// Render `maze` with the floor cells of `path` marked `.`.
///
/// Start and end keep their `S` and `E` marks. Fails like [`encode`].
pub fn encode_with_path(maze: &Maze, path: &[Position]) -> Result<String, TextError> {
    let on_path: HashSet<Position> = path.iter().copied().collect();
    render(maze, |p| on_path.contains(&p))
}

fn render(maze: &Maze, on_path: impl Fn(Position) -> bool) -> Result<String, TextError> {
    if maze.start() == maze.end() {
        return Err(TextError::SharedEndpoint { pos: maze.start() });
    }
    for (ch, pos) in [(START, maze.start()), (END, maze.end())] {
        if !maze.is_passable(pos) {
            return Err(TextError::WalledEndpoint { ch, pos });
        }
    }

    let w = maze.width() as usize;
    let h = maze.height() as usize;
    let mut out = String::with_capacity((w + 3) * (h + 2));

    let border_line = |out: &mut String| {
        out.extend(std::iter::repeat_n(BORDER, w + 2));
        out.push('\n');
    };

    border_line(&mut out);
    for y in 0..maze.height() {
        out.push(BORDER);
        for x in 0..maze.width() {
            let p = Position::new(x, y);
            let ch = if p == maze.start() {
                START
            } else if p == maze.end() {
                END
            } else if !maze.is_passable(p) {
                WALL
            } else if on_path(p) {
                TRAIL
            } else {
                FLOOR
            };
            out.push(ch);
        }
        out.push(BORDER);
        out.push('\n');
    }
    border_line(&mut out);
    Ok(out)
}

/// Parse a maze from its text encoding.
///
/// Surrounding whitespace is ignored and `\r\n` line endings are accepted.
/// A complete `#` border and exactly one `S` and one `E` are required.
pub fn decode(s: &str) -> Result<Maze, TextError> {
    let lines: Vec<Vec<char>> = s.trim().lines().map(|l| l.chars().collect()).collect();

    let outer_w = lines.first().map_or(0, Vec::len);
    for (i, l) in lines.iter().enumerate() {
        if l.len() != outer_w {
            return Err(TextError::InconsistentWidth { line: i });
        }
    }
    if lines.len() < 2 || outer_w < 2 {
        return Err(TextError::MissingBorder { line: 0 });
    }

    let last = lines.len() - 1;
    for i in [0, last] {
        if lines[i].iter().any(|&c| c != BORDER) {
            return Err(TextError::MissingBorder { line: i });
        }
    }

    let width = (outer_w - 2) as i32;
    let height = (lines.len() - 2) as i32;
    if width < 2 || height < 2 {
        return Err(MazeError::InvalidDimensions { width, height }.into());
    }

    let mut rows = Vec::with_capacity(height as usize);
    let mut start = None;
    let mut end = None;

    for (i, line) in lines.iter().enumerate().take(last).skip(1) {
        if line[0] != BORDER || line[outer_w - 1] != BORDER {
            return Err(TextError::MissingBorder { line: i });
        }
        let y = (i - 1) as i32;
        let mut row = Vec::with_capacity(width as usize);
        for (j, &ch) in line[1..outer_w - 1].iter().enumerate() {
            let pos = Position::new(j as i32, y);
            let passable = match ch {
                WALL => false,
                FLOOR | TRAIL => true,
                START => {
                    if start.replace(pos).is_some() {
                        return Err(TextError::DuplicateEndpoint { ch });
                    }
                    true
                }
                END => {
                    if end.replace(pos).is_some() {
                        return Err(TextError::DuplicateEndpoint { ch });
                    }
                    true
                }
                _ => return Err(TextError::InvalidChar { ch, pos }),
            };
            row.push(passable);
        }
        rows.push(row);
    }

    let (Some(start), Some(end)) = (start, end) else {
        return Err(MazeError::MissingEndpoint.into());
    };
    Ok(Maze::from_passability(&rows, start, end)?)
}

impl FromStr for Maze {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        decode(s)
    }
}

/// Errors that can occur when decoding a text maze.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextError {
    /// Line `line` differs in width from the first line.
    InconsistentWidth { line: usize },
    /// Line `line` is missing its `#` border.
    MissingBorder { line: usize },
    /// A character outside the alphabet, at interior position `pos`.
    InvalidChar { ch: char, pos: Position },
    /// A second `S` or `E`.
    DuplicateEndpoint { ch: char },
    /// Encoding a maze whose `S` or `E` cell at `pos` is a wall.
    WalledEndpoint { ch: char, pos: Position },
    /// Encoding a maze whose start and end are the same cell.
    SharedEndpoint { pos: Position },
    /// The decoded grid is not a valid maze.
    Maze(MazeError),
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentWidth { line } => write!(f, "maze text: line {line} has inconsistent width"),
            Self::MissingBorder { line } => write!(f, "maze text: line {line} is missing its border"),
            Self::InvalidChar { ch, pos } => {
                write!(f, "maze text: invalid character \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateEndpoint { ch } => write!(f, "maze text: more than one \u{201c}{ch}\u{201d}"),
            Self::WalledEndpoint { ch, pos } => {
                write!(f, "maze text: \u{201c}{ch}\u{201d} at {pos} is a wall")
            }
            Self::SharedEndpoint { pos } => write!(f, "maze text: start and end share {pos}"),
            Self::Maze(e) => write!(f, "maze text: {e}"),
        }
    }
}

impl std::error::Error for TextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Maze(e) => Some(e),
            _ => None,
        }
    }
}

impl From<MazeError> for TextError {
    fn from(e: MazeError) -> Self {
        Self::Maze(e)
    }
}

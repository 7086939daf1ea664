//! Random perfect-maze generation for labyrinth.
//!
//! ```
//! use labyrinth_gen::generate;
//!
//! let maze = generate(21, 15, Some(7)).unwrap();
//! assert!(maze.is_passable(maze.start()));
//! assert!(maze.is_passable(maze.end()));
//! ```

mod backtracker;

pub use backtracker::{MazeGen, generate, room_count};

//! Core crossword domain types
//!
//! Cells, word placements, the mutable grid model and the finished puzzle.
//! Nothing here knows about dictionaries or randomness.

mod cell;
mod grid;
mod placement;
mod puzzle;

pub use cell::Cell;
pub use grid::{Grid, Rejection};
pub use placement::{Direction, Position, WordPlacement};
pub use puzzle::{Clue, GeneratedPuzzle, GridSize};

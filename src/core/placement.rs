//! Word placement geometry
//!
//! Directions, grid positions and the record of a committed word.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Orientation of a word in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// Both directions, across first
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];

    /// The crossing direction
    #[inline]
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// Row and column step for one cell in this direction
    #[inline]
    #[must_use]
    pub const fn delta(self) -> (usize, usize) {
        match self {
            Self::Across => (0, 1),
            Self::Down => (1, 0),
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Across => "across",
            Self::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Zero-indexed cell coordinates, row 0 at the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The position `steps` cells further along `direction`
    ///
    /// The result may lie outside the grid; callers bounds-check it.
    #[inline]
    #[must_use]
    pub const fn step(self, direction: Direction, steps: usize) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row + dr * steps,
            col: self.col + dc * steps,
        }
    }

    /// The position `steps` cells back along `direction`, if it is not off the top or left edge
    #[inline]
    #[must_use]
    pub fn step_back(self, direction: Direction, steps: usize) -> Option<Self> {
        let (dr, dc) = direction.delta();
        Some(Self {
            row: self.row.checked_sub(dr * steps)?,
            col: self.col.checked_sub(dc * steps)?,
        })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A word committed to the grid
///
/// Intersections are the cells the word shares with words already on the grid
/// when it was placed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPlacement {
    pub word: String,
    pub origin: Position,
    pub direction: Direction,
    pub intersections: Vec<Position>,
}

impl WordPlacement {
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.word.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.word.is_empty()
    }

    /// Every cell covered by the word, in reading order
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.len()).map(|i| self.origin.step(self.direction, i))
    }

    /// The cell just before the first letter, if it is on the top/left side of the grid
    #[must_use]
    pub fn before(&self) -> Option<Position> {
        self.origin.step_back(self.direction, 1)
    }

    /// The cell just after the last letter (may lie outside the grid)
    #[must_use]
    pub fn after(&self) -> Position {
        self.origin.step(self.direction, self.len())
    }

    /// Letter the word places at `position`, if the word covers it
    #[must_use]
    pub fn letter_at(&self, position: Position) -> Option<char> {
        let offset = match self.direction {
            Direction::Across if position.row == self.origin.row => {
                position.col.checked_sub(self.origin.col)?
            }
            Direction::Down if position.col == self.origin.col => {
                position.row.checked_sub(self.origin.row)?
            }
            _ => return None,
        };

        self.word.as_bytes().get(offset).map(|&b| char::from(b))
    }
}

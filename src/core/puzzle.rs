//! Finished puzzle handed to callers

use super::{Cell, Direction, Position};
use serde::{Deserialize, Serialize};

/// Grid dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    pub rows: usize,
    pub cols: usize,
}

/// One numbered clue with its answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    pub number: u32,
    pub clue: String,
    pub answer: String,
    pub direction: Direction,
    pub origin: Position,
    pub length: usize,
}

/// A generated crossword: cell matrix plus ordered clue list
///
/// Clues are ordered across first, then down, each by ascending number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPuzzle {
    pub size: GridSize,
    pub grid: Vec<Vec<Cell>>,
    pub clues: Vec<Clue>,
}

impl GeneratedPuzzle {
    /// Cell at `position`, if inside the grid
    #[must_use]
    pub fn cell(&self, position: Position) -> Option<&Cell> {
        self.grid.get(position.row)?.get(position.col)
    }

    /// Letter at `position`; `None` for empty, blocked or off-grid cells
    #[must_use]
    pub fn letter(&self, position: Position) -> Option<char> {
        self.cell(position).and_then(|cell| cell.letter)
    }

    /// Whether the cell matrix has exactly the declared `size`
    #[must_use]
    pub fn matches_size(&self) -> bool {
        self.grid.len() == self.size.rows
            && self.grid.iter().all(|row| row.len() == self.size.cols)
    }

    /// Clues running in `direction`, in order
    pub fn clues_in(&self, direction: Direction) -> impl Iterator<Item = &Clue> {
        self.clues.iter().filter(move |c| c.direction == direction)
    }

    /// Number of clues running in `direction`
    #[must_use]
    pub fn count(&self, direction: Direction) -> usize {
        self.clues_in(direction).count()
    }

    #[must_use]
    pub fn blocked_count(&self) -> usize {
        self.grid.iter().flatten().filter(|cell| cell.blocked).count()
    }

    /// Every row as a string: letters, `#` for blocks and `.` for empty cells
    ///
    /// Handy as a compact fingerprint of the grid.
    #[must_use]
    pub fn rows_as_text(&self) -> Vec<String> {
        self.grid
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| match (cell.blocked, cell.letter) {
                        (true, _) => '#',
                        (false, Some(letter)) => letter,
                        (false, None) => '.',
                    })
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_three() -> GeneratedPuzzle {
        GeneratedPuzzle {
            size: GridSize { rows: 2, cols: 3 },
            grid: vec![vec![Cell::default(); 3]; 2],
            clues: Vec::new(),
        }
    }

    #[test]
    fn size_matches_cells() {
        assert!(two_by_three().matches_size());
    }

    #[test]
    fn size_mismatch_detected() {
        let mut taller = two_by_three();
        taller.size.rows = 40;
        assert!(!taller.matches_size());

        let mut ragged = two_by_three();
        ragged.grid[1].pop();
        assert!(!ragged.matches_size());
    }
}

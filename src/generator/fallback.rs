//! Hand-built fallback puzzle
//!
//! Returned when every attempt fails and no partial result is good enough, so a
//! caller never receives an empty or broken grid.

use super::config::BlackSquarePolicy;
use super::finalize::{ClueSource, finalize};
use crate::core::{Direction, GeneratedPuzzle, Grid, Position};
use log::error;

const ROWS: usize = 5;
const COLS: usize = 3;

/// Word, origin row, origin column, direction; in a valid placement order
const WORDS: &[(&str, usize, usize, Direction)] = &[
    ("SUN", 0, 0, Direction::Across),
    ("SPARE", 0, 0, Direction::Down),
    ("NOTED", 0, 2, Direction::Down),
    ("ART", 2, 0, Direction::Across),
    ("END", 4, 0, Direction::Across),
];

const CLUES: &[(&str, &str)] = &[
    ("SUN", "Our star"),
    ("SPARE", "Extra, as a tire"),
    ("NOTED", "Famous"),
    ("ART", "Painting or sculpture"),
    ("END", "Conclusion"),
];

struct FallbackClues;

impl ClueSource for FallbackClues {
    fn clue_for(&self, word: &str) -> Option<&str> {
        CLUES
            .iter()
            .find(|(answer, _)| *answer == word)
            .map(|(_, clue)| *clue)
    }
}

/// The fixed 5x3 puzzle
///
/// ```text
/// S U N
/// P # O
/// A R T
/// R # E
/// E N D
/// ```
#[must_use]
pub fn fallback_puzzle() -> GeneratedPuzzle {
    let mut grid = Grid::new(ROWS, COLS);

    for &(word, row, col, direction) in WORDS {
        let origin = Position::new(row, col);
        match grid.can_place(word, origin, direction) {
            Ok(intersections) => grid.place(word, origin, direction, intersections),
            Err(e) => error!("Fallback word {word} rejected: {e}"),
        }
    }

    finalize(grid, BlackSquarePolicy::FillRemaining, &FallbackClues)
}

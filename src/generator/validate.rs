//! Final structural scan of a finished puzzle
//!
//! Read-only. The incremental checks during the search accept runs that may
//! still be completed later; only this pass certifies the whole grid.

use super::config::Minimums;
use super::error::ValidationError;
use crate::core::{Direction, GeneratedPuzzle, Position};

/// A maximal run of two or more letters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterRun {
    pub origin: Position,
    pub direction: Direction,
    pub text: String,
}

/// Every maximal letter run of length two or more, across runs first
///
/// Walks the cell matrix itself, never the declared `size`.
#[must_use]
pub fn letter_runs(puzzle: &GeneratedPuzzle) -> Vec<LetterRun> {
    let mut runs = Vec::new();

    for direction in Direction::ALL {
        for (row, cells) in puzzle.grid.iter().enumerate() {
            for col in 0..cells.len() {
                let origin = Position::new(row, col);
                let continues = origin
                    .step_back(direction, 1)
                    .is_some_and(|before| puzzle.letter(before).is_some());
                if continues {
                    continue;
                }

                let mut text = String::new();
                let mut at = origin;
                while let Some(letter) = puzzle.letter(at) {
                    text.push(letter);
                    at = at.step(direction, 1);
                }
                if text.len() >= 2 {
                    runs.push(LetterRun {
                        origin,
                        direction,
                        text,
                    });
                }
            }
        }
    }

    runs
}

/// Check every run against the clue list, every clue against the grid, and the
/// per-direction minimums
///
/// # Errors
/// Returns the first `ValidationError` found.
pub fn validate(puzzle: &GeneratedPuzzle, minimums: Minimums) -> Result<(), ValidationError> {
    for run in letter_runs(puzzle) {
        let matched = puzzle.clues.iter().any(|clue| {
            clue.origin == run.origin && clue.direction == run.direction && clue.answer == run.text
        });
        if !matched {
            return Err(ValidationError::InvalidRun {
                run: run.text,
                origin: run.origin,
                direction: run.direction,
            });
        }
    }

    for clue in &puzzle.clues {
        let mismatch = || ValidationError::ClueMismatch {
            number: clue.number,
            direction: clue.direction,
        };

        if clue.length != clue.answer.len() {
            return Err(mismatch());
        }
        if puzzle.cell(clue.origin).and_then(|cell| cell.number) != Some(clue.number) {
            return Err(mismatch());
        }
        let spelled = clue
            .answer
            .chars()
            .enumerate()
            .all(|(i, ch)| puzzle.letter(clue.origin.step(clue.direction, i)) == Some(ch));
        if !spelled {
            return Err(mismatch());
        }
    }

    let across = puzzle.count(Direction::Across);
    if across < minimums.across {
        return Err(ValidationError::TooFewAcross {
            found: across,
            required: minimums.across,
        });
    }
    let down = puzzle.count(Direction::Down);
    if down < minimums.down {
        return Err(ValidationError::TooFewDown {
            found: down,
            required: minimums.down,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Cell, Clue, GridSize};

    /// Builds a puzzle from text rows: letters, `#` blocks, `.` empty cells
    fn puzzle_from_rows(rows: &[&str], clues: Vec<Clue>) -> GeneratedPuzzle {
        let grid = rows
            .iter()
            .map(|row| {
                row.chars()
                    .map(|ch| match ch {
                        '#' => Cell::BLOCKED,
                        '.' => Cell::default(),
                        letter => Cell {
                            letter: Some(letter),
                            ..Cell::default()
                        },
                    })
                    .collect()
            })
            .collect();
        let mut puzzle = GeneratedPuzzle {
            size: GridSize {
                rows: rows.len(),
                cols: rows[0].len(),
            },
            grid,
            clues,
        };
        for clue in &puzzle.clues.clone() {
            puzzle.grid[clue.origin.row][clue.origin.col].number = Some(clue.number);
        }
        puzzle
    }

    fn clue(number: u32, answer: &str, row: usize, col: usize, direction: Direction) -> Clue {
        Clue {
            number,
            clue: format!("Clue for {answer}"),
            answer: answer.to_string(),
            direction,
            origin: Position::new(row, col),
            length: answer.len(),
        }
    }

    fn valid_puzzle() -> GeneratedPuzzle {
        puzzle_from_rows(
            &["#S...", "#TREE", "#A...", "#R..."],
            vec![
                clue(2, "TREE", 1, 1, Direction::Across),
                clue(1, "STAR", 0, 1, Direction::Down),
            ],
        )
    }

    #[test]
    fn finds_runs_in_both_directions() {
        let runs = letter_runs(&valid_puzzle());
        assert_eq!(
            runs,
            vec![
                LetterRun {
                    origin: Position::new(1, 1),
                    direction: Direction::Across,
                    text: "TREE".to_string(),
                },
                LetterRun {
                    origin: Position::new(0, 1),
                    direction: Direction::Down,
                    text: "STAR".to_string(),
                },
            ]
        );
    }

    #[test]
    fn accepts_consistent_puzzle() {
        assert_eq!(validate(&valid_puzzle(), Minimums::new(1, 1)), Ok(()));
    }

    #[test]
    fn rejects_orphan_run() {
        let puzzle = puzzle_from_rows(
            &["#S...", "#TREE", "#AX..", "#R..."],
            vec![
                clue(2, "TREE", 1, 1, Direction::Across),
                clue(1, "STAR", 0, 1, Direction::Down),
            ],
        );
        assert_eq!(
            validate(&puzzle, Minimums::NONE),
            Err(ValidationError::InvalidRun {
                run: "AX".to_string(),
                origin: Position::new(2, 1),
                direction: Direction::Across,
            })
        );
    }

    #[test]
    fn rejects_words_touching_end_to_end() {
        // TREE and EEL written back to back read as one run
        let puzzle = puzzle_from_rows(
            &["TREEEEL"],
            vec![
                clue(1, "TREE", 0, 0, Direction::Across),
                clue(2, "EEL", 0, 4, Direction::Across),
            ],
        );
        assert!(matches!(
            validate(&puzzle, Minimums::NONE),
            Err(ValidationError::InvalidRun { .. })
        ));
    }

    #[test]
    fn rejects_clue_that_disagrees_with_grid() {
        let mut puzzle = valid_puzzle();
        puzzle.clues.push(clue(3, "TOE", 1, 3, Direction::Down));
        puzzle.grid[1][3].number = Some(3);

        assert_eq!(
            validate(&puzzle, Minimums::NONE),
            Err(ValidationError::ClueMismatch {
                number: 3,
                direction: Direction::Down,
            })
        );
    }

    #[test]
    fn rejects_wrong_number() {
        let mut puzzle = valid_puzzle();
        puzzle.grid[1][1].number = Some(7);
        assert!(matches!(
            validate(&puzzle, Minimums::NONE),
            Err(ValidationError::ClueMismatch { number: 2, .. })
        ));
    }

    #[test]
    fn scan_ignores_oversized_declared_size() {
        let mut puzzle = valid_puzzle();
        puzzle.size = GridSize {
            rows: usize::MAX,
            cols: usize::MAX,
        };
        assert_eq!(letter_runs(&puzzle).len(), 2);
    }

    #[test]
    fn enforces_minimums() {
        assert_eq!(
            validate(&valid_puzzle(), Minimums::new(2, 1)),
            Err(ValidationError::TooFewAcross {
                found: 1,
                required: 2,
            })
        );
        assert_eq!(
            validate(&valid_puzzle(), Minimums::new(1, 3)),
            Err(ValidationError::TooFewDown {
                found: 1,
                required: 3,
            })
        );
    }
}

//! Grid finalization
//!
//! Closes off the searched grid with black squares, numbers the cells that start a
//! run, and builds the ordered clue list.

use super::config::BlackSquarePolicy;
use super::pattern::mirror_blocks;
use crate::core::{Cell, Clue, Direction, GeneratedPuzzle, Grid, GridSize, Position};
use crate::dictionary::DictionaryIndex;
use log::debug;

/// Supplies clue text for answers
pub trait ClueSource {
    /// Clue for `word`, or `None` if the word is unknown
    fn clue_for(&self, word: &str) -> Option<&str>;
}

impl ClueSource for DictionaryIndex {
    fn clue_for(&self, word: &str) -> Option<&str> {
        self.lookup(word).map(|entry| entry.clue.as_str())
    }
}

/// Add the black squares the policy asks for
///
/// Separators before and after every placed word come first, then the
/// policy-specific pass. Running it twice changes nothing.
pub fn close_grid(grid: &mut Grid, policy: BlackSquarePolicy) {
    let separators: Vec<Position> = grid
        .placements()
        .iter()
        .flat_map(|p| p.before().into_iter().chain(Some(p.after())))
        .collect();
    for at in separators {
        grid.block(at);
    }

    match policy {
        BlackSquarePolicy::GrowThenBlock => {}
        BlackSquarePolicy::FillRemaining => {
            let empty: Vec<Position> = grid.positions().filter(|&p| grid.is_empty(p)).collect();
            for at in empty {
                grid.block(at);
            }
        }
        BlackSquarePolicy::Symmetric { .. } => {
            let added = mirror_blocks(grid);
            debug!("Mirrored {added} black squares");
        }
    }
}

/// Whether a letter run of two or more starts at `at` in `direction`
fn starts_run(grid: &Grid, at: Position, direction: Direction) -> bool {
    let before_is_letter = at
        .step_back(direction, 1)
        .is_some_and(|before| grid.letter(before).is_some());
    grid.letter(at).is_some() && !before_is_letter && grid.letter(at.step(direction, 1)).is_some()
}

fn read_run(grid: &Grid, start: Position, direction: Direction) -> String {
    let mut run = String::new();
    let mut at = start;
    while let Some(letter) = grid.letter(at) {
        run.push(letter);
        at = at.step(direction, 1);
    }
    run
}

/// Number the grid and collect its clues
///
/// Cells are numbered in row-major order; a cell gets a number if it starts an
/// across or down run of two or more letters. A run whose text has no clue is left
/// out of the list, which the validator reports.
#[must_use]
pub fn build_puzzle(grid: &Grid, clues: &impl ClueSource) -> GeneratedPuzzle {
    let mut cells: Vec<Vec<Cell>> = (0..grid.rows()).map(|r| grid.row(r).to_vec()).collect();
    let mut across = Vec::new();
    let mut down = Vec::new();
    let mut number = 0;

    for at in grid.positions() {
        let starts: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&d| starts_run(grid, at, d))
            .collect();
        if starts.is_empty() {
            continue;
        }

        number += 1;
        cells[at.row][at.col].number = Some(number);

        for direction in starts {
            let answer = read_run(grid, at, direction);
            let Some(text) = clues.clue_for(&answer) else {
                debug!("No clue for {answer} {direction} at {at}");
                continue;
            };
            let clue = Clue {
                number,
                clue: text.to_string(),
                length: answer.len(),
                answer,
                direction,
                origin: at,
            };
            match direction {
                Direction::Across => across.push(clue),
                Direction::Down => down.push(clue),
            }
        }
    }

    across.extend(down);
    GeneratedPuzzle {
        size: GridSize {
            rows: grid.rows(),
            cols: grid.cols(),
        },
        grid: cells,
        clues: across,
    }
}

/// Close the grid under `policy` and turn it into a puzzle
#[must_use]
pub fn finalize(
    mut grid: Grid,
    policy: BlackSquarePolicy,
    clues: &impl ClueSource,
) -> GeneratedPuzzle {
    close_grid(&mut grid, policy);
    build_puzzle(&grid, clues)
}

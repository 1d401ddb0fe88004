//! Formatting utilities for terminal output

use crate::core::{Cell, Clue, GeneratedPuzzle};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

fn render_cell(cell: &Cell, reveal: bool) -> String {
    match (cell.blocked, cell.letter, cell.number) {
        (true, _, _) => "██".to_string(),
        (false, Some(letter), _) if reveal => format!(" {letter}"),
        (false, Some(_), Some(number)) => format!("{number:>2}"),
        (false, Some(_), None) => " ·".to_string(),
        (false, None, _) => "  ".to_string(),
    }
}

/// Render the grid one line per row
///
/// With `reveal` every letter is shown; otherwise white cells show their clue
/// number or a dot.
#[must_use]
pub fn render_grid(puzzle: &GeneratedPuzzle, reveal: bool) -> Vec<String> {
    puzzle
        .grid
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| render_cell(cell, reveal))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// One clue line: number, text, length and optionally the answer
#[must_use]
pub fn format_clue(clue: &Clue, reveal: bool) -> String {
    let line = format!("{:>3}. {} ({})", clue.number, clue.clue, clue.length);
    if reveal {
        format!("{line}  {}", clue.answer)
    } else {
        line
    }
}

/// Copy of `puzzle` with every letter and answer removed, ready to publish
#[must_use]
pub fn strip_answers(puzzle: &GeneratedPuzzle) -> GeneratedPuzzle {
    let mut blank = puzzle.clone();
    for cell in blank.grid.iter_mut().flatten() {
        cell.letter = None;
    }
    for clue in &mut blank.clues {
        clue.answer.clear();
    }
    blank
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::fallback_puzzle;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(3.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn revealed_grid() {
        let lines = render_grid(&fallback_puzzle(), true);
        assert_eq!(
            lines,
            vec![" S  U  N", " P ██  O", " A  R  T", " R ██  E", " E  N  D"]
        );
    }

    #[test]
    fn blank_grid_shows_numbers() {
        let lines = render_grid(&fallback_puzzle(), false);
        assert_eq!(
            lines,
            vec![" 1  ·  2", " · ██  ·", " 3  ·  ·", " · ██  ·", " 4  ·  ·"]
        );
    }

    #[test]
    fn clue_line() {
        let puzzle = fallback_puzzle();
        let sun = &puzzle.clues[0];

        assert_eq!(format_clue(sun, false), "  1. Our star (3)");
        assert_eq!(format_clue(sun, true), "  1. Our star (3)  SUN");
    }

    #[test]
    fn stripped_puzzle_keeps_structure() {
        let puzzle = fallback_puzzle();
        let blank = strip_answers(&puzzle);

        assert!(blank.grid.iter().flatten().all(|cell| cell.letter.is_none()));
        assert!(blank.clues.iter().all(|clue| clue.answer.is_empty()));
        assert_eq!(blank.blocked_count(), puzzle.blocked_count());
        assert_eq!(blank.clues.len(), puzzle.clues.len());
        assert_eq!(blank.grid[2][0].number, Some(3));
    }
}

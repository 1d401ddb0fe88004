//! Check command
//!
//! Re-validates a puzzle saved as JSON.

use crate::core::{Direction, GeneratedPuzzle, GridSize};
use crate::dictionary::DictionaryIndex;
use crate::generator::{Minimums, ValidationError, validate};
use std::fs;
use std::path::Path;

/// Result of checking one puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub size: GridSize,
    pub across: usize,
    pub down: usize,
    pub blocked: usize,
    pub validation: Result<(), ValidationError>,
    /// Answers the dictionary does not know, in clue order
    pub unknown_answers: Vec<String>,
}

impl CheckResult {
    /// Structurally valid and every answer known
    #[must_use]
    pub fn passed(&self) -> bool {
        self.validation.is_ok() && self.unknown_answers.is_empty()
    }
}

/// Check a puzzle against `minimums`, and its answers against `index` if given
#[must_use]
pub fn check_puzzle(
    puzzle: &GeneratedPuzzle,
    minimums: Minimums,
    index: Option<&DictionaryIndex>,
) -> CheckResult {
    let unknown_answers = index.map_or_else(Vec::new, |index| {
        puzzle
            .clues
            .iter()
            .filter(|clue| !index.contains(&clue.answer))
            .map(|clue| clue.answer.clone())
            .collect()
    });

    CheckResult {
        size: puzzle.size,
        across: puzzle.count(Direction::Across),
        down: puzzle.count(Direction::Down),
        blocked: puzzle.blocked_count(),
        validation: validate(puzzle, minimums),
        unknown_answers,
    }
}

/// Read a puzzle JSON file and check it
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not hold a puzzle.
pub fn check_puzzle_file<P: AsRef<Path>>(
    path: P,
    minimums: Minimums,
    index: Option<&DictionaryIndex>,
) -> Result<CheckResult, String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| format!("Cannot read {}: {e}", path.display()))?;
    let puzzle: GeneratedPuzzle = serde_json::from_str(&content)
        .map_err(|e| format!("{} is not a puzzle: {e}", path.display()))?;
    if !puzzle.matches_size() {
        return Err(format!(
            "{} declares a {}x{} grid that its cells do not match",
            path.display(),
            puzzle.size.rows,
            puzzle.size.cols
        ));
    }

    Ok(check_puzzle(&puzzle, minimums, index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{DictionaryEntry, embedded_index};
    use crate::generator::fallback_puzzle;
    use std::env;

    #[test]
    fn fallback_passes_structure() {
        let result = check_puzzle(&fallback_puzzle(), Minimums::new(3, 2), None);

        assert!(result.passed());
        assert_eq!(result.across, 3);
        assert_eq!(result.down, 2);
        assert_eq!(result.blocked, 2);
    }

    #[test]
    fn minimums_are_enforced() {
        let result = check_puzzle(&fallback_puzzle(), Minimums::new(5, 5), None);
        assert_eq!(
            result.validation,
            Err(ValidationError::TooFewAcross {
                found: 3,
                required: 5,
            })
        );
        assert!(!result.passed());
    }

    #[test]
    fn unknown_answers_listed() {
        let entries = [DictionaryEntry::new("SUN", "Our star", true, false, []).unwrap()];
        let index = DictionaryIndex::build(entries, None);

        let result = check_puzzle(&fallback_puzzle(), Minimums::NONE, Some(&index));
        assert_eq!(result.unknown_answers, vec!["ART", "END", "SPARE", "NOTED"]);
        assert!(!result.passed());
    }

    #[test]
    fn tampered_letter_detected() {
        let mut puzzle = fallback_puzzle();
        puzzle.grid[2][1].letter = Some('X');

        let result = check_puzzle(&puzzle, Minimums::NONE, None);
        assert!(result.validation.is_err());
    }

    #[test]
    fn reads_saved_json() {
        let index = embedded_index();
        let path = env::temp_dir().join("daily_crossword_check_test.json");
        let json = serde_json::to_string(&fallback_puzzle()).unwrap();
        fs::write(&path, json).unwrap();

        let result = check_puzzle_file(&path, Minimums::NONE, Some(&index));
        fs::remove_file(&path).ok();

        assert!(result.unwrap().validation.is_ok());
    }

    #[test]
    fn rejects_non_puzzle_json() {
        let path = env::temp_dir().join("daily_crossword_check_bad.json");
        fs::write(&path, "[1, 2, 3]").unwrap();

        let result = check_puzzle_file(&path, Minimums::NONE, None);
        fs::remove_file(&path).ok();

        assert!(result.is_err());
    }

    #[test]
    fn rejects_declared_size_mismatch() {
        let mut puzzle = fallback_puzzle();
        puzzle.size.rows = 1_000_000_000;
        let path = env::temp_dir().join("daily_crossword_check_size.json");
        fs::write(&path, serde_json::to_string(&puzzle).unwrap()).unwrap();

        let result = check_puzzle_file(&path, Minimums::NONE, None);
        fs::remove_file(&path).ok();

        assert!(result.unwrap_err().contains("do not match"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = check_puzzle_file("no/such/puzzle.json", Minimums::NONE, None);
        assert!(result.unwrap_err().contains("Cannot read"));
    }
}

//! Grid cell representation

use serde::{Deserialize, Serialize};

/// One square of the crossword
///
/// A cell is either blocked or holds at most one letter. `number` is only set on
/// a cell that starts an across or down run of two or more letters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub letter: Option<char>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<u32>,
    #[serde(default)]
    pub blocked: bool,
}

impl Cell {
    /// A blocked (black) square
    pub const BLOCKED: Self = Self {
        letter: None,
        number: None,
        blocked: true,
    };

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !self.blocked && self.letter.is_none()
    }

    #[inline]
    #[must_use]
    pub const fn has_letter(&self) -> bool {
        self.letter.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_cell_is_empty() {
        let cell = Cell::default();
        assert!(cell.is_empty());
        assert!(!cell.has_letter());
    }

    #[test]
    fn blocked_cell_is_not_empty() {
        assert!(!Cell::BLOCKED.is_empty());
        assert!(!Cell::BLOCKED.has_letter());
    }

    #[test]
    fn json_omits_missing_number() {
        let cell = Cell {
            letter: Some('A'),
            number: None,
            blocked: false,
        };
        let json = serde_json::to_string(&cell).unwrap();
        assert_eq!(json, r#"{"letter":"A","blocked":false}"#);

        let back: Cell = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cell);
    }
}

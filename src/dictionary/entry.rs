//! Dictionary entry representation
//!
//! A `RawEntry` is one unvalidated source row; a `DictionaryEntry` is a row that
//! passed every filter and can be placed in a grid.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Shortest word the generator will place
pub const MIN_WORD_LEN: usize = 3;

/// Longest word the generator will place
pub const MAX_WORD_LEN: usize = 15;

/// One source row before validation
///
/// `categories` is a comma-separated tag list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEntry<'a> {
    pub word: &'a str,
    pub clue: &'a str,
    pub common: bool,
    pub obscure: bool,
    pub categories: &'a str,
}

impl<'a> RawEntry<'a> {
    /// Parse a tab-separated row: `word, clue, common, obscure, categories`
    ///
    /// Trailing columns may be omitted. Returns `None` for blank lines, `#` comments
    /// and rows without a clue column.
    ///
    /// # Examples
    /// ```
    /// use daily_crossword::dictionary::RawEntry;
    ///
    /// let row = RawEntry::parse_tsv("galaxy\tMilky Way, for one\t1\t0\tspace").unwrap();
    /// assert_eq!(row.word, "galaxy");
    /// assert!(row.common);
    /// assert!(!row.obscure);
    /// assert!(RawEntry::parse_tsv("# comment").is_none());
    /// ```
    #[must_use]
    pub fn parse_tsv(line: &'a str) -> Option<Self> {
        if line.trim().is_empty() || line.starts_with('#') {
            return None;
        }

        let mut fields = line.split('\t').map(str::trim);
        let word = fields.next()?;
        let clue = fields.next()?;

        Some(Self {
            word,
            clue,
            common: fields.next().is_some_and(parse_flag),
            obscure: fields.next().is_some_and(parse_flag),
            categories: fields.next().unwrap_or(""),
        })
    }

    /// Category tags, trimmed, empty tags dropped
    pub fn category_tags(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.categories
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
    }
}

/// Interpret a flag column
#[must_use]
pub fn parse_flag(field: &str) -> bool {
    matches!(
        field.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "y"
    )
}

/// Why a source row was left out of the index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryError {
    InvalidLength(usize),
    InvalidCharacters,
    MissingClue,
    Obscure,
}

impl fmt::Display for EntryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => write!(
                f,
                "Word must be {MIN_WORD_LEN} to {MAX_WORD_LEN} letters, got {len}"
            ),
            Self::InvalidCharacters => write!(f, "Word must contain only letters A-Z"),
            Self::MissingClue => write!(f, "Entry has no clue"),
            Self::Obscure => write!(f, "Entry is flagged obscure"),
        }
    }
}

impl std::error::Error for EntryError {}

/// A usable word with its clue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryEntry {
    pub word: String,
    pub clue: String,
    pub common: bool,
    pub categories: Vec<String>,
}

impl DictionaryEntry {
    /// Validate and normalize one row
    ///
    /// The word is trimmed and upper-cased before the checks; category tags are
    /// lower-cased.
    ///
    /// # Errors
    /// Returns `EntryError` if:
    /// - The entry is flagged obscure
    /// - The word is not 3 to 15 letters long
    /// - The word contains anything other than A-Z
    /// - The clue is blank
    ///
    /// # Examples
    /// ```
    /// use daily_crossword::dictionary::DictionaryEntry;
    ///
    /// let entry =
    ///     DictionaryEntry::new("planet", "Mars or Venus", true, false, ["Space"]).unwrap();
    /// assert_eq!(entry.word, "PLANET");
    /// assert_eq!(entry.categories, vec!["space".to_string()]);
    ///
    /// assert!(DictionaryEntry::new("ice cream", "Cold treat", true, false, []).is_err());
    /// ```
    pub fn new<'c>(
        word: &str,
        clue: &str,
        common: bool,
        obscure: bool,
        categories: impl IntoIterator<Item = &'c str>,
    ) -> Result<Self, EntryError> {
        if obscure {
            return Err(EntryError::Obscure);
        }

        let word = word.trim().to_ascii_uppercase();
        if !(MIN_WORD_LEN..=MAX_WORD_LEN).contains(&word.len()) {
            return Err(EntryError::InvalidLength(word.len()));
        }
        if !word.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(EntryError::InvalidCharacters);
        }

        let clue = clue.trim();
        if clue.is_empty() {
            return Err(EntryError::MissingClue);
        }

        Ok(Self {
            word,
            clue: clue.to_string(),
            common,
            categories: categories
                .into_iter()
                .map(|tag| tag.trim().to_lowercase())
                .filter(|tag| !tag.is_empty())
                .collect(),
        })
    }

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

    /// Case-insensitive category membership
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        let category = category.trim();
        self.categories
            .iter()
            .any(|tag| tag.eq_ignore_ascii_case(category))
    }
}

impl TryFrom<RawEntry<'_>> for DictionaryEntry {
    type Error = EntryError;

    fn try_from(raw: RawEntry<'_>) -> Result<Self, Self::Error> {
        Self::new(raw.word, raw.clue, raw.common, raw.obscure, raw.category_tags())
    }
}

impl fmt::Display for DictionaryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.word, self.clue)
    }
}

//! Generator configuration and named presets
//!
//! The compact, standard and symmetric generators are one engine run with
//! different settings.

use super::error::ConfigurationError;
use crate::dictionary::{MAX_WORD_LEN, MIN_WORD_LEN};
use std::fmt;

/// Largest grid side the generator accepts
pub const MAX_GRID_SIDE: usize = 25;

/// When black squares are added
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum BlackSquarePolicy {
    /// Only the separators placed alongside each word
    GrowThenBlock,
    /// Separators, then every cell left empty
    #[default]
    FillRemaining,
    /// A 180-degree symmetric pattern laid down before the search, mirrored
    /// again at finalization
    Symmetric { max_black_ratio: f64 },
}

/// What to return when every attempt fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Degradation {
    /// The largest structurally valid attempt, if it clears the relaxed floor
    #[default]
    BestPartial,
    /// Always the fixed hand-built puzzle
    Fallback,
}

/// Required clue counts per direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Minimums {
    pub across: usize,
    pub down: usize,
}

impl Minimums {
    /// No requirement at all
    pub const NONE: Self = Self { across: 0, down: 0 };

    #[must_use]
    pub const fn new(across: usize, down: usize) -> Self {
        Self { across, down }
    }

    #[must_use]
    pub const fn total(self) -> usize {
        self.across + self.down
    }
}

/// All knobs of one generator
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub rows: usize,
    pub cols: usize,
    /// Words to place before the search stops growing
    pub target_words: usize,
    pub minimums: Minimums,
    /// Full attempts before degrading
    pub max_attempts: usize,
    /// Consecutive failed growth steps before an attempt gives up
    pub max_failures: usize,
    /// Words undone and banned per attempt before failures stop backtracking
    pub max_backtracks: usize,
    /// Candidate words tried per connection point
    pub candidate_cap: usize,
    /// Growth alternates direction until this many words are placed
    pub alternate_until: usize,
    pub black_squares: BlackSquarePolicy,
    pub degradation: Degradation,
    /// Fewest clues a partial attempt needs to be returned
    pub relaxed_min_words: usize,
    /// Fewest usable words worth searching; smaller pools degrade straight away
    pub min_pool_words: usize,
    /// Preferred words for the first placement
    pub seed_words: Vec<String>,
    /// Words tried before any others, the first one as the seed word
    pub theme_words: Vec<String>,
}

const CURATED_SEEDS: &[&str] = &[
    "GALAXY", "PLANET", "GARDEN", "ISLAND", "CASTLE", "DRAGON", "MARKET", "WINTER", "SUMMER",
    "RIVER", "FOREST", "TEACHER", "LIBRARY", "RAINBOW", "THUNDER", "KITCHEN",
];

impl GeneratorConfig {
    /// 13x13 free-form grid, the daily default
    #[must_use]
    pub fn compact() -> Self {
        Self {
            rows: 13,
            cols: 13,
            target_words: 16,
            minimums: Minimums::new(5, 5),
            max_attempts: 12,
            max_failures: 12,
            max_backtracks: 24,
            candidate_cap: 60,
            alternate_until: 4,
            black_squares: BlackSquarePolicy::FillRemaining,
            degradation: Degradation::BestPartial,
            relaxed_min_words: 6,
            min_pool_words: 15,
            seed_words: CURATED_SEEDS.iter().map(ToString::to_string).collect(),
            theme_words: Vec::new(),
        }
    }

    /// 15x15 grid with a higher word count
    #[must_use]
    pub fn standard() -> Self {
        Self {
            rows: 15,
            cols: 15,
            target_words: 30,
            minimums: Minimums::new(8, 8),
            max_attempts: 20,
            max_failures: 16,
            max_backtracks: 32,
            black_squares: BlackSquarePolicy::GrowThenBlock,
            relaxed_min_words: 10,
            ..Self::compact()
        }
    }

    /// 15x15 grid on a pre-laid symmetric block pattern
    #[must_use]
    pub fn symmetric() -> Self {
        Self {
            rows: 15,
            cols: 15,
            target_words: 24,
            minimums: Minimums::new(6, 6),
            max_attempts: 20,
            black_squares: BlackSquarePolicy::Symmetric {
                max_black_ratio: 0.16,
            },
            relaxed_min_words: 8,
            ..Self::compact()
        }
    }

    /// Check that an attempt could ever succeed with these settings
    ///
    /// # Errors
    /// Returns `ConfigurationError` if:
    /// - Either side is shorter than the shortest word or longer than `MAX_GRID_SIDE`
    /// - The minimums add up to more than the target
    /// - Attempts, failures or the candidate cap are zero
    /// - A symmetric black-square ratio lies outside `[0, 1)`
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let side = MIN_WORD_LEN..=MAX_GRID_SIDE;
        if !side.contains(&self.rows) || !side.contains(&self.cols) {
            return Err(ConfigurationError::InvalidGridSize {
                rows: self.rows,
                cols: self.cols,
            });
        }

        if self.minimums.total() > self.target_words {
            return Err(ConfigurationError::InvalidMinimums {
                across: self.minimums.across,
                down: self.minimums.down,
                target: self.target_words,
            });
        }

        if self.max_attempts == 0 {
            return Err(ConfigurationError::InvalidSetting(
                "max_attempts must be at least 1".to_string(),
            ));
        }
        if self.max_failures == 0 {
            return Err(ConfigurationError::InvalidSetting(
                "max_failures must be at least 1".to_string(),
            ));
        }
        if self.candidate_cap == 0 {
            return Err(ConfigurationError::InvalidSetting(
                "candidate_cap must be at least 1".to_string(),
            ));
        }

        if let BlackSquarePolicy::Symmetric { max_black_ratio } = self.black_squares {
            if !(0.0..1.0).contains(&max_black_ratio) {
                return Err(ConfigurationError::InvalidSetting(format!(
                    "max_black_ratio {max_black_ratio} must be in [0, 1)"
                )));
            }
        }

        Ok(())
    }

    /// Longest word that fits in either direction
    #[must_use]
    pub fn max_word_len(&self) -> usize {
        self.rows.max(self.cols).min(MAX_WORD_LEN)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::compact()
    }
}

/// Named configuration presets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preset {
    #[default]
    Compact,
    Standard,
    Symmetric,
}

impl Preset {
    pub const ALL: [Self; 3] = [Self::Compact, Self::Standard, Self::Symmetric];

    /// Look a preset up by name, case-insensitive
    ///
    /// # Examples
    /// ```
    /// use daily_crossword::generator::Preset;
    ///
    /// assert_eq!(Preset::from_name("Standard"), Some(Preset::Standard));
    /// assert_eq!(Preset::from_name("giant"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|preset| preset.name().eq_ignore_ascii_case(name.trim()))
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Compact => "compact",
            Self::Standard => "standard",
            Self::Symmetric => "symmetric",
        }
    }

    #[must_use]
    pub fn config(self) -> GeneratorConfig {
        match self {
            Self::Compact => GeneratorConfig::compact(),
            Self::Standard => GeneratorConfig::standard(),
            Self::Symmetric => GeneratorConfig::symmetric(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

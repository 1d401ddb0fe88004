//! Generation orchestrator
//!
//! Runs bounded attempts of search, finalization and validation, and degrades to
//! a partial or hand-built puzzle when none succeeds.

use super::config::{BlackSquarePolicy, Degradation, GeneratorConfig, Minimums};
use super::error::{AttemptError, ConfigurationError};
use super::fallback::fallback_puzzle;
use super::finalize::finalize;
use super::pattern::symmetric_pattern;
use super::placement::PlacementEngine;
use super::rng::SeededRng;
use super::validate::validate;
use crate::core::{Direction, GeneratedPuzzle, Grid};
use crate::dictionary::{DictionaryIndex, EntryId};
use log::{debug, info, warn};
use std::borrow::Cow;
use std::fmt;

/// How a puzzle came about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// An attempt passed every check
    Complete,
    /// Every attempt failed; the best structurally valid one was kept
    Partial,
    /// Every attempt failed; the hand-built puzzle was returned
    Fallback,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Complete => "complete",
            Self::Partial => "partial",
            Self::Fallback => "fallback",
        })
    }
}

/// A puzzle plus how it was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub puzzle: GeneratedPuzzle,
    pub outcome: Outcome,
    /// Attempts run, including the successful one
    pub attempts: usize,
}

/// Deterministic crossword generator
///
/// Borrows a shared dictionary index; any number of generators may use the same
/// index from different threads.
pub struct Generator<'a> {
    index: &'a DictionaryIndex,
    config: GeneratorConfig,
}

impl<'a> Generator<'a> {
    #[must_use]
    pub const fn new(index: &'a DictionaryIndex, config: GeneratorConfig) -> Self {
        Self { index, config }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the puzzle for `seed`
    ///
    /// # Errors
    /// Returns `ConfigurationError` if the configuration is invalid, the dictionary
    /// is empty, or `category` matches no words.
    ///
    /// # Examples
    /// ```
    /// use daily_crossword::dictionary::embedded_index;
    /// use daily_crossword::generator::{Generator, GeneratorConfig};
    ///
    /// let index = embedded_index();
    /// let generator = Generator::new(&index, GeneratorConfig::default());
    /// let first = generator.generate("2024-01-01|secret", None).unwrap();
    /// let second = generator.generate("2024-01-01|secret", None).unwrap();
    /// assert_eq!(first, second);
    /// ```
    pub fn generate(
        &self,
        seed: &str,
        category: Option<&str>,
    ) -> Result<GeneratedPuzzle, ConfigurationError> {
        self.generate_with_report(seed, category)
            .map(|generation| generation.puzzle)
    }

    /// Like [`Generator::generate`], also reporting the outcome and attempt count
    ///
    /// # Errors
    /// Same as [`Generator::generate`].
    pub fn generate_with_report(
        &self,
        seed: &str,
        category: Option<&str>,
    ) -> Result<Generation, ConfigurationError> {
        self.config.validate()?;
        let index = self.select_index(category)?;
        if index.len() < self.config.min_pool_words {
            warn!(
                "Only {} usable words, {} needed to search",
                index.len(),
                self.config.min_pool_words
            );
            return Ok(self.degrade(None, 0));
        }

        let theme = self.theme_ids(&index);
        let mut rng = SeededRng::from_seed(seed);
        let mut best: Option<GeneratedPuzzle> = None;

        for attempt in 1..=self.config.max_attempts {
            let (puzzle, result) = self.attempt(&index, &theme, &mut rng);

            match result {
                Ok(()) => {
                    info!(
                        "Generated {} across, {} down on attempt {attempt}",
                        puzzle.count(Direction::Across),
                        puzzle.count(Direction::Down)
                    );
                    return Ok(Generation {
                        puzzle,
                        outcome: Outcome::Complete,
                        attempts: attempt,
                    });
                }
                Err(e) => {
                    debug!("Attempt {attempt} failed: {e}");
                    let larger = best
                        .as_ref()
                        .is_none_or(|b| puzzle.clues.len() > b.clues.len());
                    if larger && self.is_usable_partial(&puzzle) {
                        best = Some(puzzle);
                    }
                }
            }
        }

        Ok(self.degrade(best, self.config.max_attempts))
    }

    /// Pick the terminal result once no attempt succeeded
    fn degrade(&self, best: Option<GeneratedPuzzle>, attempts: usize) -> Generation {
        match (self.config.degradation, best) {
            (Degradation::BestPartial, Some(puzzle)) => {
                warn!(
                    "No complete puzzle after {attempts} attempts; keeping partial with {} clues",
                    puzzle.clues.len()
                );
                Generation {
                    puzzle,
                    outcome: Outcome::Partial,
                    attempts,
                }
            }
            _ => {
                warn!("No complete puzzle after {attempts} attempts; returning fallback puzzle");
                Generation {
                    puzzle: fallback_puzzle(),
                    outcome: Outcome::Fallback,
                    attempts,
                }
            }
        }
    }

    /// The shared index, or a filtered copy for a category
    fn select_index(
        &self,
        category: Option<&str>,
    ) -> Result<Cow<'a, DictionaryIndex>, ConfigurationError> {
        if self.index.is_empty() {
            return Err(ConfigurationError::EmptyDictionary);
        }

        match category.map(str::trim).filter(|c| !c.is_empty()) {
            None => Ok(Cow::Borrowed(self.index)),
            Some(category) => {
                let filtered = self.index.with_category(category);
                if filtered.is_empty() {
                    return Err(ConfigurationError::NoWordsInCategory(category.to_string()));
                }
                debug!("Category {category} has {} words", filtered.len());
                Ok(Cow::Owned(filtered))
            }
        }
    }

    /// Theme words present in `index`, in the order given
    fn theme_ids(&self, index: &DictionaryIndex) -> Vec<EntryId> {
        let mut ids: Vec<EntryId> = Vec::new();
        for word in &self.config.theme_words {
            match index.id_of(&word.trim().to_ascii_uppercase()) {
                Some(id) if !ids.contains(&id) => ids.push(id),
                Some(_) => {}
                None => warn!("Theme word {word} is not in the dictionary"),
            }
        }
        ids
    }

    /// One fresh grid through search, finalization and validation
    fn attempt(
        &self,
        index: &DictionaryIndex,
        theme: &[EntryId],
        rng: &mut SeededRng,
    ) -> (GeneratedPuzzle, Result<(), AttemptError>) {
        let config = &self.config;
        let mut grid = Grid::new(config.rows, config.cols);

        if let BlackSquarePolicy::Symmetric { max_black_ratio } = config.black_squares {
            for at in symmetric_pattern(config.rows, config.cols, max_black_ratio, rng) {
                grid.block(at);
            }
        }

        let mut engine = PlacementEngine::new(index, config, theme, grid);
        let searched = engine.run(rng);
        let puzzle = finalize(engine.into_grid(), config.black_squares, index);

        let result =
            searched.and_then(|()| validate(&puzzle, config.minimums).map_err(AttemptError::from));
        (puzzle, result)
    }

    /// Every run valid and enough clues to be worth returning
    fn is_usable_partial(&self, puzzle: &GeneratedPuzzle) -> bool {
        puzzle.clues.len() >= self.config.relaxed_min_words
            && validate(puzzle, Minimums::NONE).is_ok()
    }
}

//! Generate command
//!
//! Turns a date and secret (or a raw seed) into one puzzle.

use crate::dictionary::DictionaryIndex;
use crate::generator::{Generation, Generator, Preset, daily_seed};
use chrono::NaiveDate;
use log::warn;

/// Configuration for generating one puzzle
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub date: NaiveDate,
    pub secret: Option<String>,
    /// Used verbatim instead of `date|secret` when set
    pub seed: Option<String>,
    pub category: Option<String>,
    pub preset: Preset,
    pub theme: Vec<String>,
    /// Overrides the preset's attempt count
    pub attempts: Option<usize>,
}

impl GenerateConfig {
    #[must_use]
    pub const fn new(date: NaiveDate) -> Self {
        Self {
            date,
            secret: None,
            seed: None,
            category: None,
            preset: Preset::Compact,
            theme: Vec::new(),
            attempts: None,
        }
    }

    /// The seed string this configuration generates from
    #[must_use]
    pub fn seed(&self) -> String {
        if let Some(seed) = &self.seed {
            return seed.clone();
        }
        let secret = self.secret.as_deref().unwrap_or_default();
        if secret.is_empty() {
            warn!("No secret given; the puzzle for {} is predictable", self.date);
        }
        daily_seed(self.date, secret)
    }
}

/// Result of generating one puzzle
#[derive(Debug, Clone)]
pub struct GenerateResult {
    pub seed: String,
    pub date: NaiveDate,
    pub preset: Preset,
    pub category: Option<String>,
    pub generation: Generation,
}

/// Generate the puzzle described by `config`
///
/// # Errors
///
/// Returns an error if:
/// - The attempt override is zero
/// - The dictionary is empty or the category matches no words
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use daily_crossword::commands::{GenerateConfig, generate_puzzle};
/// use daily_crossword::dictionary::embedded_index;
///
/// let index = embedded_index();
/// let mut config = GenerateConfig::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
/// config.secret = Some("secret".to_string());
///
/// let result = generate_puzzle(&config, &index).unwrap();
/// assert_eq!(result.seed, "2024-01-01|secret");
/// ```
pub fn generate_puzzle(
    config: &GenerateConfig,
    index: &DictionaryIndex,
) -> Result<GenerateResult, String> {
    let mut generator_config = config.preset.config();
    if let Some(attempts) = config.attempts {
        if attempts == 0 {
            return Err("Attempt count must be at least 1".to_string());
        }
        generator_config.max_attempts = attempts;
    }
    generator_config.theme_words.extend(config.theme.iter().cloned());

    let seed = config.seed();
    let generation = Generator::new(index, generator_config)
        .generate_with_report(&seed, config.category.as_deref())
        .map_err(|e| format!("Cannot generate puzzle: {e}"))?;

    Ok(GenerateResult {
        seed,
        date: config.date,
        preset: config.preset,
        category: config.category.clone(),
        generation,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::embedded_index;
    use crate::generator::Outcome;

    fn new_year() -> GenerateConfig {
        let mut config = GenerateConfig::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        config.secret = Some("secret".to_string());
        config
    }

    #[test]
    fn seed_joins_date_and_secret() {
        assert_eq!(new_year().seed(), "2024-01-01|secret");
    }

    #[test]
    fn raw_seed_wins() {
        let mut config = new_year();
        config.seed = Some("custom".to_string());
        assert_eq!(config.seed(), "custom");
    }

    #[test]
    fn missing_secret_still_seeds() {
        let config = GenerateConfig::new(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap());
        assert_eq!(config.seed(), "2024-03-09|");
    }

    #[test]
    fn generates_complete_puzzle() {
        let index = embedded_index();
        let result = generate_puzzle(&new_year(), &index).unwrap();

        assert_eq!(result.generation.outcome, Outcome::Complete);
        assert_eq!(result.preset, Preset::Compact);
        assert!(!result.generation.puzzle.clues.is_empty());
    }

    #[test]
    fn same_config_same_puzzle() {
        let index = embedded_index();
        let first = generate_puzzle(&new_year(), &index).unwrap();
        let second = generate_puzzle(&new_year(), &index).unwrap();
        assert_eq!(first.generation.puzzle, second.generation.puzzle);
    }

    #[test]
    fn zero_attempts_rejected() {
        let index = embedded_index();
        let mut config = new_year();
        config.attempts = Some(0);
        assert!(generate_puzzle(&config, &index).is_err());
    }

    #[test]
    fn unknown_category_is_an_error() {
        let index = embedded_index();
        let mut config = new_year();
        config.category = Some("dinosaurs".to_string());

        let err = generate_puzzle(&config, &index).unwrap_err();
        assert!(err.contains("dinosaurs"));
    }
}

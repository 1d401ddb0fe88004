//! Benchmark command
//!
//! Generates puzzles for a run of consecutive dates and summarizes how they came
//! out.

use crate::dictionary::DictionaryIndex;
use crate::generator::{Generation, Generator, Outcome, Preset, daily_seed};
use chrono::{Days, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Configuration for a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkConfig {
    pub start: NaiveDate,
    pub days: usize,
    pub secret: String,
    pub category: Option<String>,
    pub preset: Preset,
    pub show_progress: bool,
}

impl BenchmarkConfig {
    #[must_use]
    pub const fn new(start: NaiveDate, days: usize) -> Self {
        Self {
            start,
            days,
            secret: String::new(),
            category: None,
            preset: Preset::Compact,
            show_progress: true,
        }
    }
}

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_puzzles: usize,
    pub complete: usize,
    pub partial: usize,
    pub fallback: usize,
    pub average_words: f64,
    pub min_words: usize,
    pub max_words: usize,
    pub average_attempts: f64,
    pub average_blocked: f64,
    /// Puzzles whose grid differs from every other one in the run
    pub distinct_grids: usize,
    /// Clue count to number of puzzles
    pub distribution: BTreeMap<usize, usize>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Run the generator over `config.days` consecutive dates
///
/// Dates are generated in parallel; each one is independent and deterministic,
/// so the summary does not depend on scheduling.
///
/// # Errors
///
/// Returns an error if:
/// - `days` is zero or the date range overflows the calendar
/// - The dictionary is empty or the category matches no words
pub fn run_benchmark(
    config: &BenchmarkConfig,
    index: &DictionaryIndex,
) -> Result<BenchmarkResult, String> {
    if config.days == 0 {
        return Err("Benchmark needs at least one day".to_string());
    }

    let dates = (0..config.days as u64)
        .map(|offset| {
            config
                .start
                .checked_add_days(Days::new(offset))
                .ok_or_else(|| format!("Date range overflows after {offset} days"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    let pb = if config.show_progress {
        ProgressBar::new(dates.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .map_err(|e| format!("Invalid progress template: {e}"))?
            .progress_chars("█▓▒░"),
    );

    let generator = Generator::new(index, config.preset.config());
    let start = Instant::now();

    let generations = dates
        .par_iter()
        .map(|&date| {
            let seed = daily_seed(date, &config.secret);
            let generation = generator.generate_with_report(&seed, config.category.as_deref());
            pb.inc(1);
            generation
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| format!("Cannot generate puzzle: {e}"))?;

    pb.finish_with_message("done");

    Ok(summarize(&generations, start.elapsed()))
}

fn summarize(generations: &[Generation], duration: Duration) -> BenchmarkResult {
    let total_puzzles = generations.len();
    let count_of = |outcome: Outcome| {
        generations
            .iter()
            .filter(|g| g.outcome == outcome)
            .count()
    };

    let mut distribution: BTreeMap<usize, usize> = BTreeMap::new();
    let mut grids: FxHashSet<Vec<String>> = FxHashSet::default();
    let mut total_words = 0;
    let mut total_attempts = 0;
    let mut total_blocked = 0;

    for generation in generations {
        let words = generation.puzzle.clues.len();
        *distribution.entry(words).or_insert(0) += 1;
        grids.insert(generation.puzzle.rows_as_text());
        total_words += words;
        total_attempts += generation.attempts;
        total_blocked += generation.puzzle.blocked_count();
    }

    let per_puzzle = |total: usize| {
        if total_puzzles == 0 {
            0.0
        } else {
            total as f64 / total_puzzles as f64
        }
    };

    BenchmarkResult {
        total_puzzles,
        complete: count_of(Outcome::Complete),
        partial: count_of(Outcome::Partial),
        fallback: count_of(Outcome::Fallback),
        average_words: per_puzzle(total_words),
        min_words: distribution.keys().next().copied().unwrap_or(0),
        max_words: distribution.keys().next_back().copied().unwrap_or(0),
        average_attempts: per_puzzle(total_attempts),
        average_blocked: per_puzzle(total_blocked),
        distinct_grids: grids.len(),
        distribution,
        duration,
        puzzles_per_second: total_puzzles as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::embedded_index;

    fn quiet(days: usize) -> BenchmarkConfig {
        let mut config = BenchmarkConfig::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(), days);
        config.secret = "secret".to_string();
        config.show_progress = false;
        config
    }

    #[test]
    fn benchmark_runs() {
        let index = embedded_index();
        let result = run_benchmark(&quiet(4), &index).unwrap();

        assert_eq!(result.total_puzzles, 4);
        assert_eq!(result.complete + result.partial + result.fallback, 4);
        assert!(result.average_words >= 1.0);
        assert!(result.min_words <= result.max_words);
        assert!(result.average_attempts >= 1.0);
    }

    #[test]
    fn benchmark_distribution_sums_correctly() {
        let index = embedded_index();
        let result = run_benchmark(&quiet(5), &index).unwrap();

        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.total_puzzles);
    }

    #[test]
    fn consecutive_dates_give_distinct_grids() {
        let index = embedded_index();
        let result = run_benchmark(&quiet(6), &index).unwrap();
        assert_eq!(result.distinct_grids, 6);
    }

    #[test]
    fn benchmark_is_deterministic() {
        let index = embedded_index();
        let first = run_benchmark(&quiet(3), &index).unwrap();
        let second = run_benchmark(&quiet(3), &index).unwrap();

        assert_eq!(first.distribution, second.distribution);
        assert_eq!(first.complete, second.complete);
    }

    #[test]
    fn small_category_falls_back() {
        let index = embedded_index();
        let mut config = quiet(2);
        config.category = Some("music".to_string());

        let result = run_benchmark(&config, &index).unwrap();
        assert_eq!(result.fallback, 2);
        assert_eq!(result.distinct_grids, 1);
    }

    #[test]
    fn zero_days_rejected() {
        let index = embedded_index();
        assert!(run_benchmark(&quiet(0), &index).is_err());
    }

    #[test]
    fn unknown_category_rejected() {
        let index = embedded_index();
        let mut config = quiet(2);
        config.category = Some("dinosaurs".to_string());
        assert!(run_benchmark(&config, &index).is_err());
    }

    #[test]
    fn empty_summary_is_zeroed() {
        let result = summarize(&[], Duration::from_millis(1));
        assert_eq!(result.total_puzzles, 0);
        assert!(result.average_words.abs() < f64::EPSILON);
        assert_eq!(result.min_words, 0);
    }
}

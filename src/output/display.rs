//! Display functions for command results

use super::formatters::{create_progress_bar, format_clue, render_grid};
use crate::commands::{BenchmarkResult, CheckResult, DictionaryStats, GenerateResult};
use crate::core::{Direction, GeneratedPuzzle};
use crate::generator::Outcome;
use colored::{ColoredString, Colorize};

fn print_header(title: &str, detail: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        title.bright_cyan().bold(),
        detail.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
}

fn outcome_label(outcome: Outcome) -> ColoredString {
    match outcome {
        Outcome::Complete => outcome.to_string().green().bold(),
        Outcome::Partial => outcome.to_string().yellow().bold(),
        Outcome::Fallback => outcome.to_string().red().bold(),
    }
}

fn print_grid(puzzle: &GeneratedPuzzle, reveal: bool) {
    for line in render_grid(puzzle, reveal) {
        println!("   {line}");
    }
}

fn print_clues(puzzle: &GeneratedPuzzle, reveal: bool) {
    for (direction, label) in [(Direction::Across, "Across:"), (Direction::Down, "Down:")] {
        println!("\n{}", label.bright_cyan().bold());
        for clue in puzzle.clues_in(direction) {
            println!("{}", format_clue(clue, reveal));
        }
    }
}

/// Print a generated puzzle with its clues
pub fn print_puzzle(result: &GenerateResult, reveal: bool) {
    let generation = &result.generation;
    let puzzle = &generation.puzzle;

    print_header("DAILY CROSSWORD", &result.date.format("%A %-d %B %Y").to_string());

    println!(
        "\n📊 {}x{} grid, {} across, {} down",
        puzzle.size.rows,
        puzzle.size.cols,
        puzzle.count(Direction::Across),
        puzzle.count(Direction::Down)
    );
    println!(
        "   Preset: {}  Outcome: {}  Attempts: {}",
        result.preset,
        outcome_label(generation.outcome),
        generation.attempts
    );
    if let Some(category) = &result.category {
        println!("   Category: {}", category.bright_yellow());
    }
    println!();

    print_grid(puzzle, reveal);
    print_clues(puzzle, reveal);
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    print_header("BENCHMARK RESULTS", "");

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Puzzles:          {}", result.total_puzzles);
    println!(
        "   Complete:         {}",
        format!("{}", result.complete).green()
    );
    println!(
        "   Partial:          {}",
        format!("{}", result.partial).yellow()
    );
    println!(
        "   Fallback:         {}",
        format!("{}", result.fallback).red()
    );
    println!(
        "   Average words:    {}",
        format!("{:.2}", result.average_words)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Fewest / most:    {} / {}",
        result.min_words, result.max_words
    );
    println!("   Average attempts: {:.2}", result.average_attempts);
    println!("   Average blocks:   {:.1}", result.average_blocked);
    println!(
        "   Distinct grids:   {}/{}",
        result.distinct_grids, result.total_puzzles
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:   {:.1}", result.puzzles_per_second);

    println!("\n📈 {}", "Words per puzzle:".bright_cyan().bold());
    for (&words, &count) in &result.distribution {
        let pct = (count as f64 / result.total_puzzles as f64) * 100.0;
        let bar_width = (pct / 2.5) as usize;
        let bar = format!(
            "{}{}",
            "█".repeat(bar_width).green(),
            "░"
                .repeat(40_usize.saturating_sub(bar_width))
                .bright_black()
        );
        println!("   {words:3}: {bar} {count:4} ({pct:5.1}%)");
    }
}

/// Print the result of checking a saved puzzle
pub fn print_check_result(path: &str, result: &CheckResult) {
    print_header("PUZZLE CHECK", path);

    println!(
        "\n📊 {}x{} grid, {} across, {} down, {} blocks",
        result.size.rows, result.size.cols, result.across, result.down, result.blocked
    );

    match &result.validation {
        Ok(()) => println!("   Structure:  {}", "valid".green()),
        Err(e) => println!("   Structure:  {}", e.to_string().red()),
    }
    if !result.unknown_answers.is_empty() {
        println!(
            "   Unknown:    {}",
            result.unknown_answers.join(", ").yellow()
        );
    }

    println!();
    if result.passed() {
        println!("{}", "✅ Puzzle is valid".green().bold());
    } else {
        println!("{}", "❌ Puzzle failed the check".red().bold());
    }
}

/// Print dictionary statistics
pub fn print_dictionary_stats(stats: &DictionaryStats) {
    print_header("DICTIONARY", "");

    println!("\n📊 {}", "Entries:".bright_cyan().bold());
    println!(
        "   Usable words:     {}",
        format!("{}", stats.total).bright_yellow().bold()
    );
    println!("   Common:           {}", stats.common);
    println!(
        "   Rows read:        {} ({} skipped)",
        stats.report.rows, stats.report.skipped
    );

    let widest = stats.lengths.values().copied().max().unwrap_or(0) as f64;
    println!("\n📈 {}", "Lengths:".bright_cyan().bold());
    for (&len, &count) in &stats.lengths {
        let bar = create_progress_bar(count as f64, widest, 30);
        println!("   {len:2}: {} {count:4}", bar.green());
    }

    println!("\n🏷  {}", "Categories:".bright_cyan().bold());
    for (name, &count) in &stats.categories {
        let line = format!("   {name:<12} {count:4}");
        if stats.small_categories.contains(name) {
            println!("{}  {}", line.yellow(), "(too small to search)".bright_black());
        } else {
            println!("{line}");
        }
    }
}

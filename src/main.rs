//! Daily Crossword - CLI
//!
//! Generates the puzzle for a date, benchmarks runs of dates, checks saved
//! puzzles and summarizes the dictionary.

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Args, Parser, Subcommand};
use daily_crossword::{
    commands::{
        BenchmarkConfig, GenerateConfig, check_puzzle_file, dictionary_stats, generate_puzzle,
        run_benchmark,
    },
    dictionary::{DictionaryIndex, DictionarySource, LoadReport, load_with_report},
    generator::Preset,
    output::{
        print_benchmark_result, print_check_result, print_dictionary_stats, print_puzzle,
        strip_answers,
    },
};
use log::info;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "daily_crossword",
    about = "Deterministic daily crossword generator",
    version,
    author,
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    generate: GenerateArgs,

    /// Dictionary file (.tsv or .json); the built-in dictionary if omitted
    #[arg(short = 'd', long, global = true)]
    dictionary: Option<PathBuf>,

    /// Preset: compact (default), standard, symmetric
    #[arg(short, long, global = true, default_value = "compact", value_parser = parse_preset)]
    preset: Preset,

    /// Only use words tagged with this category
    #[arg(short, long, global = true)]
    category: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one puzzle (default)
    Generate(GenerateArgs),

    /// Generate a run of consecutive dates and summarize the results
    Benchmark {
        /// Number of dates to generate
        #[arg(short = 'n', long, default_value = "30")]
        days: usize,

        /// First date (YYYY-MM-DD); today if omitted
        #[arg(long)]
        start: Option<NaiveDate>,

        /// Secret mixed into every seed
        #[arg(long, env = "DAILY_CROSSWORD_SECRET", default_value = "")]
        secret: String,
    },

    /// Validate a puzzle saved with --json --reveal
    Check {
        /// Puzzle JSON file
        file: PathBuf,
    },

    /// Show dictionary statistics
    Stats,
}

#[derive(Args)]
struct GenerateArgs {
    /// Puzzle date (YYYY-MM-DD); today if omitted
    #[arg(long)]
    date: Option<NaiveDate>,

    /// Secret mixed into the seed
    #[arg(long, env = "DAILY_CROSSWORD_SECRET")]
    secret: Option<String>,

    /// Raw seed, used instead of date and secret
    #[arg(long)]
    seed: Option<String>,

    /// Word to place first if it fits (repeatable)
    #[arg(short, long = "theme")]
    theme: Vec<String>,

    /// Override the preset's attempt count
    #[arg(short, long)]
    attempts: Option<usize>,

    /// Print the puzzle as JSON
    #[arg(long)]
    json: bool,

    /// Show answers
    #[arg(short, long)]
    reveal: bool,
}

fn parse_preset(name: &str) -> Result<Preset, String> {
    Preset::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = Preset::ALL.iter().map(|p| p.name()).collect();
        format!("unknown preset '{name}' (expected one of: {})", known.join(", "))
    })
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Load the dictionary named by `-d`, or the built-in one
fn load_dictionary(path: Option<&PathBuf>) -> Result<(DictionaryIndex, LoadReport)> {
    let source = path.map_or(DictionarySource::Embedded, |p| DictionarySource::File(p.clone()));
    let (index, report) = load_with_report(&source, None).with_context(|| match path {
        Some(p) => format!("Failed to load dictionary from {}", p.display()),
        None => "Failed to load built-in dictionary".to_string(),
    })?;

    info!(
        "Dictionary ready: {} words ({} rows skipped)",
        index.len(),
        report.skipped
    );
    Ok((index, report))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let (index, report) = load_dictionary(cli.dictionary.as_ref())?;

    // Default to Generate if no command given
    let command = cli.command.unwrap_or(Commands::Generate(cli.generate));

    match command {
        Commands::Generate(args) => {
            run_generate_command(args, cli.preset, cli.category, &index)
        }
        Commands::Benchmark {
            days,
            start,
            secret,
        } => {
            let mut config = BenchmarkConfig::new(start.unwrap_or_else(today), days);
            config.secret = secret;
            config.category = cli.category;
            config.preset = cli.preset;

            println!(
                "Generating {days} puzzles from {} with the {} preset...",
                config.start, config.preset
            );
            let result = run_benchmark(&config, &index).map_err(|e| anyhow::anyhow!(e))?;
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::Check { file } => {
            let minimums = cli.preset.config().minimums;
            let result =
                check_puzzle_file(&file, minimums, Some(&index)).map_err(|e| anyhow::anyhow!(e))?;
            print_check_result(&file.display().to_string(), &result);
            if result.passed() {
                Ok(())
            } else {
                anyhow::bail!("{} failed the check", file.display())
            }
        }
        Commands::Stats => {
            let stats = match cli.category.as_deref() {
                Some(category) => dictionary_stats(&index.with_category(category), report),
                None => dictionary_stats(&index, report),
            };
            print_dictionary_stats(&stats);
            Ok(())
        }
    }
}

fn run_generate_command(
    args: GenerateArgs,
    preset: Preset,
    category: Option<String>,
    index: &DictionaryIndex,
) -> Result<()> {
    let config = GenerateConfig {
        date: args.date.unwrap_or_else(today),
        secret: args.secret,
        seed: args.seed,
        category,
        preset,
        theme: args.theme,
        attempts: args.attempts,
    };
    let result = generate_puzzle(&config, index).map_err(|e| anyhow::anyhow!(e))?;

    if args.json {
        let puzzle = &result.generation.puzzle;
        let json = if args.reveal {
            serde_json::to_string_pretty(puzzle)
        } else {
            serde_json::to_string_pretty(&strip_answers(puzzle))
        }
        .context("Failed to serialize puzzle")?;
        println!("{json}");
    } else {
        print_puzzle(&result, args.reveal);
    }
    Ok(())
}

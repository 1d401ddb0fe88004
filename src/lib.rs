//! Daily Crossword
//!
//! A deterministic crossword generator: the same seed and dictionary always give
//! the same grid, and consecutive dates give different ones.
//!
//! # Quick Start
//!
//! ```rust
//! use daily_crossword::core::Direction;
//! use daily_crossword::dictionary::embedded_index;
//! use daily_crossword::generator::generate;
//!
//! let index = embedded_index();
//! let puzzle = generate(&index, "2024-01-01|secret", None).unwrap();
//!
//! for clue in puzzle.clues_in(Direction::Across) {
//!     println!("{}. {} ({})", clue.number, clue.clue, clue.length);
//! }
//! ```

// Core domain types
pub mod core;

// Word and clue dictionary
pub mod dictionary;

// Search, finalization and validation
pub mod generator;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

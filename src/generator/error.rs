//! Generator error types

use crate::core::{Direction, Position};
use std::fmt;

/// Problems with the inputs to a `generate` call; never retried
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The dictionary holds no usable words
    EmptyDictionary,
    /// The category filter left no usable words
    NoWordsInCategory(String),
    /// Grid dimensions outside the supported range
    InvalidGridSize { rows: usize, cols: usize },
    /// Minimum counts that no attempt could satisfy
    InvalidMinimums {
        across: usize,
        down: usize,
        target: usize,
    },
    /// Any other setting out of range
    InvalidSetting(String),
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDictionary => write!(f, "Dictionary has no usable words"),
            Self::NoWordsInCategory(category) => {
                write!(f, "Category '{category}' has no usable words")
            }
            Self::InvalidGridSize { rows, cols } => {
                write!(f, "Grid size {rows}x{cols} is not supported")
            }
            Self::InvalidMinimums {
                across,
                down,
                target,
            } => write!(
                f,
                "Minimums of {across} across and {down} down exceed the target of {target} words"
            ),
            Self::InvalidSetting(message) => write!(f, "Invalid setting: {message}"),
        }
    }
}

impl std::error::Error for ConfigurationError {}

/// A finished grid that breaks a structural rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A letter run of two or more cells that is not a clue answer
    InvalidRun {
        run: String,
        origin: Position,
        direction: Direction,
    },
    /// A clue whose answer does not match the grid
    ClueMismatch { number: u32, direction: Direction },
    TooFewAcross { found: usize, required: usize },
    TooFewDown { found: usize, required: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRun {
                run,
                origin,
                direction,
            } => write!(f, "run {run} {direction} at {origin} is not a clue"),
            Self::ClueMismatch { number, direction } => {
                write!(f, "clue {number} {direction} does not match the grid")
            }
            Self::TooFewAcross { found, required } => {
                write!(f, "{found} across clues, {required} required")
            }
            Self::TooFewDown { found, required } => {
                write!(f, "{found} down clues, {required} required")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Why one generation attempt was discarded
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptError {
    /// The search stopped short of the minimum counts
    SearchExhausted {
        placed: usize,
        across: usize,
        down: usize,
    },
    /// The finished grid failed the final scan
    ValidationFailed(ValidationError),
}

impl fmt::Display for AttemptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SearchExhausted {
                placed,
                across,
                down,
            } => write!(
                f,
                "search exhausted after {placed} words ({across} across, {down} down)"
            ),
            Self::ValidationFailed(e) => write!(f, "validation failed: {e}"),
        }
    }
}

impl std::error::Error for AttemptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ValidationFailed(e) => Some(e),
            Self::SearchExhausted { .. } => None,
        }
    }
}

impl From<ValidationError> for AttemptError {
    fn from(e: ValidationError) -> Self {
        Self::ValidationFailed(e)
    }
}

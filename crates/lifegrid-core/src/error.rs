//! Error types for the core crate.

use std::error::Error;
use std::fmt;

use crate::Coordinates;

/// Errors from checked generation construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A live cell lies outside `[0, width) x [0, height)`.
    CellOutOfBounds {
        /// The offending cell.
        cell: Coordinates,
        /// Grid width.
        width: u32,
        /// Grid height.
        height: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CellOutOfBounds {
                cell,
                width,
                height,
            } => write!(
                f,
                "cell {cell} out of bounds: [0, {width}) x [0, {height})"
            ),
        }
    }
}

impl Error for GridError {}

/// Errors from pattern construction.
#[derive(Clone, Debug, PartialEq)]
pub enum PatternError {
    /// A random-soup density outside `[0, 1]` (or not finite).
    InvalidDensity {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDensity { value } => {
                write!(f, "density must be a finite value in [0, 1], got {value}")
            }
        }
    }
}

impl Error for PatternError {}

/// Errors from parsing a `B.../S...` rulestring.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleParseError {
    /// The string is not of the form `B<digits>/S<digits>`.
    Malformed {
        /// The input that failed to parse.
        input: String,
    },
    /// A neighbour count outside `0..=8`.
    CountOutOfRange {
        /// The offending count.
        count: u32,
    },
}

impl fmt::Display for RuleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed { input } => {
                write!(f, "malformed rulestring '{input}', expected B<digits>/S<digits>")
            }
            Self::CountOutOfRange { count } => {
                write!(f, "neighbour count {count} is outside 0..=8")
            }
        }
    }
}

impl Error for RuleParseError {}

//! Error types with fix suggestions

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

#[derive(Error, Debug)]
pub enum AocError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("no puzzle input at '{path}'")]
    InputNotFound { path: String },

    #[error("day {day} is not implemented")]
    UnknownDay { day: u8 },

    #[error("day {day} has no part {part} solution")]
    MissingPart { day: u8, part: u8 },

    // ─────────────────────────────────────────────────────────────
    // Input parsing
    // ─────────────────────────────────────────────────────────────

    #[error("line {line_no}: malformed input: '{content}'")]
    MalformedLine { line_no: usize, content: String },

    #[error("parse error: {details}")]
    Parse { details: String },

    // ─────────────────────────────────────────────────────────────
    // Device graph (day 11)
    // ─────────────────────────────────────────────────────────────

    #[error("graph is not acyclic: {cycle_path}")]
    CycleDetected { cycle_path: String },

    #[error("path count exceeds the 128-bit range")]
    CountOverflow,

    #[error("{count} waypoints exceeds the supported maximum of {limit}")]
    TooManyWaypoints { count: usize, limit: usize },
}

impl AocError {
    /// Shorthand for a parse error with formatted details
    pub fn parse(details: impl Into<String>) -> Self {
        AocError::Parse {
            details: details.into(),
        }
    }
}

impl FixSuggestion for AocError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            AocError::Io(_) => Some("Check file path and permissions"),
            AocError::InputNotFound { .. } => {
                Some("Save your puzzle input as inputs/dayNN.txt or pass --input <file>")
            }
            AocError::UnknownDay { .. } => Some("Run 'aoc2025 days' to list implemented days"),
            AocError::MissingPart { .. } => {
                Some("Drop --part to get every part this day implements")
            }
            AocError::MalformedLine { .. } => {
                Some("Check the input file matches the puzzle's format for that day")
            }
            AocError::Parse { .. } => {
                Some("Check the input file matches the puzzle's format for that day")
            }
            AocError::CycleDetected { .. } => {
                Some("Device connections must only flow forward; remove the cycle from the input")
            }
            AocError::CountOverflow => None,
            AocError::TooManyWaypoints { .. } => {
                Some("Reduce the set of required devices; the table grows as 2^waypoints")
            }
        }
    }
}

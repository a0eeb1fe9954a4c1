//! Advent of Code 2025 solutions

pub mod days;
pub mod error;
pub mod graph;
pub mod input;
pub mod registry;

pub use days::DayAnswers;
pub use error::{AocError, FixSuggestion};
pub use graph::DeviceGraph;
pub use registry::{Day, DAYS};

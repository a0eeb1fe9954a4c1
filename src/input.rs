//! Puzzle input loading and shared parse helpers
//!
//! Inputs are plain text files, one per day, conventionally stored as
//! `inputs/dayNN.txt`. The helpers mirror how every day consumes its
//! input: outer whitespace trimmed once, then lines / blank-separated
//! blocks / embedded integers.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use walkdir::WalkDir;

use crate::error::AocError;

/// All integers in a string, sign included
static INT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-?\d+").unwrap());

/// Input file names, padded (`day07.txt`) or not (`day7.txt`)
static INPUT_FILE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^day(\d{1,2})\.txt$").unwrap());

/// Resolve the input file for a day: explicit path wins, otherwise
/// `<dir>/dayNN.txt`
pub fn input_path(day: u8, dir: &Path, explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(p) => p.to_path_buf(),
        None => dir.join(format!("day{day:02}.txt")),
    }
}

/// Read a day's puzzle input
pub fn load(day: u8, dir: &Path, explicit: Option<&Path>) -> Result<String, AocError> {
    let path = input_path(day, dir, explicit);
    match fs::read_to_string(&path) {
        Ok(data) => Ok(data),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(AocError::InputNotFound {
            path: path.display().to_string(),
        }),
        Err(e) => Err(AocError::Io(e)),
    }
}

/// Find every `dayNN.txt` under `dir` (subdirectories included),
/// keyed by day number. The first match per day wins.
pub fn discover(dir: &Path) -> HashMap<u8, PathBuf> {
    let mut found: HashMap<u8, PathBuf> = HashMap::new();
    let walk = WalkDir::new(dir).sort_by_file_name();
    for entry in walk.into_iter().filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.file_name().to_str() else {
            continue;
        };
        let day = INPUT_FILE_RE
            .captures(name)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u8>().ok());
        if let Some(day) = day {
            found
                .entry(day)
                .or_insert_with(|| entry.path().to_path_buf());
        }
    }
    found
}

/// Split input into lines, trimming outer whitespace only.
///
/// Leading whitespace inside a line is significant for column-oriented
/// puzzles (day 6), so lines are returned verbatim.
pub fn lines(data: &str) -> Vec<&str> {
    data.trim().split('\n').collect()
}

/// Split input into blocks separated by blank lines
pub fn blocks(data: &str) -> Vec<&str> {
    data.trim().split("\n\n").collect()
}

/// Extract every integer (positive and negative) from a string
pub fn ints(s: &str) -> Result<Vec<i64>, AocError> {
    INT_RE
        .find_iter(s)
        .map(|m| {
            m.as_str()
                .parse::<i64>()
                .map_err(|_| AocError::parse(format!("integer out of range: '{}'", m.as_str())))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_preserve_inner_leading_whitespace() {
        let data = "123 328\n 45 64\n  6 98\n";
        assert_eq!(lines(data), vec!["123 328", " 45 64", "  6 98"]);
    }

    #[test]
    fn blocks_split_on_blank_lines() {
        let data = "\n3-5\n10-14\n\n1\n5\n8\n";
        assert_eq!(blocks(data), vec!["3-5\n10-14", "1\n5\n8"]);
    }

    #[test]
    fn ints_extracts_signed_integers() {
        assert_eq!(ints("x=-3, y=17,z= 4").unwrap(), vec![-3, 17, 4]);
        assert_eq!(ints("no digits").unwrap(), Vec::<i64>::new());
    }

    #[test]
    fn ints_rejects_out_of_range() {
        assert!(ints("99999999999999999999999999").is_err());
    }

    #[test]
    fn default_path_is_zero_padded() {
        let path = input_path(7, Path::new("inputs"), None);
        assert_eq!(path, PathBuf::from("inputs/day07.txt"));
    }

    #[test]
    fn missing_input_is_a_distinct_error() {
        let err = load(99, Path::new("definitely/not/here"), None).unwrap_err();
        assert!(matches!(err, AocError::InputNotFound { .. }));
    }

    #[test]
    fn discover_finds_padded_and_nested_inputs() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("day01.txt"), "L68").unwrap();
        fs::write(dir.path().join("day7.txt"), "S").unwrap();
        fs::create_dir(dir.path().join("2025")).unwrap();
        fs::write(dir.path().join("2025/day11.txt"), "you: out").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let found = discover(dir.path());
        assert_eq!(found.len(), 3);
        assert!(found.contains_key(&1));
        assert!(found.contains_key(&7));
        assert_eq!(found[&11], dir.path().join("2025/day11.txt"));
    }

    #[test]
    fn discover_on_missing_dir_is_empty() {
        assert!(discover(Path::new("definitely/not/here")).is_empty());
    }
}

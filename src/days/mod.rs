//! One module per puzzle day

pub mod day01;
pub mod day02;
pub mod day03;
pub mod day04;
pub mod day05;
pub mod day06;
pub mod day07;
pub mod day08;
pub mod day09;
pub mod day10;
pub mod day11;
pub mod day12;

use serde::Serialize;

/// Answers produced by one day's solver.
///
/// Days that only have one part solved leave the other at None; the CLI
/// renders missing parts as such instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayAnswers {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part2: Option<String>,
}

impl DayAnswers {
    pub fn both(part1: impl ToString, part2: impl ToString) -> Self {
        Self {
            part1: Some(part1.to_string()),
            part2: Some(part2.to_string()),
        }
    }

    pub fn part1_only(part1: impl ToString) -> Self {
        Self {
            part1: Some(part1.to_string()),
            part2: None,
        }
    }

    pub fn part2_only(part2: impl ToString) -> Self {
        Self {
            part1: None,
            part2: Some(part2.to_string()),
        }
    }

    /// Answer for part 1 or 2, if that part is solved
    pub fn part(&self, part: u8) -> Option<&str> {
        match part {
            1 => self.part1.as_deref(),
            2 => self.part2.as_deref(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn part_lookup_covers_both_parts() {
        let answers = DayAnswers::both(5u32, "abc");
        assert_eq!(answers.part(1), Some("5"));
        assert_eq!(answers.part(2), Some("abc"));
        assert_eq!(answers.part(3), None);
    }

    #[test]
    fn single_part_days_leave_the_other_empty() {
        let answers = DayAnswers::part2_only(20u32);
        assert_eq!(answers.part(1), None);
        assert_eq!(answers.part(2), Some("20"));
    }

    #[test]
    fn json_omits_missing_parts() {
        let answers = DayAnswers::part1_only(7u32);
        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"part1":"7"}"#);
    }
}

//! Day 1: Safe Cracking
//!
//! A dial with positions 0..=99 starts at 50. Instructions like `L68`
//! rotate it left, `R48` right. Part 1 counts rotations that end on 0,
//! part 2 counts every click that passes through or lands on 0.

use crate::days::DayAnswers;
use crate::error::AocError;
use crate::input;

const DIAL_SIZE: i64 = 100;
const START: i64 = 50;

struct Rotation {
    left: bool,
    distance: i64,
}

fn parse(data: &str) -> Result<Vec<Rotation>, AocError> {
    input::lines(data)
        .iter()
        .enumerate()
        .map(|(idx, raw)| {
            let line = raw.trim();
            let malformed = || AocError::MalformedLine {
                line_no: idx + 1,
                content: raw.to_string(),
            };

            let mut chars = line.chars();
            let left = match chars.next() {
                Some('L') => true,
                Some('R') => false,
                _ => return Err(malformed()),
            };
            let distance: i64 = chars.as_str().parse().map_err(|_| malformed())?;
            if distance < 0 {
                return Err(malformed());
            }
            Ok(Rotation { left, distance })
        })
        .collect()
}

/// Part 1: how many rotations leave the dial pointing at 0
fn zero_stops(rotations: &[Rotation]) -> u64 {
    let mut position = START;
    let mut zeros = 0;
    for rotation in rotations {
        position = if rotation.left {
            (position - rotation.distance).rem_euclid(DIAL_SIZE)
        } else {
            (position + rotation.distance) % DIAL_SIZE
        };
        if position == 0 {
            zeros += 1;
        }
    }
    zeros
}

/// Part 2: how many individual clicks put the dial on 0
fn zero_crossings(rotations: &[Rotation]) -> u64 {
    let mut position = START;
    let mut zeros: i64 = 0;
    for rotation in rotations {
        let distance = rotation.distance;
        if rotation.left {
            // Going left we reach 0 after `position` clicks, then every
            // full turn after that. Starting exactly on 0 does not count.
            zeros += if position == 0 {
                distance / DIAL_SIZE
            } else if distance >= position {
                (distance - position) / DIAL_SIZE + 1
            } else {
                0
            };
            position = (position - distance).rem_euclid(DIAL_SIZE);
        } else {
            // Going right counts the multiples of 100 crossed
            zeros += (position + distance) / DIAL_SIZE - position / DIAL_SIZE;
            position = (position + distance) % DIAL_SIZE;
        }
    }
    zeros as u64
}

pub fn solve(data: &str) -> Result<DayAnswers, AocError> {
    let rotations = parse(data)?;
    Ok(DayAnswers::both(
        zero_stops(&rotations),
        zero_crossings(&rotations),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "L68\nL30\nR48\nL5\nR60\nL55\nL1\nL99\nR14\nL82";

    #[test]
    fn example_stops_on_zero_three_times() {
        let rotations = parse(EXAMPLE).unwrap();
        assert_eq!(zero_stops(&rotations), 3);
    }

    #[test]
    fn example_crosses_zero_six_times() {
        let rotations = parse(EXAMPLE).unwrap();
        assert_eq!(zero_crossings(&rotations), 6);
    }

    #[test]
    fn full_turns_cross_zero_each_time() {
        // From 50, R150 passes 100 and 200 on the absolute scale
        let rotations = parse("R150").unwrap();
        assert_eq!(zero_crossings(&rotations), 2);
        assert_eq!(zero_stops(&rotations), 1);
    }

    #[test]
    fn leaving_zero_does_not_recount_it() {
        let rotations = parse("L50\nL30").unwrap();
        assert_eq!(zero_stops(&rotations), 1);
        assert_eq!(zero_crossings(&rotations), 1);
    }

    #[test]
    fn bad_direction_is_malformed() {
        let err = parse("L68\nX30").unwrap_err();
        assert!(matches!(err, AocError::MalformedLine { line_no: 2, .. }));
    }

    #[test]
    fn solve_reports_both_parts() {
        let answers = solve(EXAMPLE).unwrap();
        assert_eq!(answers.part(1), Some("3"));
        assert_eq!(answers.part(2), Some("6"));
    }
}

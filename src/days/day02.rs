//! Day 2: Gift Shop
//!
//! Product IDs come as comma-separated inclusive ranges. An ID is
//! invalid when its decimal digits are a block repeated twice (part 1)
//! or repeated any number of times >= 2 (part 2). Both parts sum the
//! invalid IDs across all ranges.

use crate::days::DayAnswers;
use crate::error::AocError;

/// Digits split into two identical halves, e.g. 6464
fn is_doubled(id: u64) -> bool {
    let digits = id.to_string();
    if digits.len() % 2 != 0 {
        return false;
    }
    let (first, second) = digits.split_at(digits.len() / 2);
    first == second
}

/// Digits are some block repeated at least twice, e.g. 123123123
fn is_repeated(id: u64) -> bool {
    let digits = id.to_string();
    let bytes = digits.as_bytes();
    let len = bytes.len();
    (1..=len / 2).any(|block| {
        len % block == 0 && bytes.chunks(block).all(|chunk| chunk == &bytes[..block])
    })
}

fn parse_ranges(data: &str) -> Result<Vec<(u64, u64)>, AocError> {
    data.trim()
        .split(',')
        .map(|range| {
            let (start, end) = range
                .trim()
                .split_once('-')
                .ok_or_else(|| AocError::parse(format!("expected 'start-end', got '{range}'")))?;
            let parse = |s: &str| {
                s.trim()
                    .parse::<u64>()
                    .map_err(|_| AocError::parse(format!("bad product id '{s}'")))
            };
            Ok((parse(start)?, parse(end)?))
        })
        .collect()
}

fn invalid_sum(ranges: &[(u64, u64)], invalid: fn(u64) -> bool) -> u64 {
    ranges
        .iter()
        .flat_map(|&(start, end)| start..=end)
        .filter(|&id| invalid(id))
        .sum()
}

pub fn solve(data: &str) -> Result<DayAnswers, AocError> {
    let ranges = parse_ranges(data)?;
    Ok(DayAnswers::both(
        invalid_sum(&ranges, is_doubled),
        invalid_sum(&ranges, is_repeated),
    ))
}

//! Day 5: Fresh Ingredients
//!
//! Input has two blocks: inclusive freshness ranges, then ingredient
//! IDs. Part 1 counts IDs inside at least one range. Part 2 merges
//! overlapping or adjacent ranges and counts every ID they cover.

use crate::days::DayAnswers;
use crate::error::AocError;
use crate::input;

fn parse(data: &str) -> Result<(Vec<(u64, u64)>, Vec<u64>), AocError> {
    let blocks = input::blocks(data);
    if blocks.len() != 2 {
        return Err(AocError::parse(
            "expected ranges and ids separated by one blank line",
        ));
    }

    let ranges = blocks[0]
        .lines()
        .map(|line| {
            let (start, end) = line
                .trim()
                .split_once('-')
                .ok_or_else(|| AocError::parse(format!("expected 'start-end', got '{line}'")))?;
            let parse = |s: &str| {
                s.trim()
                    .parse::<u64>()
                    .map_err(|_| AocError::parse(format!("bad range bound '{s}'")))
            };
            Ok((parse(start)?, parse(end)?))
        })
        .collect::<Result<Vec<_>, AocError>>()?;

    let ids = blocks[1]
        .lines()
        .map(|line| {
            line.trim()
                .parse::<u64>()
                .map_err(|_| AocError::parse(format!("bad ingredient id '{line}'")))
        })
        .collect::<Result<Vec<_>, AocError>>()?;

    Ok((ranges, ids))
}

/// Part 1: ingredient IDs covered by at least one range
fn fresh_count(ranges: &[(u64, u64)], ids: &[u64]) -> usize {
    ids.iter()
        .filter(|&&id| ranges.iter().any(|&(start, end)| start <= id && id <= end))
        .count()
}

/// Part 2: total IDs covered once overlapping or adjacent ranges merge
fn covered_total(ranges: &[(u64, u64)]) -> u64 {
    let mut sorted = ranges.to_vec();
    sorted.sort_unstable();

    let mut merged: Vec<(u64, u64)> = Vec::new();
    for (start, end) in sorted {
        match merged.last_mut() {
            Some(last) if start <= last.1 + 1 => last.1 = last.1.max(end),
            _ => merged.push((start, end)),
        }
    }

    merged.iter().map(|&(start, end)| end - start + 1).sum()
}

pub fn solve(data: &str) -> Result<DayAnswers, AocError> {
    let (ranges, ids) = parse(data)?;
    Ok(DayAnswers::both(
        fresh_count(&ranges, &ids),
        covered_total(&ranges),
    ))
}

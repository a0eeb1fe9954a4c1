//! Day 3: Battery Banks
//!
//! Each line is a bank of single-digit batteries. Picking k batteries
//! left to right forms a k-digit joltage reading; both parts maximize
//! that reading per bank (k=2, then k=12) and sum over banks.

use crate::days::DayAnswers;
use crate::error::AocError;
use crate::input;

/// Largest k-digit number formed by a subsequence of the bank.
///
/// Classic greedy: for each output position take the largest digit that
/// still leaves enough digits behind it, preferring the leftmost.
fn best_joltage(bank: &str, picks: usize) -> Result<u64, AocError> {
    let digits = bank.trim().as_bytes();
    if digits.len() < picks {
        return Err(AocError::parse(format!(
            "bank '{bank}' has fewer than {picks} batteries"
        )));
    }
    if let Some(&bad) = digits.iter().find(|b| !b.is_ascii_digit()) {
        return Err(AocError::parse(format!(
            "bank '{bank}' contains non-digit '{}'",
            bad as char
        )));
    }

    let mut reading: u64 = 0;
    let mut start = 0;
    for pos in 0..picks {
        let window_end = digits.len() - (picks - pos) + 1;
        let mut best = start;
        for i in start..window_end {
            if digits[i] > digits[best] {
                best = i;
            }
        }
        reading = reading * 10 + u64::from(digits[best] - b'0');
        start = best + 1;
    }
    Ok(reading)
}

fn total_joltage(data: &str, picks: usize) -> Result<u64, AocError> {
    input::lines(data)
        .iter()
        .map(|bank| best_joltage(bank, picks))
        .sum()
}

pub fn solve(data: &str) -> Result<DayAnswers, AocError> {
    Ok(DayAnswers::both(
        total_joltage(data, 2)?,
        total_joltage(data, 12)?,
    ))
}

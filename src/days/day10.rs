//! Day 10: Indicator Machines
//!
//! Each line describes a machine: target indicator lights `[.##.]` and
//! buttons `(1,3)` that toggle light subsets. Part 1 finds the fewest
//! button presses lighting exactly the target, summed over machines.
//! Pressing a button twice cancels out, so each button is pressed 0 or
//! 1 times and the search space is all button subsets.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::days::DayAnswers;
use crate::error::AocError;
use crate::input;

static LIGHTS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([.#]+)\]").unwrap());
static BUTTON_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([0-9,]+)\)").unwrap());

struct Machine {
    /// Bit i set when light i must end up on
    target: u32,
    /// One toggle mask per button
    buttons: Vec<u32>,
}

fn parse_machine(line: &str, line_no: usize) -> Result<Machine, AocError> {
    let malformed = || AocError::MalformedLine {
        line_no,
        content: line.to_string(),
    };

    let lights = LIGHTS_RE
        .captures(line)
        .and_then(|c| c.get(1))
        .ok_or_else(malformed)?
        .as_str();
    if lights.len() > 32 {
        return Err(AocError::parse(format!(
            "machine has {} indicator lights, more than the supported 32",
            lights.len()
        )));
    }
    let mut target = 0u32;
    for (i, c) in lights.chars().enumerate() {
        if c == '#' {
            target |= 1 << i;
        }
    }

    let mut buttons = Vec::new();
    for caps in BUTTON_RE.captures_iter(line) {
        let mut mask = 0u32;
        if let Some(indices) = caps.get(1) {
            for index in indices.as_str().split(',') {
                let index: usize = index.parse().map_err(|_| malformed())?;
                if index >= lights.len() {
                    return Err(malformed());
                }
                mask |= 1 << index;
            }
        }
        buttons.push(mask);
    }
    if buttons.len() > 24 {
        return Err(AocError::parse(format!(
            "machine has {} buttons; the subset search stops at 24",
            buttons.len()
        )));
    }

    Ok(Machine { target, buttons })
}

/// Fewest presses reaching the target, 0 when unreachable
fn fewest_presses(machine: &Machine) -> u64 {
    let mut best: Option<u32> = None;
    for subset in 0..(1u64 << machine.buttons.len()) {
        let mut state = 0u32;
        for (i, mask) in machine.buttons.iter().enumerate() {
            if subset & (1 << i) != 0 {
                state ^= mask;
            }
        }
        if state == machine.target {
            let presses = subset.count_ones();
            best = Some(best.map_or(presses, |b| b.min(presses)));
        }
    }
    u64::from(best.unwrap_or(0))
}

fn total_presses(data: &str) -> Result<u64, AocError> {
    input::lines(data)
        .iter()
        .enumerate()
        .map(|(idx, line)| Ok(fewest_presses(&parse_machine(line, idx + 1)?)))
        .sum()
}

pub fn solve(data: &str) -> Result<DayAnswers, AocError> {
    Ok(DayAnswers::part1_only(total_presses(data)?))
}

//! Day 4: Printing Department
//!
//! A grid of paper rolls (`@`). A roll is accessible when fewer than 4
//! of its 8 neighbors are rolls. Part 1 counts accessible rolls; part 2
//! removes accessible rolls in waves until none are left and counts the
//! removals.

use std::collections::HashSet;

use crate::days::DayAnswers;
use crate::error::AocError;
use crate::input;

type Pos = (i32, i32);

const NEIGHBORS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

fn parse_rolls(data: &str) -> HashSet<Pos> {
    input::lines(data)
        .iter()
        .enumerate()
        .flat_map(|(row, line)| {
            line.char_indices()
                .filter(|&(_, c)| c == '@')
                .map(move |(col, _)| (row as i32, col as i32))
        })
        .collect()
}

fn neighbor_count(pos: Pos, rolls: &HashSet<Pos>) -> usize {
    NEIGHBORS
        .iter()
        .filter(|(dr, dc)| rolls.contains(&(pos.0 + dr, pos.1 + dc)))
        .count()
}

fn accessible(rolls: &HashSet<Pos>) -> HashSet<Pos> {
    rolls
        .iter()
        .copied()
        .filter(|&pos| neighbor_count(pos, rolls) < 4)
        .collect()
}

/// Part 1: rolls a forklift can grab right now
fn accessible_count(data: &str) -> usize {
    accessible(&parse_rolls(data)).len()
}

/// Part 2: total rolls removed by repeatedly taking every accessible one
fn removed_count(data: &str) -> usize {
    let mut rolls = parse_rolls(data);
    let mut removed = 0;
    loop {
        let wave = accessible(&rolls);
        if wave.is_empty() {
            break;
        }
        removed += wave.len();
        for pos in wave {
            rolls.remove(&pos);
        }
    }
    removed
}

pub fn solve(data: &str) -> Result<DayAnswers, AocError> {
    Ok(DayAnswers::both(accessible_count(data), removed_count(data)))
}
